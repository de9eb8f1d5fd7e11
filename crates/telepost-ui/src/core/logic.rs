//! Pure helpers extracted from transport and form code for native testing.

use crate::core::credentials::CredentialStore;
use crate::core::error::ApiError;

/// Path of the list endpoint, also used as the login probe.
#[must_use]
pub const fn list_path() -> &'static str {
    "/channels/get_all"
}

/// Path fetching a single channel by id.
#[must_use]
pub fn channel_path(id: i64) -> String {
    format!("/channels/get/{id}")
}

/// Path creating a new channel.
#[must_use]
pub const fn create_path() -> &'static str {
    "/channels/add"
}

/// Path of the connectivity check for a destination identifier.
#[must_use]
pub fn check_path(chat_id: i64) -> String {
    format!("/channels/check/{chat_id}")
}

/// Path updating an existing channel.
#[must_use]
pub fn update_path(id: i64) -> String {
    format!("/channels/update/{id}")
}

/// Path deleting a channel.
#[must_use]
pub fn delete_path(id: i64) -> String {
    format!("/channels/delete/{id}")
}

/// Path toggling a channel's scheduler state.
///
/// Activation and deactivation are distinct endpoints on the backend.
#[must_use]
pub fn active_path(id: i64, active: bool) -> String {
    if active {
        format!("/channels/on/{id}")
    } else {
        format!("/channels/off/{id}")
    }
}

/// Resolve the backend origin from the page origin.
///
/// The trunk dev server runs on 8080 while the backend listens on 8000;
/// any other explicit port (or none, behind a reverse proxy) is kept as-is.
#[must_use]
pub fn backend_base_url(protocol: &str, hostname: &str, port: &str) -> String {
    let mapped = match port {
        "" => None,
        "8080" => Some("8000"),
        other => Some(other),
    };
    let mut base = format!("{protocol}//{hostname}");
    if let Some(port) = mapped {
        base.push(':');
        base.push_str(port);
    }
    base
}

/// Classify a response status, applying the credential eviction policy.
///
/// A 401 from any endpoint clears the credential and fires the redirect hook
/// exactly once before the error is returned, so the in-flight caller still
/// observes its own failure path. Other non-success statuses pass through
/// untouched; the credential survives them.
///
/// # Errors
/// [`ApiError::Unauthorized`] on 401, [`ApiError::Status`] on any other
/// non-success status.
pub fn intercept_status(
    status: u16,
    ok: bool,
    credentials: &dyn CredentialStore,
    redirect: impl FnOnce(),
) -> Result<(), ApiError> {
    if status == 401 {
        credentials.clear();
        redirect();
        return Err(ApiError::Unauthorized);
    }
    if !ok {
        return Err(ApiError::Status(status));
    }
    Ok(())
}

/// Coerce a raw chat id field to its numeric form.
#[must_use]
pub fn parse_chat_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Coerce a raw interval field to a positive minute count.
#[must_use]
pub fn parse_interval(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|minutes| *minutes > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        active_path, backend_base_url, channel_path, check_path, delete_path, intercept_status,
        parse_chat_id, parse_interval, update_path,
    };
    use crate::core::credentials::{CredentialStore, MemoryCredentials};
    use crate::core::error::ApiError;
    use std::cell::Cell;

    #[test]
    fn paths_match_backend_contract() {
        assert_eq!(channel_path(5), "/channels/get/5");
        assert_eq!(check_path(-1_001), "/channels/check/-1001");
        assert_eq!(update_path(5), "/channels/update/5");
        assert_eq!(delete_path(9), "/channels/delete/9");
        assert_eq!(active_path(3, true), "/channels/on/3");
        assert_eq!(active_path(3, false), "/channels/off/3");
    }

    #[test]
    fn base_url_maps_dev_port() {
        assert_eq!(
            backend_base_url("http:", "localhost", "8080"),
            "http://localhost:8000"
        );
        assert_eq!(
            backend_base_url("https:", "panel.example.org", ""),
            "https://panel.example.org"
        );
        assert_eq!(
            backend_base_url("http:", "10.0.0.4", "8000"),
            "http://10.0.0.4:8000"
        );
    }

    #[test]
    fn unauthorized_evicts_and_redirects_exactly_once() {
        let store = MemoryCredentials::default();
        store.set("token");
        let redirects = Cell::new(0_u32);

        let outcome = intercept_status(401, false, &store, || redirects.set(redirects.get() + 1));
        assert_eq!(outcome, Err(ApiError::Unauthorized));
        assert_eq!(store.get(), None);
        assert_eq!(redirects.get(), 1);
    }

    #[test]
    fn other_failures_keep_the_credential() {
        let store = MemoryCredentials::default();
        store.set("token");
        let redirects = Cell::new(0_u32);

        let outcome = intercept_status(503, false, &store, || redirects.set(redirects.get() + 1));
        assert_eq!(outcome, Err(ApiError::Status(503)));
        assert_eq!(store.get(), Some("token".to_string()));
        assert_eq!(redirects.get(), 0);
    }

    #[test]
    fn success_passes_through_untouched() {
        let store = MemoryCredentials::default();
        store.set("token");
        let redirects = Cell::new(0_u32);

        assert_eq!(intercept_status(200, true, &store, || redirects.set(1)), Ok(()));
        assert_eq!(store.get(), Some("token".to_string()));
        assert_eq!(redirects.get(), 0);
    }

    #[test]
    fn chat_id_coercion_accepts_negatives() {
        assert_eq!(parse_chat_id(" -1001234 "), Some(-1_001_234));
        assert_eq!(parse_chat_id("100"), Some(100));
        assert_eq!(parse_chat_id("12a"), None);
        assert_eq!(parse_chat_id(""), None);
    }

    #[test]
    fn interval_must_be_a_positive_minute_count() {
        assert_eq!(parse_interval("240"), Some(240));
        assert_eq!(parse_interval("0"), None);
        assert_eq!(parse_interval("-5"), None);
        assert_eq!(parse_interval("soon"), None);
    }
}
