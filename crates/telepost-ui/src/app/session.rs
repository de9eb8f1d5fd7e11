//! Browser credential persistence and environment helpers.

use crate::core::credentials::{CredentialStore, TOKEN_KEY};
use crate::core::logic::backend_base_url;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// Credential store backed by `LocalStorage`.
///
/// Staleness is discovered reactively: the API client clears this store the
/// moment any request comes back unauthorized.
pub(crate) struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn get(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    fn set(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            console::error!("failed to persist credential", err.to_string());
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

pub(crate) fn load_token() -> Option<String> {
    BrowserCredentials.get()
}

pub(crate) fn store_token(token: &str) {
    BrowserCredentials.set(token);
}

pub(crate) fn clear_token() {
    BrowserCredentials.clear();
}

/// Hard navigation to the login screen, used by the 401 interception path.
pub(crate) fn redirect_to_login() {
    if let Err(err) = window().location().set_href("/login") {
        console::error!("failed to redirect to login", format!("{err:?}"));
    }
}

/// Backend origin for the current page location.
pub(crate) fn api_base_url() -> String {
    let location = window().location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    let port = location.port().unwrap_or_default();
    backend_base_url(&protocol, &hostname, &port)
}
