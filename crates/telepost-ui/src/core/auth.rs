//! Credential token encoding shared across the UI.
//!
//! # Design
//! - The token is derived once at login and treated as opaque afterwards.
//! - Blank usernames or passwords never produce a token, so callers can
//!   treat `None` as "nothing to submit".
//! - Header assembly lives here so transport code never re-spells the scheme.

use base64::{Engine as _, engine::general_purpose};

/// Derive the opaque credential token from a username/password pair.
///
/// Returns `None` when either part is blank after trimming; the token is the
/// standard base64 encoding of `username:password`, matching what the backend
/// expects in the `Authorization` header.
#[must_use]
pub fn encode_basic_token(username: &str, password: &str) -> Option<String> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some(general_purpose::STANDARD.encode(format!("{username}:{password}")))
}

/// Build the `Authorization` header value for a stored token.
#[must_use]
pub fn authorization_value(token: &str) -> String {
    format!("Basic {token}")
}
