//! Shared presentation components.
pub(crate) mod auth;
pub(crate) mod confirm;
pub(crate) mod status;
pub(crate) mod toast;
