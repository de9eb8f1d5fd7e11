//! Credential storage abstraction.
//!
//! The browser keeps the token in `LocalStorage`; tests need to assert the
//! eviction policy without a DOM. Both go through this trait so the API
//! client and session gate never touch ambient storage directly.

use std::cell::RefCell;

/// Storage key holding the credential token.
pub const TOKEN_KEY: &str = "telepost.auth_token";

/// A store for the single revocable credential token.
pub trait CredentialStore {
    /// Read the current token, if any.
    fn get(&self) -> Option<String>;
    /// Persist a token, overwriting any prior value.
    fn set(&self, token: &str);
    /// Remove the token.
    fn clear(&self);
}

/// In-memory credential store used by native tests.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
}

impl CredentialStore for MemoryCredentials {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialStore, MemoryCredentials};

    #[test]
    fn set_overwrites_and_clear_evicts() {
        let store = MemoryCredentials::default();
        assert_eq!(store.get(), None);
        store.set("first");
        store.set("second");
        assert_eq!(store.get(), Some("second".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryCredentials::default();
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }
}
