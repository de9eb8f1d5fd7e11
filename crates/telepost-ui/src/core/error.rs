//! Failure taxonomy for backend calls.

use thiserror::Error;

/// Error surfaced by every API client operation.
///
/// `Unauthorized` is special-cased by the client itself (credential eviction
/// plus redirect); it still reaches the caller so the in-flight operation's
/// failure path fires exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the credential; it has already been evicted.
    #[error("authorization rejected")]
    Unauthorized,
    /// The requested channel does not exist.
    #[error("channel not found")]
    NotFound,
    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The request never completed.
    #[error("network failure: {0}")]
    Network(String),
    /// The response body did not match the contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure already triggered the credential eviction path.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn unauthorized_is_flagged() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Status(500).is_unauthorized());
        assert!(!ApiError::NotFound.is_unauthorized());
    }

    #[test]
    fn display_names_the_failure() {
        assert_eq!(ApiError::Status(503).to_string(), "backend returned status 503");
        assert_eq!(
            ApiError::Network("timeout".into()).to_string(),
            "network failure: timeout"
        );
    }
}
