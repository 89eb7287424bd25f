//! Error types for digest sessions.

use std::fmt;

use thiserror::Error;

/// Session operation that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Feeding bytes with `write`.
    Write,
    /// Sealing the session with `finalize`.
    Finalize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Write => f.write_str("write"),
            Operation::Finalize => f.write_str("finalize"),
        }
    }
}

/// Errors surfaced by a digest session.
///
/// The computation itself cannot fail; every error is caller misuse and none
/// is retryable without `reset()`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `write` or `finalize` was called on a session that has already been finalized.
    #[error("cannot {operation} a finalized digest session; call reset() to start a new message")]
    InvalidState { operation: Operation },
}

impl Error {
    /// Create an invalid state error for the rejected operation
    pub fn invalid_state(operation: Operation) -> Self {
        Self::InvalidState { operation }
    }

    /// The operation that was rejected.
    pub fn operation(&self) -> Operation {
        match self {
            Self::InvalidState { operation } => *operation,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_write_message() {
        let error = Error::invalid_state(Operation::Write);
        assert!(error.to_string().contains("cannot write"));
        assert!(error.to_string().contains("reset()"));
        assert_eq!(error.operation(), Operation::Write);
    }

    #[test]
    fn test_invalid_state_finalize_message() {
        let error = Error::invalid_state(Operation::Finalize);
        assert!(error.to_string().contains("cannot finalize"));
        assert_eq!(error, Error::InvalidState { operation: Operation::Finalize });
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_std_error(&Error::invalid_state(Operation::Write));
    }
}
