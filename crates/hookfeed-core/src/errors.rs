//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`hookfeed_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: hookfeed_database_interface::DatabaseError,
    },
}

impl From<hookfeed_database_interface::DatabaseError> for DomainError {
    fn from(e: hookfeed_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
