use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors returned when serving a feed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The event store does not know this company.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),
    /// The event store failed; any cached document is left untouched.
    #[error("Event store failed: {0}")]
    Store(#[from] RepositoryError),
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
