//! Pure functions for mapping core errors to HTTP status codes.

use crate::feed::FeedError;
use crate::storage::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use calfeed_core::http_mapping::repository_error_to_status_code;
/// use calfeed_core::storage::RepositoryError;
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Company",
///     id: "acme".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`FeedError`] to an HTTP status code.
///
/// Unknown companies are 404; store failures map like any repository error.
pub fn feed_error_to_status_code(error: &FeedError) -> u16 {
    match error {
        FeedError::CompanyNotFound(_) => 404,
        FeedError::Store(inner) => repository_error_to_status_code(inner),
    }
}
