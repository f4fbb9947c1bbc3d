pub mod companies;
pub mod error;
pub mod events;
pub mod feeds;
pub mod health;

pub use error::AppError;

use axum::http::StatusCode;

/// Error response with message (for form parsing errors).
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}
