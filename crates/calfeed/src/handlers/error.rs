use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use calfeed_core::calendar::{CompanyError, EventError};
use calfeed_core::feed::FeedError;
use calfeed_core::http_mapping::{feed_error_to_status_code, repository_error_to_status_code};
use calfeed_core::storage::RepositoryError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(feed_error) = self.0.downcast_ref::<FeedError>() {
            feed_error_to_status_code(feed_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if self.0.downcast_ref::<EventError>().is_some()
            || self.0.downcast_ref::<CompanyError>().is_some()
        {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
