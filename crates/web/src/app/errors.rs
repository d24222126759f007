use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use useradmin_core::ConsoleError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    #[error("cannot mount the console under {0:?}: base path must start with '/' and not end with '/'")]
    InvalidBasePath(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Console(err) => console_status(err),
            AppError::Render(_) | AppError::InvalidBasePath(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub fn console_status(err: &ConsoleError) -> StatusCode {
    if err.is_fatal() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    match err {
        ConsoleError::MissingRequiredField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ConsoleError::RecordNotFound { .. } | ConsoleError::RouteNotMatched(_) => StatusCode::NOT_FOUND,
        ConsoleError::ContextUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request aborted");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_unavailable_is_a_server_error() {
        let err = AppError::from(ConsoleError::ContextUnavailable);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn recoverable_errors_map_to_client_statuses() {
        assert_eq!(
            console_status(&ConsoleError::missing_field("name")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            console_status(&ConsoleError::not_found("user", "9")),
            StatusCode::NOT_FOUND
        );
    }
}
