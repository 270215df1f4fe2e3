/// Error types for the board feed service.
///
/// A failed page load is never retried and never partially rendered; every
/// error maps to a generic failure document for the browser.
use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for board-feed operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Feed query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration loading failure
    #[error("configuration error: {0}")]
    Config(String),

    /// Anything else that should surface as a generic failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");

        // The only consumer is a browser, so the generic failure response is
        // a minimal document rather than a JSON envelope.
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(concat!(
                "<!doctype html>\n<html lang=\"ko\">\n<head><meta charset=\"utf-8\" />",
                "<title>오류</title></head>\n",
                "<body><h1>페이지를 불러올 수 없습니다</h1></body>\n</html>\n",
            ))
    }
}
