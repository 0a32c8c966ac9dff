use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(sqlx::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Unauthorized => "Unauthorized".to_string(),
            // Database and internal details stay in the logs
            AppError::Db(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(value: sqlx::Error) -> Self {
        AppError::Db(value)
    }
}

// Extractor rejections are client mistakes: malformed JSON, a bad UUID in the
// path or query string. They share the `{error}` body with every other 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Failure stages of a bhavcopy refresh. Each renders its own `message` so
/// callers can tell a download problem from a failed table write.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("BhavCopy fetch failed: {0}")]
    Fetch(String),
    #[error("bse_stocks failed: {0}")]
    Latest(sqlx::Error),
    #[error("stocks_portfolio failed: {0}")]
    History(sqlx::Error),
    #[error("refresh already in progress")]
    InProgress,
}

impl IngestError {
    pub fn stage(&self) -> &'static str {
        match self {
            IngestError::Fetch(_) => "BhavCopy fetch failed",
            IngestError::Latest(_) => "bse_stocks failed",
            IngestError::History(_) => "stocks_portfolio failed",
            IngestError::InProgress => "refresh already in progress",
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> axum::response::Response {
        match self {
            IngestError::InProgress => (
                StatusCode::CONFLICT,
                Json(json!({ "error": self.stage() })),
            )
                .into_response(),
            IngestError::Fetch(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": self.stage(), "error": msg })),
            )
                .into_response(),
            IngestError::Latest(ref e) | IngestError::History(ref e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": self.stage(), "error": e.to_string() })),
            )
                .into_response(),
        }
    }
}
