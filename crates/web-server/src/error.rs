use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

/// The error surface of the HTTP boundary.
///
/// Every variant renders as a JSON object with a single `error` field
/// holding a short human-readable message. Storage causes are logged here
/// and never leak into the response body.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request payload failed validation; storage was never touched.
    #[error("{0}")]
    Validation(String),
    /// The lookup ran fine but matched nothing.
    #[error("{0}")]
    NotFound(String),
    /// A query or connection failed; `message` is the caller-safe text.
    #[error("{message}")]
    Storage { message: String, source: DbError },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    /// Pairs a storage failure with the per-endpoint message callers see.
    pub fn storage(message: impl Into<String>, source: DbError) -> Self {
        AppError::Storage {
            message: message.into(),
            source,
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Storage { message, source } => {
                tracing::error!(error = ?source, "Storage error.");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
