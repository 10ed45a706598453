use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use storage::validation::FieldErrors;
use validator::ValidationErrors;

use crate::mail::MailError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Mail(MailError),
    BadRequest(String),
    Unauthorized,
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Mail(e) => write!(f, "Mail error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(StorageError::Invalid(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "message": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "message": msg
                })
            }
            Self::Storage(StorageError::Invalid(errors)) => validation_body(errors),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "message": "An internal error occurred"
                })
            }
            Self::Validation(errors) => validation_body(&FieldErrors::from(errors)),
            Self::Mail(MailError::MissingCredentials) => {
                tracing::error!("Contact email requested but SMTP credentials are not configured");
                json!({
                    "message": "Failed to send message"
                })
            }
            Self::Mail(e) => {
                tracing::error!("Mail error: {:?}", e);
                json!({
                    "message": "Failed to send message"
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "message": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "message": "Unauthorized"
                })
            }
            Self::NotFound => {
                json!({
                    "message": "Resource not found"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

fn validation_body(errors: &FieldErrors) -> serde_json::Value {
    json!({
        "message": "Validation failed",
        "details": errors.details()
    })
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<FieldErrors> for WebError {
    fn from(errors: FieldErrors) -> Self {
        Self::Storage(StorageError::Invalid(errors))
    }
}

impl From<MailError> for WebError {
    fn from(error: MailError) -> Self {
        Self::Mail(error)
    }
}
