use crate::errors::{
    error::ErrorResponse,
    repository::RepositoryError,
    service::ServiceError,
    validation::{format_validation_errors, format_validation_errors_detailed},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Validation { message: String, errors: Value },
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl HttpError {
    /// Validation failure attached to a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let (field, message) = (field.into(), message.into());

        let mut errors = serde_json::Map::new();
        errors.insert(field.clone(), json!([message.clone()]));

        HttpError::Validation {
            message: format!("{field}: {message}"),
            errors: Value::Object(errors),
        }
    }
}

impl From<ValidationErrors> for HttpError {
    fn from(errors: ValidationErrors) -> Self {
        HttpError::Validation {
            message: format_validation_errors(&errors),
            errors: format_validation_errors_detailed(&errors),
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(what) => HttpError::NotFound(format!("{what} not found")),

            ServiceError::Validation(errors) => HttpError::from(errors),

            ServiceError::InvalidField { field, message } => {
                HttpError::invalid_field(field, message)
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => {
                    HttpError::Conflict(format!("Already exists: {msg}"))
                }
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                other => {
                    error!("❌ Unhandled repository error: {other:?}");
                    HttpError::Internal("Repository error".into())
                }
            },

            ServiceError::Storage(msg) => {
                error!("❌ Storage error: {msg}");
                HttpError::Internal("Failed to store file".into())
            }

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, Some(errors))
            }
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message,
            errors,
        });

        (status, body).into_response()
    }
}
