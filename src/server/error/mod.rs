//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type:
//! domain failures (not found, validation, conflicts) map to specific status codes, and
//! everything else is flattened to a 500 whose details are only logged.

pub mod config;
pub mod validation;

use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::FieldError},
};

/// Message returned to clients for every 500 response.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message returned when a request body cannot be parsed.
pub const MALFORMED_JSON_MESSAGE: &str = "Malformed JSON request";

/// Message returned when at least one field constraint fails.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed for one or more fields";

/// Message returned when a query or path parameter cannot be parsed.
pub const INVALID_PARAMETER_MESSAGE: &str = "Invalid request parameter";

/// Top-level application error type.
///
/// Most infrastructure variants use `#[from]` for automatic conversion and always result
/// in a 500. Domain variants carry enough context to build the client-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, e.g. binding the listener or reading seed files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON (de)serialization error outside of request extraction, e.g. seed files.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// A resource looked up by one of its fields does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    /// One or more request fields failed validation.
    ///
    /// Results in 400 Bad Request with a `fieldErrors` list.
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The request body could not be parsed.
    ///
    /// Results in 400 Bad Request with a generic message; the parser detail is logged only.
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    /// A query or path parameter could not be parsed.
    ///
    /// Results in 400 Bad Request with a generic message; the detail is logged only.
    #[error("Invalid request parameter: {0}")]
    BadRequest(String),

    /// A write collided with a uniqueness constraint.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Builds a `NotFound` error, e.g. `AppError::not_found("Student", "id", id)`.
    pub fn not_found(resource: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            field,
            value: value.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `MalformedRequest` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => {
                let message = self.to_string();
                tracing::warn!("Resource not found: {}", message);
                error_response(StatusCode::NOT_FOUND, message, None)
            }
            Self::Validation(field_errors) => {
                tracing::info!("Validation failed on {} fields", field_errors.len());
                error_response(
                    StatusCode::BAD_REQUEST,
                    VALIDATION_FAILED_MESSAGE,
                    Some(field_errors),
                )
            }
            Self::MalformedRequest(detail) => {
                tracing::warn!("Malformed request body: {}", detail);
                error_response(StatusCode::BAD_REQUEST, MALFORMED_JSON_MESSAGE, None)
            }
            Self::BadRequest(detail) => {
                tracing::warn!("Invalid request parameter: {}", detail);
                error_response(StatusCode::BAD_REQUEST, INVALID_PARAMETER_MESSAGE, None)
            }
            Self::Conflict(message) => {
                tracing::warn!("Conflict: {}", message);
                error_response(StatusCode::CONFLICT, message, None)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            UNEXPECTED_ERROR_MESSAGE,
            None,
        )
    }
}

/// Renders a handler panic as the generic 500 body, for use with `CatchPanicLayer`.
///
/// The panic payload is logged and never returned to the client.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}

/// Builds the JSON error body for `status`.
///
/// The body is also attached as a response extension so the error path middleware can
/// re-render it with the request path filled in.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    field_errors: Option<Vec<FieldError>>,
) -> Response {
    let body = ErrorDto {
        timestamp: chrono::Local::now().naive_local(),
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or_default().to_string(),
        message: message.into(),
        field_errors: field_errors
            .map(|errors| errors.into_iter().map(FieldError::into_dto).collect()),
        path: String::new(),
    };

    (status, Extension(body.clone()), Json(body)).into_response()
}
