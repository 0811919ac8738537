//! Request extractors whose rejections render as `AppError` bodies.
//!
//! Axum's built-in extractors reject with plain-text bodies. These wrappers route the
//! rejection through `AppError` so malformed bodies and unparsable parameters produce
//! the same JSON error shape as every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts},
    Json,
};

use crate::server::error::AppError;

/// JSON request body; parse failures become `AppError::MalformedRequest`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string; parse failures become `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// Path parameters; parse failures become `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);
