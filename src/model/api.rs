use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// Local time at which the error was produced.
    pub timestamp: NaiveDateTime,
    /// Numeric HTTP status code.
    pub status: u16,
    /// HTTP reason phrase, e.g. `"Not Found"`.
    pub error: String,
    /// Client-facing message.
    pub message: String,
    /// Individual field failures, present only for validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldErrorDto>>,
    /// Request path that produced the error.
    pub path: String,
}

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExistsDto {
    pub exists: bool,
}
