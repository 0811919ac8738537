use crate::model::api::FieldErrorDto;

/// A single failed field constraint collected while validating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field path as the client sent it, e.g. `email` or `courses[1].marks`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            message: self.message,
        }
    }
}
