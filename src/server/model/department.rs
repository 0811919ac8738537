//! Department domain model.
//!
//! Departments are reference data: students point at them by id, and every read resolves
//! the current department row so renames show up immediately on all students.

use chrono::NaiveDate;

use crate::{
    model::department::DepartmentDto,
    server::error::{validation::FieldError, AppError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub location: String,
    pub established_on: NaiveDate,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            established_on: entity.established_on,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: Some(self.id),
            name: Some(self.name),
            location: Some(self.location),
            created_at: Some(self.established_on),
        }
    }
}

/// Parameters for inserting a department, used when loading seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDepartmentParams {
    pub id: String,
    pub name: String,
    pub location: String,
    pub established_on: NaiveDate,
}

impl CreateDepartmentParams {
    /// Validates a department DTO; every field is required.
    pub fn from_dto(dto: DepartmentDto) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let id = required_text(dto.id, "id", "Department id must be provided", &mut errors);
        let name = required_text(
            dto.name,
            "name",
            "Department name must not be blank",
            &mut errors,
        );
        let location = required_text(
            dto.location,
            "location",
            "Department location must not be blank",
            &mut errors,
        );
        if dto.created_at.is_none() {
            errors.push(FieldError::new("createdAt", "Creation date must be provided"));
        }

        match (id, name, location, dto.created_at) {
            (Some(id), Some(name), Some(location), Some(established_on)) if errors.is_empty() => {
                Ok(Self {
                    id,
                    name,
                    location,
                    established_on,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn required_text(
    value: Option<String>,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}
