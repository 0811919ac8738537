//! Department fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::department;

/// Default test department ID.
pub const DEFAULT_ID: &str = "d1";

/// Default test department name.
pub const DEFAULT_NAME: &str = "Computer Science";

/// Default test department location.
pub const DEFAULT_LOCATION: &str = "Building A";

/// Creates a department entity model with default values.
///
/// # Default Values
/// - id: `"d1"`
/// - name: `"Computer Science"`
/// - location: `"Building A"`
/// - established_on: `1985-09-01`
pub fn entity() -> department::Model {
    entity_builder().build()
}

/// Creates a department entity builder with default values.
pub fn entity_builder() -> DepartmentEntityBuilder {
    DepartmentEntityBuilder {
        id: DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        location: DEFAULT_LOCATION.to_string(),
        established_on: default_established_on(),
    }
}

/// Default establishment date used by the fixture.
pub fn default_established_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 9, 1).unwrap_or_default()
}

/// Builder for department entity models with custom values.
pub struct DepartmentEntityBuilder {
    id: String,
    name: String,
    location: String,
    established_on: NaiveDate,
}

impl DepartmentEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn established_on(mut self, established_on: NaiveDate) -> Self {
        self.established_on = established_on;
        self
    }

    /// Builds and returns the department entity model.
    pub fn build(self) -> department::Model {
        department::Model {
            id: self.id,
            name: self.name,
            location: self.location,
            established_on: self.established_on,
        }
    }
}
