//! Student fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::student;

/// Default test student ID.
pub const DEFAULT_ID: &str = "s1";

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "Ada";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "Lovelace";

/// Default test email address.
pub const DEFAULT_EMAIL: &str = "ada.lovelace@example.edu";

/// Default department the student belongs to.
pub const DEFAULT_DEPARTMENT_ID: &str = super::department::DEFAULT_ID;

/// Default date of birth.
pub fn default_dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 12, 10).unwrap_or_default()
}

/// Default enrollment date.
pub fn default_enrollment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 9, 1).unwrap_or_default()
}

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `"s1"`
/// - first_name / last_name: `"Ada"` / `"Lovelace"`
/// - email: `"ada.lovelace@example.edu"`
/// - date_of_birth: `2000-12-10`
/// - department_id: `"d1"`
/// - enrollment_date: `2019-09-01`
/// - is_active: `true`
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder with default values.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder {
        id: DEFAULT_ID.to_string(),
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        date_of_birth: default_dob(),
        department_id: DEFAULT_DEPARTMENT_ID.to_string(),
        enrollment_date: default_enrollment_date(),
        is_active: true,
    }
}

/// Builder for student entity models with custom values.
pub struct StudentEntityBuilder {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: NaiveDate,
    department_id: String,
    enrollment_date: NaiveDate,
    is_active: bool,
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn department_id(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = department_id.into();
        self
    }

    pub fn enrollment_date(mut self, enrollment_date: NaiveDate) -> Self {
        self.enrollment_date = enrollment_date;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            first_name_lower: student::name_key(&self.first_name),
            last_name_lower: student::name_key(&self.last_name),
            search_terms: student::search_terms(&self.first_name, &self.last_name, &self.email),
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            department_id: self.department_id,
            enrollment_date: self.enrollment_date,
            is_active: self.is_active,
        }
    }
}
