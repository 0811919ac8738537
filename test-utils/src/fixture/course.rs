//! Course fixtures for creating in-memory test data.

use entity::course;

/// Default course name.
pub const DEFAULT_COURSE_NAME: &str = "Algorithms";

/// Default marks for a course.
pub const DEFAULT_MARKS: i32 = 85;

/// Creates a course entity model with default values, owned by the default student.
pub fn entity() -> course::Model {
    entity_builder().build()
}

/// Creates a course entity builder with default values.
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder {
        id: 1,
        student_id: super::student::DEFAULT_ID.to_string(),
        position: 0,
        course_name: DEFAULT_COURSE_NAME.to_string(),
        marks: DEFAULT_MARKS,
    }
}

/// Builder for course entity models with custom values.
pub struct CourseEntityBuilder {
    id: i32,
    student_id: String,
    position: i32,
    course_name: String,
    marks: i32,
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = student_id.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    pub fn marks(mut self, marks: i32) -> Self {
        self.marks = marks;
        self
    }

    /// Builds and returns the course entity model.
    pub fn build(self) -> course::Model {
        course::Model {
            id: self.id,
            student_id: self.student_id,
            position: self.position,
            course_name: self.course_name,
            marks: self.marks,
        }
    }
}
