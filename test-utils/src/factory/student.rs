//! Student factory for creating test student rows together with their courses.

use crate::{factory::helpers::next_id, fixture};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Courses added through [`StudentFactory::course`] are inserted after the student row,
/// keeping their insertion order as their position.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db, "dept-1")
///     .first_name("Grace")
///     .course("Compilers", 91)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
    courses: Vec<(String, i32)>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new factory with fixture defaults, a unique ID (`"stu-{n}"`) and a unique
    /// email address. A single default course is attached unless `courses` is overridden.
    pub fn new(db: &'a DatabaseConnection, department_id: impl Into<String>) -> Self {
        let id = next_id();
        let entity = fixture::student::entity_builder()
            .id(format!("stu-{}", id))
            .email(format!("student{}@example.edu", id))
            .department_id(department_id)
            .build();

        Self {
            db,
            entity,
            courses: vec![(
                fixture::course::DEFAULT_COURSE_NAME.to_string(),
                fixture::course::DEFAULT_MARKS,
            )],
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.entity.date_of_birth = date_of_birth;
        self
    }

    pub fn enrollment_date(mut self, enrollment_date: NaiveDate) -> Self {
        self.entity.enrollment_date = enrollment_date;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    /// Replaces the course list with the given `(name, marks)` pairs.
    pub fn courses(mut self, courses: Vec<(&str, i32)>) -> Self {
        self.courses = courses
            .into_iter()
            .map(|(name, marks)| (name.to_string(), marks))
            .collect();
        self
    }

    /// Appends a single course after the existing ones.
    pub fn course(mut self, name: impl Into<String>, marks: i32) -> Self {
        self.courses.push((name.into(), marks));
        self
    }

    /// Builds and inserts the student and its courses into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate email)
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            email: ActiveValue::Set(self.entity.email),
            date_of_birth: ActiveValue::Set(self.entity.date_of_birth),
            department_id: ActiveValue::Set(self.entity.department_id),
            enrollment_date: ActiveValue::Set(self.entity.enrollment_date),
            is_active: ActiveValue::Set(self.entity.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, (course_name, marks)) in self.courses.into_iter().enumerate() {
            entity::course::ActiveModel {
                id: ActiveValue::NotSet,
                student_id: ActiveValue::Set(student.id.clone()),
                position: ActiveValue::Set(position as i32),
                course_name: ActiveValue::Set(course_name),
                marks: ActiveValue::Set(marks),
            }
            .insert(self.db)
            .await?;
        }

        Ok(student)
    }
}

/// Creates a student with default values in the given department.
///
/// Shorthand for `StudentFactory::new(db, department_id).build().await`.
pub async fn create_student(
    db: &DatabaseConnection,
    department_id: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, department_id).build().await
}
