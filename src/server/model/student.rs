//! Student domain models and request validation.
//!
//! A student owns an ordered list of courses and references a department by id. The
//! percentage is never stored; it is derived from the course marks whenever a student is
//! converted for output.

use chrono::NaiveDate;

use crate::{
    model::student::{CourseDto, StudentDto},
    server::{
        error::{validation::FieldError, AppError},
        model::department::Department,
    },
};

/// Lowest mark a course may record.
pub const MIN_MARKS: i32 = 0;

/// Highest mark a course may record.
pub const MAX_MARKS: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub marks: i32,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            name: entity.course_name,
            marks: entity.marks,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            name: Some(self.name),
            marks: Some(self.marks),
        }
    }
}

/// Student row together with its resolved department and courses, as loaded by the
/// repository.
#[derive(Debug, Clone)]
pub struct StudentWithRelations {
    pub student: entity::student::Model,
    /// `None` when the referenced department no longer exists.
    pub department: Option<entity::department::Model>,
    /// Courses in their stored order.
    pub courses: Vec<entity::course::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub department_id: String,
    pub department: Option<Department>,
    pub courses: Vec<Course>,
    pub enrollment_date: NaiveDate,
    pub active: bool,
}

impl Student {
    /// Converts a loaded student record into a domain model at the repository boundary.
    pub fn from_entity(record: StudentWithRelations) -> Self {
        let StudentWithRelations {
            student,
            department,
            mut courses,
        } = record;
        courses.sort_by_key(|course| course.position);

        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            dob: student.date_of_birth,
            department_id: student.department_id,
            department: department.map(Department::from_entity),
            courses: courses.into_iter().map(Course::from_entity).collect(),
            enrollment_date: student.enrollment_date,
            active: student.is_active,
        }
    }

    pub fn percentage(&self) -> f64 {
        percentage(&self.courses)
    }

    pub fn into_dto(self) -> StudentDto {
        let percentage = self.percentage();

        StudentDto {
            id: Some(self.id),
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            dob: Some(self.dob),
            department: self.department.map(Department::into_dto),
            courses: Some(self.courses.into_iter().map(Course::into_dto).collect()),
            enrollment_date: Some(self.enrollment_date),
            active: Some(self.active),
            percentage: Some(percentage),
        }
    }
}

/// Mean of the course marks rounded half-up to two decimals, or `0.0` without courses.
///
/// Rounding is done on integer hundredths so values like `88.5` come out exact.
pub fn percentage(courses: &[Course]) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }

    let sum: i64 = courses.iter().map(|course| i64::from(course.marks)).sum();
    let count = courses.len() as i64;
    let hundredths = (sum * 200 + count).div_euclid(2 * count);

    hundredths as f64 / 100.0
}

/// Validated student payload for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    /// Referenced department, resolved by the service before any write.
    pub department_id: String,
    pub courses: Vec<Course>,
    pub enrollment_date: NaiveDate,
    pub active: bool,
}

impl StudentParams {
    /// Validates a student DTO, collecting every failed field before returning.
    ///
    /// Any client-supplied `id` and `percentage` are ignored. Department details other
    /// than the id are ignored as well; the stored department is always authoritative.
    ///
    /// # Arguments
    /// - `dto` - Incoming student payload
    /// - `today` - Current date used for the past/future date checks
    ///
    /// # Returns
    /// - `Ok(StudentParams)` - Payload satisfies every constraint
    /// - `Err(AppError::Validation)` - One entry per failed field
    pub fn from_dto(dto: StudentDto, today: NaiveDate) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let first_name = not_blank(
            dto.first_name,
            "firstName",
            "First name must not be blank",
            &mut errors,
        );
        let last_name = not_blank(
            dto.last_name,
            "lastName",
            "Last name must not be blank",
            &mut errors,
        );

        let email = match dto.email {
            Some(email) if !email.trim().is_empty() => {
                if is_valid_email(&email) {
                    Some(email)
                } else {
                    errors.push(FieldError::new("email", "Email address must be valid"));
                    None
                }
            }
            _ => {
                errors.push(FieldError::new("email", "Email address must not be blank"));
                None
            }
        };

        match dto.dob {
            None => errors.push(FieldError::new("dob", "Date of birth must be provided")),
            Some(dob) if dob >= today => {
                errors.push(FieldError::new("dob", "Date of birth must be in the past"))
            }
            Some(_) => {}
        }

        let department_id = match dto.department {
            None => {
                errors.push(FieldError::new("department", "Department must be provided"));
                None
            }
            Some(department) => not_blank(
                department.id,
                "department.id",
                "Department id must be provided",
                &mut errors,
            ),
        };

        let courses = match dto.courses {
            Some(courses) if !courses.is_empty() => validate_courses(courses, &mut errors),
            _ => {
                errors.push(FieldError::new("courses", "At least one course must be provided"));
                Vec::new()
            }
        };

        match dto.enrollment_date {
            None => errors.push(FieldError::new(
                "enrollmentDate",
                "Enrollment date must be provided",
            )),
            Some(date) if date > today => errors.push(FieldError::new(
                "enrollmentDate",
                "Enrollment date cannot be in the future",
            )),
            Some(_) => {}
        }

        if dto.active.is_none() {
            errors.push(FieldError::new("active", "Active status must be specified"));
        }

        match (
            first_name,
            last_name,
            email,
            dto.dob,
            department_id,
            dto.enrollment_date,
            dto.active,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(dob),
                Some(department_id),
                Some(enrollment_date),
                Some(active),
            ) if errors.is_empty() => {
                Ok(Self {
                    first_name,
                    last_name,
                    email,
                    dob,
                    department_id,
                    courses,
                    enrollment_date,
                    active,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn not_blank(
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

fn validate_courses(courses: Vec<CourseDto>, errors: &mut Vec<FieldError>) -> Vec<Course> {
    let mut valid = Vec::with_capacity(courses.len());

    for (index, course) in courses.into_iter().enumerate() {
        let name = not_blank(
            course.name,
            &format!("courses[{}].name", index),
            "Course name must not be blank",
            errors,
        );

        let marks_field = format!("courses[{}].marks", index);
        let marks = match course.marks {
            None => {
                errors.push(FieldError::new(marks_field, "Marks must be provided"));
                None
            }
            Some(marks) if marks < MIN_MARKS => {
                errors.push(FieldError::new(marks_field, "Marks cannot be less than 0"));
                None
            }
            Some(marks) if marks > MAX_MARKS => {
                errors.push(FieldError::new(marks_field, "Marks cannot exceed 100"));
                None
            }
            Some(marks) => Some(marks),
        };

        if let (Some(name), Some(marks)) = (name, marks) {
            valid.push(Course { name, marks });
        }
    }

    valid
}

/// Accepts `local@domain` where neither part is empty, there is no whitespace and the
/// domain has no empty labels.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
        && local.split('.').all(|part| !part.is_empty())
}
