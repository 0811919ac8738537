use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::department::DepartmentDto;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub name: Option<String>,
    pub marks: Option<i32>,
}

/// Student payload used for both requests and responses.
///
/// `id` and `percentage` are ignored on writes: the id is assigned by the server and the
/// percentage is always recomputed from the course marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub department: Option<DepartmentDto>,
    pub courses: Option<Vec<CourseDto>>,
    pub enrollment_date: Option<NaiveDate>,
    pub active: Option<bool>,
    pub percentage: Option<f64>,
}

/// Paged list of students.
///
/// `page_number` is one-based, matching the `page` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPageDto {
    pub content: Vec<StudentDto>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Result of a case-insensitive name search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NameSearchDto {
    pub name: String,
    pub count: usize,
    pub students: Vec<StudentDto>,
}

/// Most recent enrollments, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentEnrollmentsDto {
    pub total: usize,
    pub students: Vec<StudentDto>,
}
