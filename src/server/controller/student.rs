use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{CountDto, ErrorDto, ExistsDto},
        student::{NameSearchDto, RecentEnrollmentsDto, StudentDto, StudentPageDto},
    },
    server::{
        error::AppError,
        model::{page::PageParams, student::Student},
        service::student::StudentService,
        state::AppState,
        util::extract::{JsonBody, PathParams, QueryParams},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Substring to look for in first and last names, ignoring case.
    pub name: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Exact email address.
    pub email: String,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CourseQuery {
    /// Exact course name.
    pub course_name: String,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HighScorerQuery {
    /// Exact course name.
    pub course_name: String,
    /// Lowest qualifying mark, inclusive.
    pub min_score: i32,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BornBetweenQuery {
    /// Exclusive lower bound, ISO date.
    pub start: NaiveDate,
    /// Exclusive upper bound, ISO date.
    pub end: NaiveDate,
}

/// Create a new student.
///
/// Validates the payload, resolves the referenced department and stores the student with
/// a generated id. Any `id` or `percentage` sent by the client is ignored.
///
/// # Returns
/// - `201 Created` - The stored student
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `404 Not Found` - Referenced department does not exist
/// - `409 Conflict` - Email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/students",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Get a paginated list of all students.
///
/// # Returns
/// - `200 OK` - Page envelope of students
/// - `400 Bad Request` - Invalid paging parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/students",
    tag = STUDENT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Successfully retrieved students", body = StudentPageDto),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_all(page).await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get a student by id.
///
/// # Returns
/// - `200 OK` - The student
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Replace an existing student.
///
/// Every stored field is overwritten, including the course list. The id in the path wins
/// over any id in the body.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Malformed body or failed field validation
/// - `404 Not Found` - Student or referenced department not found
/// - `409 Conflict` - Email already in use by another student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student or department not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
    JsonBody(payload): JsonBody<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.update(&id, payload).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// # Returns
/// - `204 No Content` - The student and its courses were removed
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search students by name.
///
/// Case-insensitive substring match on first or last name. Not paginated.
#[utoipa::path(
    get,
    path = "/api/v1/students/searchByName",
    tag = STUDENT_TAG,
    params(NameQuery),
    responses(
        (status = 200, description = "Matching students", body = NameSearchDto),
        (status = 400, description = "Missing name parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_by_name(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.search_by_name(&query.name).await?;

    Ok((
        StatusCode::OK,
        Json(NameSearchDto {
            name: query.name,
            count: students.len(),
            students: students.into_iter().map(Student::into_dto).collect(),
        }),
    ))
}

/// Full-text search over names and email.
///
/// Each word of `text` is matched against whole words; any match qualifies.
#[utoipa::path(
    get,
    path = "/api/v1/students/search/{text}",
    tag = STUDENT_TAG,
    params(
        ("text" = String, Path, description = "Words to search for"),
        PageParams
    ),
    responses(
        (status = 200, description = "Matching students", body = StudentPageDto),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn text_search(
    State(state): State<AppState>,
    PathParams(text): PathParams<String>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.text_search(&text, page).await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get a paginated list of active students.
#[utoipa::path(
    get,
    path = "/api/v1/students/active",
    tag = STUDENT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Active students", body = StudentPageDto),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_students(
    State(state): State<AppState>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_active(page).await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Count active students.
#[utoipa::path(
    get,
    path = "/api/v1/students/count-active",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Number of active students", body = CountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_active_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let count = service.count_active().await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Check whether a student with this exact email exists.
#[utoipa::path(
    get,
    path = "/api/v1/students/exists",
    tag = STUDENT_TAG,
    params(EmailQuery),
    responses(
        (status = 200, description = "Whether the email is taken", body = ExistsDto),
        (status = 400, description = "Missing email parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn student_exists(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let exists = service.exists_by_email(&query.email).await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}

/// Get students enrolled in a course.
#[utoipa::path(
    get,
    path = "/api/v1/students/by-course",
    tag = STUDENT_TAG,
    params(CourseQuery, PageParams),
    responses(
        (status = 200, description = "Students taking the course", body = StudentPageDto),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_course(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CourseQuery>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_by_course(&query.course_name, page).await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get students scoring at least `minScore` in a course.
#[utoipa::path(
    get,
    path = "/api/v1/students/high-scorers",
    tag = STUDENT_TAG,
    params(HighScorerQuery, PageParams),
    responses(
        (status = 200, description = "High scoring students", body = StudentPageDto),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_high_scorers(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<HighScorerQuery>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service
        .get_high_scorers(&query.course_name, query.min_score, page)
        .await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get students of a department.
#[utoipa::path(
    get,
    path = "/api/v1/students/by-department/{dept_id}",
    tag = STUDENT_TAG,
    params(
        ("dept_id" = String, Path, description = "Department ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Students of the department", body = StudentPageDto),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_department(
    State(state): State<AppState>,
    PathParams(dept_id): PathParams<String>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_by_department(&dept_id, page).await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get students born strictly between two dates.
///
/// Sorted by date of birth unless `sort` is given.
#[utoipa::path(
    get,
    path = "/api/v1/students/born-between",
    tag = STUDENT_TAG,
    params(BornBetweenQuery, PageParams),
    responses(
        (status = 200, description = "Students born in range", body = StudentPageDto),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_born_between(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BornBetweenQuery>,
    QueryParams(page): QueryParams<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service
        .get_born_between(query.start, query.end, page)
        .await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get the five most recently enrolled students.
#[utoipa::path(
    get,
    path = "/api/v1/students/recent-enrollments",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Most recent enrollments", body = RecentEnrollmentsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_enrollments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_recent_enrollments().await?;

    Ok((
        StatusCode::OK,
        Json(RecentEnrollmentsDto {
            total: students.len(),
            students: students.into_iter().map(Student::into_dto).collect(),
        }),
    ))
}
