//! OpenAPI documentation configuration.
//!
//! `ApiDoc` registers every student endpoint and the DTO schemas they exchange. The
//! document is served by Swagger UI from the router.

use utoipa::OpenApi;

use crate::{
    model::{
        api::{CountDto, ErrorDto, ExistsDto, FieldErrorDto},
        department::DepartmentDto,
        student::{CourseDto, NameSearchDto, RecentEnrollmentsDto, StudentDto, StudentPageDto},
    },
    server::controller::student,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student registry API",
        description = "CRUD, pagination and search over students and their departments."
    ),
    paths(
        student::create_student,
        student::get_students,
        student::get_student_by_id,
        student::update_student,
        student::delete_student,
        student::search_by_name,
        student::text_search,
        student::get_active_students,
        student::count_active_students,
        student::student_exists,
        student::get_students_by_course,
        student::get_high_scorers,
        student::get_students_by_department,
        student::get_students_born_between,
        student::get_recent_enrollments,
    ),
    components(schemas(
        StudentDto,
        CourseDto,
        DepartmentDto,
        StudentPageDto,
        NameSearchDto,
        RecentEnrollmentsDto,
        CountDto,
        ExistsDto,
        ErrorDto,
        FieldErrorDto
    )),
    tags(
        (name = "student", description = "Student records, listings and search")
    )
)]
pub struct ApiDoc;
