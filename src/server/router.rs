use axum::{
    http::StatusCode,
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::student::{
        count_active_students, create_student, delete_student, get_active_students,
        get_high_scorers, get_recent_enrollments, get_student_by_id, get_students,
        get_students_born_between, get_students_by_course, get_students_by_department,
        search_by_name, student_exists, text_search, update_student,
    },
    doc::ApiDoc,
    error::{error_response, panic_response},
    middleware::error_path::stamp_error_path,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/students", get(get_students).post(create_student))
        .route("/api/v1/students/searchByName", get(search_by_name))
        .route("/api/v1/students/search/{text}", get(text_search))
        .route("/api/v1/students/active", get(get_active_students))
        .route("/api/v1/students/count-active", get(count_active_students))
        .route("/api/v1/students/exists", get(student_exists))
        .route("/api/v1/students/by-course", get(get_students_by_course))
        .route("/api/v1/students/high-scorers", get(get_high_scorers))
        .route(
            "/api/v1/students/by-department/{dept_id}",
            get(get_students_by_department),
        )
        .route("/api/v1/students/born-between", get(get_students_born_between))
        .route(
            "/api/v1/students/recent-enrollments",
            get(get_recent_enrollments),
        )
        .route(
            "/api/v1/students/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        .fallback(no_route)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(stamp_error_path))
}

/// Builds the complete application: API routes, Swagger UI and HTTP layers.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn no_route() -> Response {
    error_response(StatusCode::NOT_FOUND, "No handler found for this path", None)
}
