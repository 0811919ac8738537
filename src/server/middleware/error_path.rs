use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ErrorDto;

/// Fills the `path` of JSON error bodies with the request path.
///
/// Error responses carry their `ErrorDto` as a response extension; this middleware takes
/// it back out, sets the path and re-renders the body. Responses without the extension
/// pass through untouched.
pub async fn stamp_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let Some(mut body) = response.extensions_mut().remove::<ErrorDto>() else {
        return response;
    };
    body.path = path;

    (response.status(), Json(body)).into_response()
}
