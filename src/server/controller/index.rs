use axum::{http::StatusCode, response::IntoResponse};

use crate::server::error::AppError;

pub static INDEX_TAG: &str = "index";

/// Plain text banner served at the API root.
pub const INDEX_MESSAGE: &str = "Index for Game/Review/User API";

/// Root endpoint.
///
/// # Returns
/// - `200 OK` - Plain text banner
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "API banner", body = String, content_type = "text/plain")
    ),
)]
pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, INDEX_MESSAGE)
}

/// Fallback for requests that match no route.
///
/// # Returns
/// - `404 Not Found` - Always
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
