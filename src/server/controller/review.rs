use axum::{
    body::{Body, Bytes},
    extract::{
        rejection::{BytesRejection, FormRejection, PathRejection},
        FromRequest, Path, Request, State,
    },
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{DeleteReviewDto, ReviewDto, ReviewFormDto},
    },
    server::{
        controller::path_id,
        error::AppError,
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Message returned alongside a successful delete.
pub const DELETE_MESSAGE: &str = "Review successful deleted.";

fn review_not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}

fn form_body(form: Result<Form<ReviewFormDto>, FormRejection>) -> Result<ReviewFormDto, AppError> {
    form.map(|Form(payload)| payload)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Decodes a PATCH body. A request without a body is an empty form whatever its
/// content type; a non-empty body must be form-encoded.
async fn patch_form_body(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<ReviewFormDto, AppError> {
    let body = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if body.is_empty() {
        return Ok(ReviewFormDto::default());
    }

    let mut request = Request::new(Body::from(body));
    *request.method_mut() = Method::PATCH;
    *request.headers_mut() = headers;

    form_body(Form::from_request(request, &()).await)
}

/// List all reviews.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of reviews ordered by ID, empty if there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews: Vec<ReviewDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(reviews)))
}

/// Create a new review.
///
/// Accepts a form-encoded body with `score`, `comment`, `game_id` and `user_id`. All four
/// are required; keys outside that set are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `form` - Submitted review form
///
/// # Returns
/// - `201 Created` - The stored review including its assigned ID
/// - `400 Bad Request` - Body could not be decoded as a form
/// - `422 Unprocessable Entity` - Missing field, non-integer value, or unknown game/user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reviews",
    tag = REVIEW_TAG,
    request_body(content = ReviewFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Malformed form body", body = ErrorDto),
        (status = 422, description = "Invalid review data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    form: Result<Form<ReviewFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_form(form_body(form)?)?;

    let service = ReviewService::new(&state.db);

    let review = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Get a review by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Review ID
///
/// # Returns
/// - `200 OK` - The review
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No review with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 400, description = "Invalid review ID", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, review_not_found)?;

    let service = ReviewService::new(&state.db);

    let review = service.get_by_id(id).await?.ok_or_else(review_not_found)?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Partially update a review.
///
/// Only `score`, `comment`, `game_id` and `user_id` are read from the form; every other
/// key is ignored. Fields not submitted keep their current value. A request without a
/// body returns the review unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Review ID
/// - `headers` - Request headers, checked for the form content type
/// - `body` - Raw form-encoded subset of review fields
///
/// # Returns
/// - `200 OK` - The updated review
/// - `400 Bad Request` - ID is not an integer or body could not be decoded
/// - `404 Not Found` - No review with that ID
/// - `422 Unprocessable Entity` - Non-integer value, or unknown game/user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    request_body(content = ReviewFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Successfully updated review", body = ReviewDto),
        (status = 400, description = "Invalid review ID or malformed form body", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 422, description = "Invalid review data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, review_not_found)?;

    let service = ReviewService::new(&state.db);

    // Missing review wins over a bad body
    let existing = service.get_by_id(id).await?.ok_or_else(review_not_found)?;

    let params = UpdateReviewParams::from_form(patch_form_body(headers, body).await?)?;

    let review = service
        .update(existing, params)
        .await?
        .ok_or_else(review_not_found)?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Delete a review.
///
/// Deletion is permanent. Deleting an already deleted review returns 404.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Review ID
///
/// # Returns
/// - `200 OK` - `{ delete_successful: true, message }`
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No review with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted review", body = DeleteReviewDto),
        (status = 400, description = "Invalid review ID", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, review_not_found)?;

    let service = ReviewService::new(&state.db);

    if !service.delete(id).await? {
        return Err(review_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(DeleteReviewDto {
            delete_successful: true,
            message: DELETE_MESSAGE.to_string(),
        }),
    ))
}
