use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{game, index, review, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Game/Review/User API"),
    tags(
        (name = "index", description = "API root"),
        (name = "game", description = "Read-only game catalogue"),
        (name = "review", description = "Review CRUD"),
        (name = "user", description = "Read-only user listing")
    )
)]
struct ApiDoc;

/// Builds the API router with the OpenAPI document and Swagger UI mounted under
/// `/api/docs`. Unmatched requests fall through to a JSON 404.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::index))
        .routes(routes!(game::get_games))
        .routes(routes!(game::get_game_by_id))
        .routes(routes!(review::get_reviews, review::create_review))
        .routes(routes!(
            review::get_review_by_id,
            review::update_review,
            review::delete_review
        ))
        .routes(routes!(user::get_users))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(index::route_not_found)
}
