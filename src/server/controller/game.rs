use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDto, GameSummaryDto},
    },
    server::{
        controller::path_id, error::AppError, service::game::GameService, state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

fn game_not_found() -> AppError {
    AppError::NotFound("Game not found".to_string())
}

/// List all games.
///
/// Returns every game as a summary with title, genre, platform and price. The game ID
/// is not part of the listing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of game summaries, empty if there are no games
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games: Vec<GameSummaryDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|g| g.into_summary_dto())
        .collect();

    Ok((StatusCode::OK, Json(games)))
}

/// Get a game by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Game ID
///
/// # Returns
/// - `200 OK` - Full game mapping
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No game with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i64, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 400, description = "Invalid game ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, game_not_found)?;

    let service = GameService::new(&state.db);

    let game = service.get_by_id(id).await?.ok_or_else(game_not_found)?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}
