use super::model::Game;
use super::repository::GameRepository;
use crate::common::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// List all games
#[utoipa::path(
    get,
    path = "/juegos",
    responses(
        (status = 200, description = "List of games", body = Vec<Game>),
        (status = 500, description = "Database error")
    ),
    tag = "Games"
)]
pub async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let games = GameRepository::find_all(&state.db).await?;
    Ok(Json(games))
}
