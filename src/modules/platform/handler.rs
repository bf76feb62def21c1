use super::model::Platform;
use super::repository::PlatformRepository;
use crate::common::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// List all platforms
#[utoipa::path(
    get,
    path = "/plataformas",
    responses(
        (status = 200, description = "List of platforms", body = Vec<Platform>),
        (status = 500, description = "Database error")
    ),
    tag = "Platforms"
)]
pub async fn list_platforms(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let platforms = PlatformRepository::find_all(&state.db).await?;
    Ok(Json(platforms))
}
