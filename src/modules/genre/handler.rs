use super::dto::{GenreChanges, GenrePayload};
use super::model::Genre;
use super::repository::GenreRepository;
use super::service::GenreService;
use crate::common::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/generos",
    responses(
        (status = 200, description = "List of genres", body = Vec<Genre>),
        (status = 500, description = "Database error")
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let genres = GenreService::find_all(&GenreRepository::new(&state.db)).await?;
    Ok(Json(genres))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/generos/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found"),
        (status = 500, description = "Database error")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = GenreService::find_by_id(&GenreRepository::new(&state.db), id).await?;
    Ok(Json(genre))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/generos",
    request_body = GenrePayload,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Database error")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenrePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = GenreService::create(&GenreRepository::new(&state.db), payload).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// Update a genre; the response contains only the fields that were applied
#[utoipa::path(
    put,
    path = "/generos/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = GenrePayload,
    responses(
        (status = 200, description = "Applied fields", body = GenreChanges),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Genre not found"),
        (status = 500, description = "Database error")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GenrePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let changes = GenreService::update(&GenreRepository::new(&state.db), id, payload).await?;
    Ok(Json(changes))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/generos/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found"),
        (status = 500, description = "Database error")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    GenreService::delete(&GenreRepository::new(&state.db), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
