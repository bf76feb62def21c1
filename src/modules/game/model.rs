use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Read-only projection of the games table; there is no validated write
/// path for games.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub genre_id: Option<i32>,
    pub platform_id: Option<i32>,
    pub status: i32,
}
