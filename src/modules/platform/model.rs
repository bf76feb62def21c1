use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Read-only projection of the platforms table.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone)]
pub struct Platform {
    pub id: i32,
    pub name: String,
    pub manufacturer: Option<String>,
    pub status: i32,
}
