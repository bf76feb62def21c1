use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Status enumeration values. A stored genre always carries exactly one of
/// these; the update path may write other numbers (see the validator).
pub const STATUS_ACTIVE: i32 = 1;
pub const STATUS_INACTIVE: i32 = 2;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: i32,
}
