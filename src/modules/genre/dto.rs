use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Incoming genre payload for both create and update. Fields are captured
/// as raw JSON so the validator owns every type check and its failures all
/// surface as 400s, and so an explicit `null` stays distinguishable from an
/// absent field.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenrePayload {
    #[serde(default, deserialize_with = "raw_field")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "raw_field")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "raw_field")]
    #[schema(value_type = Option<i32>)]
    pub status: Option<Value>,
}

/// Absent fields stay `None`; a field set to JSON `null` becomes
/// `Some(Value::Null)`.
fn raw_field<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Normalized creation payload produced by the validator.
#[derive(Debug)]
pub struct NewGenre {
    pub name: String,
    pub description: Option<String>,
    pub status: i32,
}

/// The validated field subset of an update request. Serializes to only the
/// fields that were supplied, which is exactly the update response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}
