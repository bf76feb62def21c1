use serde_json::Value;

use super::dto::{GenreChanges, GenrePayload, NewGenre};
use super::model::{STATUS_ACTIVE, STATUS_INACTIVE};
use crate::common::error::ApiError;

/// Checks a creation payload: `name` must be a non-empty string after
/// trimming (any other JSON type, including `null`, is rejected), `status`
/// defaults to active and must otherwise coerce to one of the two
/// enumeration values. An explicit `null` status is not a valid coercion.
/// No I/O; runs fully before any database call.
pub fn validate_create(payload: GenrePayload) -> Result<NewGenre, ApiError> {
    let name = match payload.name {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::validation("name required")),
    };

    let status = match payload.status {
        None => STATUS_ACTIVE,
        Some(value) => {
            coerce_status(&value).ok_or_else(|| ApiError::validation("invalid status"))?
        }
    };

    let description = take_description(payload.description)?;

    Ok(NewGenre {
        name,
        description,
        status,
    })
}

/// Checks an update payload: at least one field must be present (a field
/// set to `null` counts as absent for `name`/`description` but not for
/// `status`), a supplied `name` must be a non-empty string, and a supplied
/// `status` must be a JSON number.
///
/// The status rule here is deliberately looser than on creation: any number
/// passes, not just the two enumeration values. Preserved API behavior,
/// pending product clarification. A fractional status is truncated toward
/// zero, since the stored column is an integer.
pub fn validate_update(payload: GenrePayload) -> Result<GenreChanges, ApiError> {
    let has_name = matches!(&payload.name, Some(v) if !v.is_null());
    let has_description = matches!(&payload.description, Some(v) if !v.is_null());
    if !has_name && !has_description && payload.status.is_none() {
        return Err(ApiError::validation("no fields supplied"));
    }

    let name = match payload.name {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) if !name.trim().is_empty() => Some(name),
        Some(_) => return Err(ApiError::validation("name required")),
    };

    let description = take_description(payload.description)?;

    let status = match payload.status {
        None => None,
        Some(value) => match value.as_f64() {
            Some(n) => Some(n as i32),
            None => return Err(ApiError::validation("status must be numeric")),
        },
    };

    Ok(GenreChanges {
        name,
        description,
        status,
    })
}

/// `description` passes through when it is a string; `null` and absent both
/// mean "not supplied".
fn take_description(description: Option<Value>) -> Result<Option<String>, ApiError> {
    match description {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(description)) => Ok(Some(description)),
        Some(_) => Err(ApiError::validation("description must be a string")),
    }
}

/// Accepts a JSON number or a numeric string, but only the two enumeration
/// values.
fn coerce_status(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if n == f64::from(STATUS_ACTIVE) {
        Some(STATUS_ACTIVE)
    } else if n == f64::from(STATUS_INACTIVE) {
        Some(STATUS_INACTIVE)
    } else {
        None
    }
}
