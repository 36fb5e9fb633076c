//! Input validation for store operations

use super::{StoreError, StoreResult};
use crate::models::LogCreate;

fn invalid(field: &'static str, reason: impl Into<String>) -> StoreError {
    StoreError::Validation {
        field,
        reason: reason.into(),
    }
}

/// Trim a required name, rejecting empty and whitespace-only values
pub fn validate_name<'a>(field: &'static str, value: &'a str) -> StoreResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(trimmed)
}

pub fn validate_weight(weight: f64) -> StoreResult<f64> {
    if !weight.is_finite() {
        return Err(invalid("weight", "must be a finite number"));
    }
    if weight < 0.0 {
        return Err(invalid("weight", format!("must not be negative, got {}", weight)));
    }
    Ok(weight)
}

/// Convert a signed count (sets, reps) from an untyped caller
pub fn validate_count(field: &'static str, value: i64) -> StoreResult<u32> {
    if value < 0 {
        return Err(invalid(field, format!("must not be negative, got {}", value)));
    }
    u32::try_from(value).map_err(|_| invalid(field, format!("must be at most {}", u32::MAX)))
}

pub fn validate_log(data: &LogCreate) -> StoreResult<()> {
    validate_weight(data.weight)?;
    Ok(())
}
