//! Store error types

use thiserror::Error;
use uuid::Uuid;

use crate::storage::StorageError;

/// Failure to serialize, deserialize or write the workout document
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to encode workouts: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode workouts: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    pub(crate) fn workout_not_found(id: Uuid) -> Self {
        StoreError::NotFound { entity: "Workout", id }
    }

    pub(crate) fn exercise_not_found(id: Uuid) -> Self {
        StoreError::NotFound { entity: "Exercise", id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation { .. })
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let id = Uuid::nil();
        assert_eq!(
            StoreError::workout_not_found(id).to_string(),
            "Workout not found: 00000000-0000-0000-0000-000000000000"
        );

        let err = StoreError::Validation {
            field: "name",
            reason: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid name: must not be empty");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }
}
