//! Workout document codec
//!
//! The persisted form is a JSON array of workouts. Ids are hyphenated UUID
//! strings and dates are RFC 3339 timestamps.

use crate::models::Workout;

pub fn encode(workouts: &[Workout]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(workouts)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Workout>, serde_json::Error> {
    serde_json::from_slice(bytes)
}
