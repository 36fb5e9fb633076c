//! Fitlog tools module
//!
//! Response-shaped operations a front end calls into the store with.

pub mod progress;
pub mod workouts;

use uuid::Uuid;

/// Parse an id passed in from the front end
pub(crate) fn parse_id(kind: &str, raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("Invalid {} id: '{}'", kind, raw))
}
