//! Store module
//!
//! The authoritative in-memory workout collection and its persistence.

pub mod codec;
pub mod error;
pub mod validate;
mod workout_store;

pub use error::{PersistenceError, StoreError, StoreResult};
pub use workout_store::{LoadOutcome, WorkoutStore, DEFAULT_KEY};
