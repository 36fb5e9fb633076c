//! Fitlog Library
//!
//! Workout, exercise and log tracking over a single JSON document.

pub mod banner;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod tools;

pub use config::StoreConfig;
pub use models::{Exercise, ExerciseLog, LogCreate, Workout};
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use store::{LoadOutcome, StoreError, StoreResult, WorkoutStore};
