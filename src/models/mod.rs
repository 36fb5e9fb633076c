//! Data models
//!
//! The workout document: workouts own exercises, exercises own their log history.

mod exercise;
mod exercise_log;
mod workout;

pub use exercise::Exercise;
pub use exercise_log::{ExerciseLog, LogCreate};
pub use workout::Workout;
