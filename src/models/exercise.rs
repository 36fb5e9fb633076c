//! Exercise model
//!
//! A named movement tracked within a workout, holding an append-only log history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExerciseLog, LogCreate};

/// An exercise and its history, oldest log first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub history: Vec<ExerciseLog>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            history: Vec::new(),
        }
    }

    /// Append a new log stamped with the current time.
    ///
    /// History is only ever appended to, so it stays in insertion order.
    pub(crate) fn push_log(&mut self, data: &LogCreate) -> &ExerciseLog {
        self.history.push(ExerciseLog::new(data));
        &self.history[self.history.len() - 1]
    }

    /// Most recent log, if any
    pub fn latest(&self) -> Option<&ExerciseLog> {
        self.history.last()
    }

    /// Heaviest weight ever logged
    pub fn max_weight(&self) -> Option<f64> {
        self.history
            .iter()
            .map(|l| l.weight)
            .fold(None, |acc, w| match acc {
                Some(m) if m >= w => Some(m),
                _ => Some(w),
            })
    }
}
