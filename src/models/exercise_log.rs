//! Exercise log model
//!
//! One recorded performance of an exercise. Logs are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded set of work: sets x reps at a weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: Uuid,
    /// Time the log was added
    pub date: DateTime<Utc>,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

/// Data for creating a new log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogCreate {
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

impl ExerciseLog {
    pub(crate) fn new(data: &LogCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            sets: data.sets,
            reps: data.reps,
            weight: data.weight,
        }
    }

    /// Training volume: sets x reps x weight
    pub fn volume(&self) -> f64 {
        f64::from(self.sets) * f64::from(self.reps) * self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let log = ExerciseLog::new(&LogCreate { sets: 3, reps: 8, weight: 135.0 });
        assert_eq!(log.volume(), 3240.0);
    }

    #[test]
    fn test_bodyweight_volume_is_zero() {
        let log = ExerciseLog::new(&LogCreate { sets: 4, reps: 12, weight: 0.0 });
        assert_eq!(log.volume(), 0.0);
    }
}
