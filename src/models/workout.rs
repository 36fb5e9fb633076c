//! Workout model
//!
//! A named, dated collection of exercises performed together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Exercise;

/// A workout and the exercises it exclusively owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    /// Creation time
    pub date: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create a workout with a fresh id, the current time and no exercises
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date: Utc::now(),
            exercises: Vec::new(),
        }
    }

    /// Get an exercise by ID
    pub fn exercise(&self, id: Uuid) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub(crate) fn exercise_mut(&mut self, id: Uuid) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }

    /// Get an exercise by exact name
    pub fn exercise_by_name(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub(crate) fn position_by_name(&self, name: &str) -> Option<usize> {
        self.exercises.iter().position(|e| e.name == name)
    }

    /// Total number of logs across all exercises
    pub fn log_count(&self) -> usize {
        self.exercises.iter().map(|e| e.history.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workout_is_empty() {
        let workout = Workout::new("Push Day");
        assert_eq!(workout.name, "Push Day");
        assert!(workout.exercises.is_empty());
        assert_eq!(workout.log_count(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Workout::new("A");
        let b = Workout::new("A");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_exercise_lookup() {
        let mut workout = Workout::new("Legs");
        let squat = Exercise::new("Squat");
        let squat_id = squat.id;
        workout.exercises.push(squat);
        workout.exercises.push(Exercise::new("Lunge"));

        assert_eq!(workout.exercise(squat_id).map(|e| e.name.as_str()), Some("Squat"));
        assert_eq!(workout.position_by_name("Lunge"), Some(1));
        assert!(workout.exercise_by_name("lunge").is_none());
        assert!(workout.exercise(Uuid::new_v4()).is_none());
    }
}
