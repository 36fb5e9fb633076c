//! Workout store
//!
//! Holds the workout collection and rewrites the whole document to the blob
//! store after every successful mutation.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::validate::{validate_log, validate_name};
use super::{codec, PersistenceError, StoreError, StoreResult};
use crate::models::{Exercise, ExerciseLog, LogCreate, Workout};
use crate::storage::BlobStore;

/// Blob key the collection is stored under by default
pub const DEFAULT_KEY: &str = "workouts.json";

/// What `load` found in the blob store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document read and decoded, with this many workouts
    Loaded(usize),
    /// Nothing saved yet
    Missing,
    /// The blob could not be read
    Unreadable,
    /// The blob was read but did not decode
    Corrupt,
}

/// The workout collection and its backing blob store
pub struct WorkoutStore<B: BlobStore> {
    blobs: B,
    key: String,
    workouts: Vec<Workout>,
    last_save_error: Option<StoreError>,
}

impl<B: BlobStore> WorkoutStore<B> {
    /// Create an empty store over `blobs`. Call `load` to read saved state.
    pub fn new(blobs: B) -> Self {
        Self::with_key(blobs, DEFAULT_KEY)
    }

    pub fn with_key(blobs: B, key: impl Into<String>) -> Self {
        Self {
            blobs,
            key: key.into(),
            workouts: Vec::new(),
            last_save_error: None,
        }
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the in-memory collection with the saved document.
    ///
    /// Never fails: a missing, unreadable or corrupt document leaves the
    /// store empty and is logged.
    pub fn load(&mut self) -> LoadOutcome {
        self.workouts.clear();

        let bytes = match self.blobs.read(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                info!(key = %self.key, "No saved workouts found, starting empty");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read saved workouts, starting empty");
                return LoadOutcome::Unreadable;
            }
        };

        match codec::decode(&bytes) {
            Ok(workouts) => {
                info!(key = %self.key, workouts = workouts.len(), "Loaded workouts");
                self.workouts = workouts;
                LoadOutcome::Loaded(self.workouts.len())
            }
            Err(e) => {
                let e = PersistenceError::Decode(e);
                warn!(key = %self.key, error = %e, "Saved workouts are corrupt, starting empty");
                LoadOutcome::Corrupt
            }
        }
    }

    /// Write the full collection, surfacing any failure
    pub fn save(&mut self) -> StoreResult<()> {
        let bytes = codec::encode(&self.workouts).map_err(PersistenceError::Encode)?;
        self.blobs
            .write(&self.key, &bytes)
            .map_err(PersistenceError::from)?;

        debug!(key = %self.key, workouts = self.workouts.len(), bytes = bytes.len(), "Saved workouts");
        self.last_save_error = None;
        Ok(())
    }

    /// Error from the most recent automatic save, if it failed
    pub fn last_save_error(&self) -> Option<&StoreError> {
        self.last_save_error.as_ref()
    }

    /// Persist after a mutation. Failures are logged and the in-memory
    /// change is kept.
    fn commit(&mut self) {
        if let Err(e) = self.save() {
            error!(key = %self.key, error = %e, "Failed to save workouts, keeping in-memory changes");
            self.last_save_error = Some(e);
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn list_workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Get a workout by ID
    pub fn workout(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Get an exercise by workout and exercise ID
    pub fn exercise(&self, workout_id: Uuid, exercise_id: Uuid) -> Option<&Exercise> {
        self.workout(workout_id)?.exercise(exercise_id)
    }

    fn workout_mut(&mut self, id: Uuid) -> StoreResult<&mut Workout> {
        self.workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| StoreError::workout_not_found(id))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new, empty workout
    pub fn add_workout(&mut self, name: &str) -> StoreResult<Workout> {
        let name = validate_name("name", name)?;

        let workout = Workout::new(name);
        self.workouts.push(workout.clone());
        self.commit();

        Ok(workout)
    }

    /// Delete a workout with all its exercises and their history
    pub fn delete_workout(&mut self, id: Uuid) -> StoreResult<()> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| StoreError::workout_not_found(id))?;

        self.workouts.remove(index);
        self.commit();

        Ok(())
    }

    /// Find an exercise by name in a workout, creating it if absent.
    ///
    /// Returning an existing exercise is not a mutation and does not save.
    pub fn add_exercise(&mut self, workout_id: Uuid, name: &str) -> StoreResult<Exercise> {
        let name = validate_name("exercise name", name)?;
        let workout = self.workout_mut(workout_id)?;

        if let Some(existing) = workout.exercise_by_name(name) {
            return Ok(existing.clone());
        }

        let exercise = Exercise::new(name);
        workout.exercises.push(exercise.clone());
        self.commit();

        Ok(exercise)
    }

    /// Find or create an exercise by name and append a log to it
    pub fn add_exercise_with_log(
        &mut self,
        workout_id: Uuid,
        name: &str,
        sets: u32,
        reps: u32,
        weight: f64,
    ) -> StoreResult<Exercise> {
        let name = validate_name("exercise name", name)?;
        let data = LogCreate { sets, reps, weight };
        validate_log(&data)?;

        let workout = self.workout_mut(workout_id)?;
        let index = match workout.position_by_name(name) {
            Some(index) => index,
            None => {
                workout.exercises.push(Exercise::new(name));
                workout.exercises.len() - 1
            }
        };

        let exercise = &mut workout.exercises[index];
        exercise.push_log(&data);
        let exercise = exercise.clone();
        self.commit();

        Ok(exercise)
    }

    /// Remove an exercise and its history from a workout
    pub fn delete_exercise(&mut self, workout_id: Uuid, exercise_id: Uuid) -> StoreResult<()> {
        let workout = self.workout_mut(workout_id)?;
        let index = workout
            .exercises
            .iter()
            .position(|e| e.id == exercise_id)
            .ok_or_else(|| StoreError::exercise_not_found(exercise_id))?;

        workout.exercises.remove(index);
        self.commit();

        Ok(())
    }

    /// Append a log to the exercise with `exercise_id`
    pub fn add_log(
        &mut self,
        workout_id: Uuid,
        exercise_id: Uuid,
        sets: u32,
        reps: u32,
        weight: f64,
    ) -> StoreResult<ExerciseLog> {
        let data = LogCreate { sets, reps, weight };
        validate_log(&data)?;

        let exercise = self
            .workout_mut(workout_id)?
            .exercise_mut(exercise_id)
            .ok_or_else(|| StoreError::exercise_not_found(exercise_id))?;

        let log = exercise.push_log(&data).clone();
        self.commit();

        Ok(log)
    }
}
