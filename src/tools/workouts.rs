//! Workout tools
//!
//! Create, list, inspect and delete workouts, their exercises and logs.

use serde::Serialize;

use super::parse_id;
use crate::models::{Exercise, ExerciseLog, Workout};
use crate::storage::BlobStore;
use crate::store::validate::validate_count;
use crate::store::WorkoutStore;

// ============================================================================
// Response Structs
// ============================================================================

/// Summary for listing
#[derive(Debug, Serialize)]
pub struct WorkoutSummary {
    pub id: String,
    pub name: String,
    pub date: String,
    pub exercise_count: usize,
    pub log_count: usize,
}

/// Response for list_workouts
#[derive(Debug, Serialize)]
pub struct ListWorkoutsResponse {
    pub workouts: Vec<WorkoutSummary>,
    pub total: usize,
}

/// Workout with full exercise detail
#[derive(Debug, Serialize)]
pub struct WorkoutDetail {
    pub id: String,
    pub name: String,
    pub date: String,
    pub exercises: Vec<ExerciseDetail>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseDetail {
    pub id: String,
    pub name: String,
    pub log_count: usize,
    pub latest_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub history: Vec<LogDetail>,
}

#[derive(Debug, Serialize)]
pub struct LogDetail {
    pub id: String,
    pub date: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

/// Response for delete operations
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_id: String,
}

impl From<&Workout> for WorkoutSummary {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name.clone(),
            date: w.date.to_rfc3339(),
            exercise_count: w.exercises.len(),
            log_count: w.log_count(),
        }
    }
}

impl From<&Workout> for WorkoutDetail {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name.clone(),
            date: w.date.to_rfc3339(),
            exercises: w.exercises.iter().map(ExerciseDetail::from).collect(),
        }
    }
}

impl From<&Exercise> for ExerciseDetail {
    fn from(e: &Exercise) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            log_count: e.history.len(),
            latest_weight: e.latest().map(|l| l.weight),
            max_weight: e.max_weight(),
            history: e.history.iter().map(LogDetail::from).collect(),
        }
    }
}

impl From<&ExerciseLog> for LogDetail {
    fn from(l: &ExerciseLog) -> Self {
        Self {
            id: l.id.to_string(),
            date: l.date.to_rfc3339(),
            sets: l.sets,
            reps: l.reps,
            weight: l.weight,
        }
    }
}

// ============================================================================
// Workout Tool Functions
// ============================================================================

pub fn add_workout<B: BlobStore>(
    store: &mut WorkoutStore<B>,
    name: &str,
) -> Result<WorkoutSummary, String> {
    let workout = store
        .add_workout(name)
        .map_err(|e| format!("Failed to add workout: {}", e))?;
    Ok(WorkoutSummary::from(&workout))
}

pub fn list_workouts<B: BlobStore>(store: &WorkoutStore<B>) -> ListWorkoutsResponse {
    let workouts: Vec<WorkoutSummary> = store
        .list_workouts()
        .iter()
        .map(WorkoutSummary::from)
        .collect();
    let total = workouts.len();
    ListWorkoutsResponse { workouts, total }
}

/// Get a workout by ID with full details
pub fn get_workout<B: BlobStore>(
    store: &WorkoutStore<B>,
    workout_id: &str,
) -> Result<Option<WorkoutDetail>, String> {
    let id = parse_id("workout", workout_id)?;
    Ok(store.workout(id).map(WorkoutDetail::from))
}

pub fn delete_workout<B: BlobStore>(
    store: &mut WorkoutStore<B>,
    workout_id: &str,
) -> Result<DeleteResponse, String> {
    let id = parse_id("workout", workout_id)?;
    store
        .delete_workout(id)
        .map_err(|e| format!("Failed to delete workout: {}", e))?;

    Ok(DeleteResponse {
        success: true,
        deleted_id: id.to_string(),
    })
}

// ============================================================================
// Exercise Tool Functions
// ============================================================================

/// Add an exercise to a workout, or return the one with the same name
pub fn add_exercise<B: BlobStore>(
    store: &mut WorkoutStore<B>,
    workout_id: &str,
    name: &str,
) -> Result<ExerciseDetail, String> {
    let id = parse_id("workout", workout_id)?;
    let exercise = store
        .add_exercise(id, name)
        .map_err(|e| format!("Failed to add exercise: {}", e))?;
    Ok(ExerciseDetail::from(&exercise))
}

/// Log a performance against an exercise by name, creating the exercise if needed
pub fn log_exercise<B: BlobStore>(
    store: &mut WorkoutStore<B>,
    workout_id: &str,
    name: &str,
    sets: i64,
    reps: i64,
    weight: f64,
) -> Result<ExerciseDetail, String> {
    let id = parse_id("workout", workout_id)?;
    let sets = validate_count("sets", sets).map_err(|e| e.to_string())?;
    let reps = validate_count("reps", reps).map_err(|e| e.to_string())?;

    let exercise = store
        .add_exercise_with_log(id, name, sets, reps, weight)
        .map_err(|e| format!("Failed to log exercise: {}", e))?;
    Ok(ExerciseDetail::from(&exercise))
}

pub fn delete_exercise<B: BlobStore>(
    store: &mut WorkoutStore<B>,
    workout_id: &str,
    exercise_id: &str,
) -> Result<DeleteResponse, String> {
    let workout_id = parse_id("workout", workout_id)?;
    let exercise_id = parse_id("exercise", exercise_id)?;
    store
        .delete_exercise(workout_id, exercise_id)
        .map_err(|e| format!("Failed to delete exercise: {}", e))?;

    Ok(DeleteResponse {
        success: true,
        deleted_id: exercise_id.to_string(),
    })
}

// ============================================================================
// Log Tool Functions
// ============================================================================

/// Append a log to an exercise by ID
pub fn add_log<B: BlobStore>(
    store: &mut WorkoutStore<B>,
    workout_id: &str,
    exercise_id: &str,
    sets: i64,
    reps: i64,
    weight: f64,
) -> Result<LogDetail, String> {
    let workout_id = parse_id("workout", workout_id)?;
    let exercise_id = parse_id("exercise", exercise_id)?;
    let sets = validate_count("sets", sets).map_err(|e| e.to_string())?;
    let reps = validate_count("reps", reps).map_err(|e| e.to_string())?;

    let log = store
        .add_log(workout_id, exercise_id, sets, reps, weight)
        .map_err(|e| format!("Failed to add log: {}", e))?;
    Ok(LogDetail::from(&log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    fn store() -> WorkoutStore<MemoryBlobStore> {
        WorkoutStore::new(MemoryBlobStore::new())
    }

    #[test]
    fn test_add_and_list_workouts() {
        let mut store = store();
        add_workout(&mut store, "Push Day").unwrap();
        add_workout(&mut store, "Pull Day").unwrap();

        let list = list_workouts(&store);
        assert_eq!(list.total, 2);
        assert_eq!(list.workouts[0].name, "Push Day");
        assert_eq!(list.workouts[1].exercise_count, 0);
    }

    #[test]
    fn test_add_workout_error_message() {
        let mut store = store();
        let err = add_workout(&mut store, "").unwrap_err();
        assert_eq!(err, "Failed to add workout: Invalid name: must not be empty");
    }

    #[test]
    fn test_log_exercise_and_get_detail() {
        let mut store = store();
        let workout = add_workout(&mut store, "Push Day").unwrap();

        log_exercise(&mut store, &workout.id, "Bench Press", 3, 8, 135.0).unwrap();
        let bench = log_exercise(&mut store, &workout.id, "Bench Press", 3, 6, 145.0).unwrap();
        assert_eq!(bench.log_count, 2);
        assert_eq!(bench.latest_weight, Some(145.0));

        let detail = get_workout(&store, &workout.id).unwrap().unwrap();
        assert_eq!(detail.exercises.len(), 1);
        assert_eq!(detail.exercises[0].max_weight, Some(145.0));

        let summary = &list_workouts(&store).workouts[0];
        assert_eq!(summary.log_count, 2);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let mut store = store();
        let workout = add_workout(&mut store, "Push Day").unwrap();

        let err = log_exercise(&mut store, &workout.id, "Bench Press", -1, 8, 135.0).unwrap_err();
        assert!(err.contains("sets"));

        let bench = add_exercise(&mut store, &workout.id, "Bench Press").unwrap();
        let err = add_log(&mut store, &workout.id, &bench.id, 3, -2, 135.0).unwrap_err();
        assert!(err.contains("reps"));

        assert_eq!(get_workout(&store, &workout.id).unwrap().unwrap().exercises[0].log_count, 0);
    }

    #[test]
    fn test_invalid_id() {
        let mut store = store();
        let err = delete_workout(&mut store, "not-a-uuid").unwrap_err();
        assert_eq!(err, "Invalid workout id: 'not-a-uuid'");
    }

    #[test]
    fn test_get_unknown_workout_is_none() {
        let store = store();
        let id = uuid::Uuid::new_v4().to_string();
        assert!(get_workout(&store, &id).unwrap().is_none());
    }

    #[test]
    fn test_delete_cascade() {
        let mut store = store();
        let workout = add_workout(&mut store, "Legs").unwrap();
        let squat = log_exercise(&mut store, &workout.id, "Squat", 5, 5, 225.0).unwrap();

        let deleted = delete_workout(&mut store, &workout.id).unwrap();
        assert!(deleted.success);
        assert_eq!(deleted.deleted_id, workout.id);

        let err = add_log(&mut store, &workout.id, &squat.id, 5, 5, 230.0).unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_delete_exercise() {
        let mut store = store();
        let workout = add_workout(&mut store, "Legs").unwrap();
        let squat = add_exercise(&mut store, &workout.id, "Squat").unwrap();

        delete_exercise(&mut store, &workout.id, &squat.id).unwrap();
        assert!(get_workout(&store, &workout.id).unwrap().unwrap().exercises.is_empty());
        assert!(delete_exercise(&mut store, &workout.id, &squat.id).is_err());
    }
}
