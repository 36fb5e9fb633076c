//! Progress tools
//!
//! Weight progression series for an exercise, the data behind the progress chart.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::Serialize;

use super::parse_id;
use crate::models::{Exercise, ExerciseLog};
use crate::storage::BlobStore;
use crate::store::WorkoutStore;

// ============================================================================
// Response Types
// ============================================================================

/// One point on the progression line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: String,
    pub weight: f64,
    pub sets: u32,
    pub reps: u32,
    pub volume: f64,
}

/// Best and total figures for a day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgress {
    pub date: String,
    pub day_of_week: String,
    pub log_count: usize,
    pub top_weight: f64,
    pub total_volume: f64,
}

#[derive(Debug, Serialize)]
pub struct ProgressionResponse {
    pub exercise_name: String,
    pub log_count: usize,
    pub latest_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub total_volume: f64,
    pub points: Vec<ProgressPoint>,
    pub daily: Vec<DailyProgress>,
}

// ============================================================================
// Aggregation
// ============================================================================

fn day_of_week_abbrev(date: &NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

fn point(log: &ExerciseLog) -> ProgressPoint {
    ProgressPoint {
        date: log.date.to_rfc3339(),
        weight: log.weight,
        sets: log.sets,
        reps: log.reps,
        volume: log.volume(),
    }
}

/// Group logs by UTC calendar day, oldest first
pub fn aggregate_daily_progress(logs: &[&ExerciseLog]) -> Vec<DailyProgress> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ExerciseLog>> = BTreeMap::new();
    for log in logs {
        by_date.entry(log.date.date_naive()).or_default().push(*log);
    }

    by_date
        .into_iter()
        .map(|(date, day_logs)| DailyProgress {
            date: date.format("%Y-%m-%d").to_string(),
            day_of_week: day_of_week_abbrev(&date).to_string(),
            log_count: day_logs.len(),
            top_weight: day_logs.iter().map(|l| l.weight).fold(0.0, f64::max),
            total_volume: day_logs.iter().map(|l| l.volume()).sum(),
        })
        .collect()
}

/// Build the progression for logs already in chronological order
fn progression(exercise_name: &str, logs: &[&ExerciseLog]) -> ProgressionResponse {
    let max_weight = logs
        .iter()
        .map(|l| l.weight)
        .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |m| m.max(w))));

    ProgressionResponse {
        exercise_name: exercise_name.to_string(),
        log_count: logs.len(),
        latest_weight: logs.last().map(|l| l.weight),
        max_weight,
        total_volume: logs.iter().map(|l| l.volume()).sum(),
        points: logs.iter().map(|l| point(l)).collect(),
        daily: aggregate_daily_progress(logs),
    }
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Progression of one exercise in one workout
pub fn exercise_progression<B: BlobStore>(
    store: &WorkoutStore<B>,
    workout_id: &str,
    exercise_id: &str,
) -> Result<ProgressionResponse, String> {
    let workout_id = parse_id("workout", workout_id)?;
    let exercise_id = parse_id("exercise", exercise_id)?;

    let exercise: &Exercise = store
        .exercise(workout_id, exercise_id)
        .ok_or_else(|| format!("Exercise not found with id: {}", exercise_id))?;

    let logs: Vec<&ExerciseLog> = exercise.history.iter().collect();
    Ok(progression(&exercise.name, &logs))
}

/// Progression of every exercise with this name, merged across workouts
pub fn progression_by_name<B: BlobStore>(
    store: &WorkoutStore<B>,
    name: &str,
) -> Result<ProgressionResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Exercise name must not be empty".to_string());
    }

    let mut logs: Vec<&ExerciseLog> = store
        .list_workouts()
        .iter()
        .flat_map(|w| w.exercises.iter())
        .filter(|e| e.name == name)
        .flat_map(|e| e.history.iter())
        .collect();

    // Stable, so same-instant logs keep workout order
    logs.sort_by_key(|l| l.date);

    Ok(progression(name, &logs))
}

/// Latest log date across all exercises with this name
pub fn last_performed<B: BlobStore>(store: &WorkoutStore<B>, name: &str) -> Option<DateTime<Utc>> {
    store
        .list_workouts()
        .iter()
        .flat_map(|w| w.exercises.iter())
        .filter(|e| e.name == name)
        .filter_map(|e| e.latest().map(|l| l.date))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    use crate::storage::MemoryBlobStore;

    fn log_at(y: i32, m: u32, d: u32, h: u32, sets: u32, reps: u32, weight: f64) -> ExerciseLog {
        ExerciseLog {
            id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            sets,
            reps,
            weight,
        }
    }

    #[test]
    fn test_aggregate_daily_progress() {
        let a = log_at(2025, 1, 6, 9, 3, 8, 135.0);
        let b = log_at(2025, 1, 6, 10, 3, 6, 145.0);
        let c = log_at(2025, 1, 8, 9, 3, 5, 150.0);

        let daily = aggregate_daily_progress(&[&a, &b, &c]);
        assert_eq!(daily.len(), 2);

        assert_eq!(daily[0].date, "2025-01-06");
        assert_eq!(daily[0].day_of_week, "Mon");
        assert_eq!(daily[0].log_count, 2);
        assert_eq!(daily[0].top_weight, 145.0);
        assert_eq!(daily[0].total_volume, 3.0 * 8.0 * 135.0 + 3.0 * 6.0 * 145.0);

        assert_eq!(daily[1].day_of_week, "Wed");
        assert_eq!(daily[1].top_weight, 150.0);
    }

    #[test]
    fn test_empty_progression() {
        let p = progression("Squat", &[]);
        assert_eq!(p.log_count, 0);
        assert_eq!(p.latest_weight, None);
        assert_eq!(p.max_weight, None);
        assert!(p.points.is_empty());
        assert!(p.daily.is_empty());
    }

    #[test]
    fn test_exercise_progression() {
        let mut store = WorkoutStore::new(MemoryBlobStore::new());
        let workout = store.add_workout("Push Day").unwrap();
        store.add_exercise_with_log(workout.id, "Bench Press", 3, 8, 135.0).unwrap();
        store.add_exercise_with_log(workout.id, "Bench Press", 3, 6, 145.0).unwrap();
        let bench = store
            .add_exercise_with_log(workout.id, "Bench Press", 5, 5, 140.0)
            .unwrap();

        let p = exercise_progression(&store, &workout.id.to_string(), &bench.id.to_string())
            .unwrap();
        assert_eq!(p.exercise_name, "Bench Press");
        assert_eq!(p.log_count, 3);
        assert_eq!(p.latest_weight, Some(140.0));
        assert_eq!(p.max_weight, Some(145.0));

        let weights: Vec<f64> = p.points.iter().map(|pt| pt.weight).collect();
        assert_eq!(weights, vec![135.0, 145.0, 140.0]);
    }

    #[test]
    fn test_exercise_progression_unknown() {
        let store = WorkoutStore::new(MemoryBlobStore::new());
        let id = Uuid::new_v4().to_string();
        assert!(exercise_progression(&store, &id, &id).is_err());
    }

    #[test]
    fn test_progression_by_name_merges_workouts() {
        let mut store = WorkoutStore::new(MemoryBlobStore::new());
        let monday = store.add_workout("Monday").unwrap();
        let thursday = store.add_workout("Thursday").unwrap();

        store.add_exercise_with_log(monday.id, "Squat", 5, 5, 225.0).unwrap();
        store.add_exercise_with_log(thursday.id, "Squat", 5, 5, 235.0).unwrap();
        store.add_exercise_with_log(thursday.id, "Lunge", 3, 10, 50.0).unwrap();

        let p = progression_by_name(&store, "Squat").unwrap();
        assert_eq!(p.log_count, 2);
        assert_eq!(p.max_weight, Some(235.0));
        assert!(p.points[0].date <= p.points[1].date);

        assert!(last_performed(&store, "Squat").is_some());
        assert!(last_performed(&store, "Deadlift").is_none());
        assert!(progression_by_name(&store, " ").is_err());
    }
}
