//! Fitlog
//!
//! Loads the workout document and prints a summary of every workout.

use fitlog::tools::workouts;
use fitlog::{banner, FileBlobStore, StoreConfig, WorkoutStore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitlog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig::from_env();
    banner::print_startup_banner(&config.data_path());

    let blobs = FileBlobStore::new(&config.data_dir);
    let mut store = WorkoutStore::with_key(blobs, config.file_name.clone());
    if let Some(notice) = banner::load_notice(store.load()) {
        eprintln!("{}", notice);
    }

    let list = workouts::list_workouts(&store);
    println!("{} workout(s)", list.total);

    for summary in &list.workouts {
        println!(
            "\n{}  ({}, {} exercise(s), {} log(s))",
            summary.name, summary.date, summary.exercise_count, summary.log_count
        );

        let detail = match workouts::get_workout(&store, &summary.id)? {
            Some(d) => d,
            None => continue,
        };
        for exercise in &detail.exercises {
            match (exercise.latest_weight, exercise.max_weight) {
                (Some(latest), Some(max)) => println!(
                    "  {:<24} {:>3} log(s)  latest {:.1}  best {:.1}",
                    exercise.name, exercise.log_count, latest, max
                ),
                _ => println!("  {:<24} no logs yet", exercise.name),
            }
        }
    }

    Ok(())
}
