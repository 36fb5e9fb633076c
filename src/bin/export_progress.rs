//! Print the weight progression for an exercise as JSON
//!
//! Optional inspection utility; the store itself takes no arguments or
//! environment. Reads the data directory from `FITLOG_DATA_DIR` if set.
//!
//! Usage: cargo run --bin export_progress -- "Bench Press"

use fitlog::tools::progress;
use fitlog::{FileBlobStore, StoreConfig, WorkoutStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let name = match args.get(1) {
        Some(name) => name.as_str(),
        None => {
            eprintln!("Usage: export_progress <exercise name>");
            std::process::exit(2);
        }
    };

    let config = StoreConfig::from_env();
    eprintln!("Data path: {}", config.data_path().display());

    let mut store = WorkoutStore::with_key(FileBlobStore::new(&config.data_dir), config.file_name.clone());
    store.load();

    let report = progress::progression_by_name(&store, name)?;
    match progress::last_performed(&store, report.exercise_name.as_str()) {
        Some(date) => eprintln!("Last performed: {}", date.to_rfc3339()),
        None => eprintln!("No logs found for: {}", name),
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
