//! Startup banner and load notices

use crate::store::LoadOutcome;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Banner text, one line per entry
pub fn banner_lines(data_path: &std::path::Path) -> Vec<String> {
    vec![
        format!("{} {}", NAME, VERSION),
        format!("Data: {}", data_path.display()),
    ]
}

/// Print the startup banner to stderr
pub fn print_startup_banner(data_path: &std::path::Path) {
    for line in banner_lines(data_path) {
        eprintln!("{}", line);
    }
}

/// User-facing line for a load that fell back to an empty collection
pub fn load_notice(outcome: LoadOutcome) -> Option<&'static str> {
    match outcome {
        LoadOutcome::Corrupt => {
            Some("Saved workouts are corrupt; they will be replaced on the next change.")
        }
        LoadOutcome::Unreadable => {
            Some("Saved workouts could not be read; starting with an empty list.")
        }
        LoadOutcome::Loaded(_) | LoadOutcome::Missing => None,
    }
}
