//! Store configuration
//!
//! Where the workout document lives on disk. Only the binaries read the
//! environment; the library takes a `StoreConfig` or a blob store directly.

use std::path::{Path, PathBuf};

use crate::store::DEFAULT_KEY;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FITLOG_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl StoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            file_name: DEFAULT_KEY.to_string(),
        }
    }

    /// Data directory from `FITLOG_DATA_DIR`, or `data/` beside the project root
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => Self::new(default_data_dir()),
        }
    }

    /// Full path of the workout document
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

fn default_data_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    project_dir(&exe_dir).join("data")
}

/// Walk up from target/release or target/debug to the project root
fn project_dir(exe_dir: &Path) -> PathBuf {
    if exe_dir.ends_with("release") || exe_dir.ends_with("debug") {
        if let Some(root) = exe_dir.parent().and_then(Path::parent) {
            return root.to_path_buf();
        }
    }
    exe_dir.to_path_buf()
}
