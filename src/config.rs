use crate::model::Catalog;
use std::path::PathBuf;

/// Progress file used when nothing else is configured
pub const DEFAULT_PROGRESS_FILE: &str = "nectar_progress.txt";

/// Environment variable overriding the progress file location
pub const PROGRESS_FILE_ENV: &str = "NECTAR_PROGRESS_FILE";

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Where counts are loaded from and saved to
    pub progress_path: PathBuf,
    /// Names being tracked
    pub catalog: Catalog,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            progress_path: PathBuf::from(DEFAULT_PROGRESS_FILE),
            catalog: Catalog::default(),
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::with_path_override(std::env::var(PROGRESS_FILE_ENV).ok())
    }

    fn with_path_override(path: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = path.filter(|p| !p.trim().is_empty()) {
            config.progress_path = PathBuf::from(path);
        }
        config
    }
}
