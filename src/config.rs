use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the best-score file, relative to the working directory
pub const DEFAULT_BEST_SCORE_FILE: &str = "best_score.json";

/// Process-level configuration, built from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the best score is loaded from and saved to
    pub best_score_path: PathBuf,
    /// Log destination; without one, logging stays quiet so it cannot
    /// draw over the game screen
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            best_score_path: PathBuf::from(DEFAULT_BEST_SCORE_FILE),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create a configuration storing the best score at `best_score_path`
    pub fn new(best_score_path: impl Into<PathBuf>) -> Self {
        Self {
            best_score_path: best_score_path.into(),
            ..Default::default()
        }
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }

    /// Log filter used when `RUST_LOG` is not set
    ///
    /// The interactive screen owns the terminal, so it logs nothing unless a
    /// log file is configured.
    pub fn default_log_filter(&self, interactive: bool) -> &'static str {
        match (&self.log_file, interactive) {
            (Some(_), _) => "info",
            (None, true) => "off",
            (None, false) => "warn",
        }
    }
}
