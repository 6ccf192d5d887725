//! Best-score persistence
//!
//! The best score is kept in a small JSON file:
//!
//! ```json
//! { "best_score": 2340, "version": "0.1.0" }
//! ```
//!
//! A file holding only a bare number is also accepted when loading.

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::BestScoreCallback;

/// On-disk form of the best score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u32,

    /// Version of the program that wrote the file
    pub version: String,
}

impl BestScoreRecord {
    pub fn new(best_score: u32) -> Self {
        Self {
            best_score,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// File-backed best-score store
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score, or 0 if nothing has been saved yet
    pub fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            debug!("no best score at {:?}; starting from 0", self.path);
            return Ok(0);
        }

        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read best score from {:?}", self.path))?;
        parse_best_score(&text)
            .with_context(|| format!("Failed to parse best score in {:?}", self.path))
    }

    /// Write the best score, creating parent directories if needed
    pub fn save(&self, best_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let json = serde_json::to_string_pretty(&BestScoreRecord::new(best_score))
            .context("Failed to serialize best score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write best score to {:?}", self.path))?;

        debug!("saved best score {} to {:?}", best_score, self.path);
        Ok(())
    }

    /// Callback for the game controller that saves every new best score
    ///
    /// Save failures are logged; the game keeps running.
    pub fn notifier(&self) -> BestScoreCallback {
        let store = self.clone();
        Box::new(move |best| {
            if let Err(err) = store.save(best) {
                error!("{:#}", err);
            }
        })
    }
}

fn parse_best_score(text: &str) -> Result<u32> {
    let text = text.trim();
    if let Ok(score) = text.parse::<u32>() {
        return Ok(score);
    }

    let record: BestScoreRecord =
        serde_json::from_str(text).context("Failed to deserialize best score record")?;
    Ok(record.best_score)
}
