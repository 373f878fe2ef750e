//! Best-score tracking
//!
//! The session consults an external store for the best score across runs and
//! writes it back only when a run ends with a new maximum. Store failures
//! are absorbed: a broken store degrades to "no best score yet", never into
//! a gameplay error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Boundary contract for best-score persistence
pub trait HighScoreStore {
    /// Current persisted best, or 0 when nothing is stored
    fn load(&mut self) -> u32;
    /// Persist a new best score
    fn save(&mut self, best: u32);
}

/// Volatile store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub best: u32,
    /// Number of times `save` was called, for inspection
    pub saves: usize,
}

impl MemoryStore {
    pub fn with_best(best: u32) -> Self {
        Self { best, saves: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.saves += 1;
    }
}

/// On-disk JSON payload
#[derive(Debug, Serialize, Deserialize)]
struct StoredBest {
    best: u32,
}

/// JSON-file-backed store.
///
/// Read/parse failures fall back to 0 with a warning; write failures are
/// logged and dropped. The simulation never sees either.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("no high score file at {:?}, starting fresh", self.path);
                return 0;
            }
        };
        match serde_json::from_str::<StoredBest>(&json) {
            Ok(stored) => {
                log::info!("loaded high score {}", stored.best);
                stored.best
            }
            Err(err) => {
                log::warn!("unreadable high score file {:?}: {}", self.path, err);
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        match serde_json::to_string(&StoredBest { best }) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("failed to write high score to {:?}: {}", self.path, err);
                } else {
                    log::info!("high score {} saved", best);
                }
            }
            Err(err) => log::warn!("failed to encode high score: {}", err),
        }
    }
}
