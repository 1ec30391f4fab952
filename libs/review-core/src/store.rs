//! Persistence seam for per-student history and progress blobs.
//!
//! The hub's durability policy is best-effort: a missing or corrupt blob is
//! an empty value, never an error, so a student whose history cannot be read
//! starts over instead of losing the session. Implementations encode blobs
//! as JSON keyed by student (history) or (student, game) (progress).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;
use crate::types::{GameProgress, HistoryMap};

/// Storage of opaque per-student JSON blobs.
///
/// Loads must be lenient: absent or unreadable data yields the default
/// value. Saves write the blob wholesale; there are no partial-field
/// updates.
pub trait ProgressStore {
    fn load_history(&self, student: &str) -> HistoryMap;
    fn save_history(&self, student: &str, history: &HistoryMap) -> Result<()>;

    fn load_progress(&self, student: &str, game: &str) -> GameProgress;
    fn save_progress(&self, student: &str, game: &str, progress: &GameProgress) -> Result<()>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    history: Mutex<HashMap<String, HistoryMap>>,
    progress: Mutex<HashMap<(String, String), GameProgress>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load_history(&self, student: &str) -> HistoryMap {
        self.history
            .lock()
            .expect("history lock poisoned")
            .get(student)
            .cloned()
            .unwrap_or_default()
    }

    fn save_history(&self, student: &str, history: &HistoryMap) -> Result<()> {
        self.history
            .lock()
            .expect("history lock poisoned")
            .insert(student.to_string(), history.clone());
        Ok(())
    }

    fn load_progress(&self, student: &str, game: &str) -> GameProgress {
        self.progress
            .lock()
            .expect("progress lock poisoned")
            .get(&(student.to_string(), game.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn save_progress(&self, student: &str, game: &str, progress: &GameProgress) -> Result<()> {
        self.progress
            .lock()
            .expect("progress lock poisoned")
            .insert((student.to_string(), game.to_string()), progress.clone());
        Ok(())
    }
}
