//! File-backed persistence of per-student history and progress blobs.
//!
//! One JSON file per blob under the state directory, written wholesale on
//! every save. Reads are lenient: an absent file is the normal first-run
//! case and a corrupt one is logged and treated as empty, so a damaged
//! blob costs a student their history, never their session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use review_core::error::Result;
use review_core::{GameProgress, HistoryMap, ProgressStore};

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn history_path(&self, student: &str) -> PathBuf {
        self.dir.join(format!("{student}_srs.json"))
    }

    fn progress_path(&self, student: &str, game: &str) -> PathBuf {
        self.dir.join(format!("{student}_{game}_progress.json"))
    }

    fn read_lenient<T: DeserializeOwned + Default>(&self, path: &Path) -> T {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return T::default(),
        };
        match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("corrupt blob {}, starting empty: {err}", path.display());
                T::default()
            }
        }
    }

    fn write_blob<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn load_history(&self, student: &str) -> HistoryMap {
        self.read_lenient(&self.history_path(student))
    }

    fn save_history(&self, student: &str, history: &HistoryMap) -> Result<()> {
        self.write_blob(&self.history_path(student), history)
    }

    fn load_progress(&self, student: &str, game: &str) -> GameProgress {
        self.read_lenient(&self.progress_path(student, game))
    }

    fn save_progress(&self, student: &str, game: &str, progress: &GameProgress) -> Result<()> {
        self.write_blob(&self.progress_path(student, game), progress)
    }
}
