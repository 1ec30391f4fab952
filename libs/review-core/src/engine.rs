//! SRS engine binding the pure scheduler to a persistence store.

use chrono::Utc;
use rand::Rng;

use crate::error::Result;
use crate::srs;
use crate::store::ProgressStore;
use crate::types::{GameProgress, HistoryMap, HistoryRecord, ReviewableItem, SrsStats};

/// Student-facing entry point for scheduling and outcome recording.
///
/// All state lives in the store; the engine itself is stateless, so one
/// instance serves every student. Every answer is persisted immediately,
/// which means an abandoned session keeps whatever was already recorded.
pub struct SrsEngine<S> {
    store: S,
}

impl<S: ProgressStore> SrsEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The student's full history map (empty on missing or corrupt data).
    pub fn history(&self, student: &str) -> HistoryMap {
        self.store.load_history(student)
    }

    /// Select up to `count` items from `pool` for one practice round.
    pub fn select_session<R: Rng>(
        &self,
        student: &str,
        pool: &[ReviewableItem],
        count: usize,
        rng: &mut R,
    ) -> Vec<ReviewableItem> {
        let history = self.store.load_history(student);
        srs::select_session(&history, pool, count, Utc::now(), rng)
    }

    /// Record one answer and persist the updated history immediately.
    pub fn record_answer(
        &self,
        student: &str,
        item_id: &str,
        correct: bool,
    ) -> Result<HistoryRecord> {
        let mut history = self.store.load_history(student);
        let record = srs::record_answer(&mut history, item_id, correct, Utc::now());
        self.store.save_history(student, &history)?;
        Ok(record)
    }

    /// Aggregate stats over everything the student has answered.
    pub fn stats(&self, student: &str) -> SrsStats {
        srs::stats(&self.store.load_history(student))
    }

    /// Session summary for one game mode.
    pub fn progress(&self, student: &str, game: &str) -> GameProgress {
        self.store.load_progress(student, game)
    }

    /// Merge one completed session into the per-game summary.
    pub fn finish_session(
        &self,
        student: &str,
        game: &str,
        session_streak: u32,
    ) -> Result<GameProgress> {
        let merged = self
            .store
            .load_progress(student, game)
            .complete_session(session_streak, Utc::now());
        self.store.save_progress(student, game, &merged)?;
        Ok(merged)
    }
}
