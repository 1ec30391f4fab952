//! Core types for the review hub.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Content category an item was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Vocabulary,
    Verb,
    Adjective,
    Phrase,
    Sentence,
}

impl SourceType {
    /// Prefix used for positional item ids (`vocab_3`, `sent_7`, ...).
    ///
    /// Indexes are per category; the prefixes are what keep `vocab_0` and
    /// `verb_0` from colliding in a shared history map.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Vocabulary => "vocab",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Phrase => "phrase",
            Self::Sentence => "sent",
        }
    }
}

/// A normalized content unit ready for scheduling.
///
/// Rebuilt from raw tier data on every load; never persisted itself. The
/// `id` is the stable key into a student's history map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewableItem {
    pub id: String,
    pub source_type: SourceType,
    pub korean: String,
    pub english: String,
    pub romanization: String,
    pub emoji: String,
    /// Word/morpheme segmentation for block-arrangement drills.
    /// Only populated for sentence items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<String>,
    /// The raw source record, carried transparently for callers that need
    /// fields outside the normalized contract (conjugation tables,
    /// example sentences, explicit distractors).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Per-category output of normalization.
///
/// `all` concatenates every category except sentences, which are kept as a
/// separate pool because block-arrangement drills need `blocks` rather than
/// plain text matching.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemBundle {
    pub vocabulary: Vec<ReviewableItem>,
    pub verbs: Vec<ReviewableItem>,
    pub adjectives: Vec<ReviewableItem>,
    pub phrases: Vec<ReviewableItem>,
    pub sentences: Vec<ReviewableItem>,
    pub all: Vec<ReviewableItem>,
}

/// Per-item answer history, persisted in the legacy blob shape
/// (`{streak, correct, incorrect, lastSeen}` with millisecond timestamps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Consecutive correct answers since the last miss.
    #[serde(default)]
    pub streak: u32,
    /// Lifetime correct answers; never reset.
    #[serde(default)]
    pub correct: u32,
    /// Lifetime incorrect answers; never reset.
    #[serde(default)]
    pub incorrect: u32,
    /// Milliseconds since epoch of the most recent answer.
    #[serde(rename = "lastSeen", default)]
    pub last_seen: Option<i64>,
}

/// A student's full history, read and written wholesale.
pub type HistoryMap = HashMap<String, HistoryRecord>;

/// Per-(student, game-mode) session summary, merged on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    #[serde(default)]
    pub last_played: Option<i64>,
    #[serde(default)]
    pub sessions_completed: u32,
    /// Best correct-streak observed within any single session.
    #[serde(default)]
    pub best_streak: u32,
}

impl GameProgress {
    /// Merge one completed session into the summary.
    pub fn complete_session(&self, session_streak: u32, now: DateTime<Utc>) -> GameProgress {
        GameProgress {
            last_played: Some(now.timestamp_millis()),
            sessions_completed: self.sessions_completed + 1,
            best_streak: self.best_streak.max(session_streak),
        }
    }
}

/// Aggregate SRS statistics for one student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SrsStats {
    /// Items with at least one recorded answer.
    pub total_seen: usize,
    /// Items with streak >= 4.
    pub mastered: usize,
    /// Seen items not yet mastered.
    pub learning: usize,
    /// Rounded lifetime percentage of correct answers, 0 when none.
    pub accuracy: u32,
}
