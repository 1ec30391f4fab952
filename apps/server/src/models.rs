//! API request/response types

use serde::{Deserialize, Serialize};

use review_core::conjugation::ConjugationQuestion;
use review_core::drills::{BlockLayout, QuizQuestion};
use review_core::{GameProgress, HistoryRecord, ItemBundle, ReviewableItem, SrsStats};

use crate::content::Student;

/// Default session bound for quizzes and drills; flashcard clients ask for
/// 20 explicitly.
pub const DEFAULT_SESSION_SIZE: usize = 10;

/// Which normalized pool a session draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    #[default]
    All,
    Vocabulary,
    Verbs,
    Adjectives,
    Phrases,
    Sentences,
}

impl Pool {
    pub fn items(self, bundle: &ItemBundle) -> &[ReviewableItem] {
        match self {
            Self::All => &bundle.all,
            Self::Vocabulary => &bundle.vocabulary,
            Self::Verbs => &bundle.verbs,
            Self::Adjectives => &bundle.adjectives,
            Self::Phrases => &bundle.phrases,
            Self::Sentences => &bundle.sentences,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub student: String,
    #[serde(default)]
    pub pool: Pool,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub student: String,
    pub items: Vec<ReviewableItem>,
}

#[derive(Debug, Deserialize)]
pub struct DrillQuery {
    pub student: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub student: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct SentencesResponse {
    pub student: String,
    pub layouts: Vec<BlockLayout>,
}

#[derive(Debug, Serialize)]
pub struct ConjugationResponse {
    pub student: String,
    pub questions: Vec<ConjugationQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub student: String,
    pub item_id: String,
    pub correct: bool,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub item_id: String,
    pub record: HistoryRecord,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub student: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub student: String,
    pub stats: SrsStats,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub student: String,
    pub game: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressUpdateRequest {
    pub student: String,
    pub game: String,
    /// Best correct-streak reached during the completed session.
    #[serde(default)]
    pub best_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub student: String,
    pub game: String,
    pub progress: GameProgress,
}

#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
}
