//! Test fixtures: a small roster and tier data files.

use serde_json::{json, Value};

/// Two-student roster; `mina` is on the beginner tier, `jun` points at a
/// tier with no data file.
pub fn manifest() -> Value {
    json!({
        "students": [
            { "id": "mina", "name": "Mina", "tier": "beginner", "emoji": "🐣" },
            { "id": "jun", "name": "Jun", "tier": "empty", "emoji": "🦊" },
        ],
        "tiers": {
            "beginner": { "file": "beginner.json", "label": "Beginner", "color": "#4caf50" },
            "empty": { "file": "empty.json", "label": "Empty" },
        }
    })
}

/// Beginner tier data exercising every category and the inconsistent field
/// spellings the normalizer has to reconcile.
pub fn beginner_tier() -> Value {
    json!({
        "vocabulary": [
            { "kr": "물", "en": "water", "rom": "mul", "emoji": "💧" },
            { "kr": "불", "en": "fire", "rom": "bul", "emoji": "🔥" },
            { "korean": "밥", "english": "rice", "romanization": "bap" },
            { "word": "책", "meaning": "book" },
            { "kr": "커피", "en": "coffee", "rom": "keo-pi" },
        ],
        "verbs": [
            {
                "base": "먹다", "meaning": "to eat", "baseRom": "meok-da",
                "polite": "먹어요", "past": "먹었어요", "future": "먹을 거예요",
            },
            {
                "base": "가다", "meaning": "to go",
                "polite": "가요", "past": "갔어요", "future": "갈 거예요", "negative": "안 가요",
            },
            {
                "base": "마시다", "meaning": "to drink",
                "conjugations": { "polite": "마셔요", "past": "마셨어요" },
            },
        ],
        "adjectives": [
            { "kr": "크다", "en": "big" },
        ],
        "phrases": [
            { "kr": "감사합니다", "en": "thank you", "rom": "gam-sa-ham-ni-da" },
        ],
        "sentences": [
            { "kr": "저는 물을 마셔요", "en": "I drink water", "blocks": ["저는", "물을", "마셔요"] },
            { "kr": "밥을 먹어요", "en": "I eat rice", "blocks": ["밥을", "먹어요"], "distractors": ["커피", "아주"] },
            { "kr": "학교에 가요", "en": "I go to school", "blocks": ["학교에", "가요"] },
        ],
    })
}

/// Body for POST /api/review.
pub fn review_request(student: &str, item_id: &str, correct: bool) -> Value {
    json!({ "student": student, "item_id": item_id, "correct": correct })
}

/// Body for POST /api/progress.
pub fn progress_request(student: &str, game: &str, best_streak: u32) -> Value {
    json!({ "student": student, "game": game, "best_streak": best_streak })
}
