//! Verb conjugation drills.
//!
//! Verb records carry their forms either as flat fields (`polite`, `past`,
//! `future`, `negative`, with matching `*Rom` romanizations) or as a nested
//! `conjugations` object whose values are strings or `{korean, romanization}`
//! objects. Both shapes are supported here.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::sampling;
use crate::types::ReviewableItem;

/// Distractor forms offered per question.
const DISTRACTORS: usize = 3;
/// Cap on random draws while hunting distractor forms; mirrors the drill's
/// original retry bound so sparse verb sets terminate quickly.
const MAX_ATTEMPTS: usize = 20;

/// Tenses drilled by conjugation practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Past,
    Future,
    Negative,
}

/// All drilled tenses, in display order.
pub const TENSES: [Tense; 4] = [Tense::Present, Tense::Past, Tense::Future, Tense::Negative];

impl Tense {
    /// Suffix used in compound history ids (`verb_1_future`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Past => "past",
            Self::Future => "future",
            Self::Negative => "negative",
        }
    }

    /// Field holding this form on a raw verb record.
    pub fn field(self) -> &'static str {
        match self {
            Self::Present => "polite",
            Self::Past => "past",
            Self::Future => "future",
            Self::Negative => "negative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present Polite",
            Self::Past => "Past",
            Self::Future => "Future",
            Self::Negative => "Negative",
        }
    }

    pub fn label_kr(self) -> &'static str {
        match self {
            Self::Present => "현재 존댓말",
            Self::Past => "과거",
            Self::Future => "미래",
            Self::Negative => "부정",
        }
    }
}

/// One conjugation prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ConjugationQuestion {
    /// History key: `<verb_id>_<tense_key>`. Scheduling still selects by the
    /// verb's own id; only the answer outcome is recorded per form.
    pub id: String,
    pub verb: ReviewableItem,
    pub tense: Tense,
    pub answer: String,
    pub romanization: String,
    /// Answer plus distractor forms, shuffled. Empty answer (no conjugation
    /// data for the chosen tense) still yields a question so the learner
    /// sees the form.
    pub options: Vec<String>,
}

/// The (korean, romanization) form of `verb` for `tense`, if present.
pub fn form(verb: &ReviewableItem, tense: Tense) -> Option<(String, String)> {
    let field = tense.field();

    if let Some(conjugations) = verb.extra.get("conjugations").and_then(Value::as_object) {
        match conjugations.get(field) {
            Some(Value::String(text)) if !text.is_empty() => {
                return Some((text.clone(), String::new()));
            }
            Some(Value::Object(obj)) => {
                let korean = string_field(obj, "korean").or_else(|| string_field(obj, "ko"));
                if let Some(korean) = korean {
                    let rom = string_field(obj, "romanization")
                        .or_else(|| string_field(obj, "roman"))
                        .unwrap_or_default();
                    return Some((korean, rom));
                }
            }
            _ => {}
        }
    }

    let korean = string_field(&verb.extra, field)?;
    let rom = string_field(&verb.extra, &format!("{field}Rom")).unwrap_or_default();
    Some((korean, rom))
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Build one question for `verb`, picking a random tense the record actually
/// has data for (or any tense when it has none).
pub fn question<R: Rng>(
    verb: &ReviewableItem,
    pool: &[ReviewableItem],
    rng: &mut R,
) -> ConjugationQuestion {
    let available: Vec<Tense> = TENSES
        .iter()
        .copied()
        .filter(|tense| form(verb, *tense).is_some())
        .collect();
    let tense = available
        .choose(rng)
        .copied()
        .unwrap_or_else(|| *TENSES.choose(rng).expect("tense table is non-empty"));

    let (answer, romanization) = form(verb, tense).unwrap_or_default();
    let options = build_options(verb, &answer, pool, rng);

    ConjugationQuestion {
        id: format!("{}_{}", verb.id, tense.key()),
        verb: verb.clone(),
        tense,
        answer,
        romanization,
        options,
    }
}

/// Distractors are other verbs' forms in random tenses, topped up with base
/// forms when the pool is thin.
fn build_options<R: Rng>(
    verb: &ReviewableItem,
    answer: &str,
    pool: &[ReviewableItem],
    rng: &mut R,
) -> Vec<String> {
    let mut distractors: Vec<String> = Vec::new();
    let others: Vec<&ReviewableItem> = pool.iter().filter(|v| v.id != verb.id).collect();

    let mut attempts = 0;
    while distractors.len() < DISTRACTORS && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let Some(&other) = others.choose(rng) else {
            break;
        };
        let tense = *TENSES.choose(rng).expect("tense table is non-empty");
        if let Some((text, _)) = form(other, tense) {
            if text != answer && !distractors.contains(&text) {
                distractors.push(text);
            }
        }
    }

    for other in sampling::shuffled(&others, rng) {
        if distractors.len() >= DISTRACTORS {
            break;
        }
        let base = other.korean.clone();
        if !base.is_empty() && base != answer && !distractors.contains(&base) {
            distractors.push(base);
        }
    }

    let mut options = distractors;
    options.push(answer.to_string());
    sampling::shuffled(&options, rng)
}
