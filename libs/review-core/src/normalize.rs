//! Content normalization: raw tier data into reviewable items.
//!
//! Tier data files were authored by hand over several iterations and are not
//! consistently shaped: vocabulary rows say `kr`/`en`, verbs say
//! `base`/`meaning`, some rows carry `romanization` and others `rom`. The
//! resolver below reconciles those spellings once, in priority order, instead
//! of scattering fallbacks through every game.

use serde_json::{Map, Value};

use crate::types::{ItemBundle, ReviewableItem, SourceType};

/// Korean-text fields, highest priority first.
const KOREAN_KEYS: [&str; 5] = ["kr", "korean", "ko", "word", "base"];
/// English-text fields, highest priority first.
const ENGLISH_KEYS: [&str; 3] = ["english", "en", "meaning"];
/// Romanization fields, highest priority first.
const ROMAN_KEYS: [&str; 5] = ["rom", "romanization", "roman", "baseRom", "politeRom"];

/// Resolve the first non-empty string among `keys` in a raw record.
pub fn resolve_field<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> &'a str {
    for key in keys {
        if let Some(Value::String(text)) = record.get(*key) {
            if !text.is_empty() {
                return text;
            }
        }
    }
    ""
}

/// The prompt/target Korean text of a raw record.
pub fn korean_text(record: &Map<String, Value>) -> &str {
    resolve_field(record, &KOREAN_KEYS)
}

/// The English gloss of a raw record, possibly empty.
pub fn english_text(record: &Map<String, Value>) -> &str {
    resolve_field(record, &ENGLISH_KEYS)
}

/// The romanization of a raw record, possibly empty.
pub fn romanization(record: &Map<String, Value>) -> &str {
    resolve_field(record, &ROMAN_KEYS)
}

fn emoji(record: &Map<String, Value>) -> &str {
    resolve_field(record, &["emoji"])
}

fn block_tokens(record: &Map<String, Value>) -> Vec<String> {
    record
        .get("blocks")
        .and_then(Value::as_array)
        .map(|tokens| {
            tokens
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Normalize one student's raw content bundle.
///
/// Absent or non-object input yields an empty bundle; normalization never
/// fails. The transform is pure, so calling it twice on identical input
/// yields identical items.
pub fn normalize(raw: Option<&Value>) -> ItemBundle {
    let Some(Value::Object(root)) = raw else {
        return ItemBundle::default();
    };

    let bundle = ItemBundle {
        vocabulary: category_items(root, "vocabulary", SourceType::Vocabulary),
        verbs: category_items(root, "verbs", SourceType::Verb),
        adjectives: category_items(root, "adjectives", SourceType::Adjective),
        phrases: category_items(root, "phrases", SourceType::Phrase),
        sentences: category_items(root, "sentences", SourceType::Sentence),
        all: Vec::new(),
    };

    let all = bundle
        .vocabulary
        .iter()
        .chain(&bundle.verbs)
        .chain(&bundle.adjectives)
        .chain(&bundle.phrases)
        .cloned()
        .collect();

    ItemBundle { all, ..bundle }
}

fn category_items(
    root: &Map<String, Value>,
    key: &str,
    source_type: SourceType,
) -> Vec<ReviewableItem> {
    let Some(Value::Array(records)) = root.get(key) else {
        return Vec::new();
    };

    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| normalize_record(record, index, source_type))
        .collect()
}

fn normalize_record(
    record: &Value,
    index: usize,
    source_type: SourceType,
) -> Option<ReviewableItem> {
    let record = record.as_object()?;
    let korean = korean_text(record).to_string();
    let blocks = block_tokens(record);

    // Nothing to prompt with and nothing to arrange: not reviewable.
    if korean.is_empty() && blocks.is_empty() {
        return None;
    }

    Some(ReviewableItem {
        // Positional within the source array, so ids stay stable across
        // reloads as long as the content ordering does not change.
        id: format!("{}_{}", source_type.id_prefix(), index),
        source_type,
        korean,
        english: english_text(record).to_string(),
        romanization: romanization(record).to_string(),
        emoji: emoji(record).to_string(),
        blocks,
        extra: record.clone(),
    })
}
