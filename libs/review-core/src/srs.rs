//! Spaced-repetition priority scheduling.
//!
//! A deliberately small policy: new items always surface first, failed items
//! next, items whose exponential-backoff interval has elapsed next, and
//! well-known items only occasionally via a small randomized score. The
//! review interval is `2^streak` days, keyed purely on the
//! consecutive-correct count.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;

use crate::types::{HistoryMap, HistoryRecord, ReviewableItem, SrsStats};

/// Priority for an item that has never been answered.
pub const PRIORITY_NEW: f64 = 100.0;
/// Priority for an item whose most recent answer was wrong.
pub const PRIORITY_FAILED: f64 = 90.0;
/// Priority for an item due for scheduled review.
pub const PRIORITY_DUE: f64 = 70.0;
/// Streak at which an item counts as mastered.
pub const MASTERY_STREAK: u32 = 4;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Review priority of one item given its history record, or lack of one.
///
/// Not-yet-due items score uniformly in [10, 30) so they still appear
/// occasionally and never in a fixed order.
pub fn priority<R: Rng>(
    record: Option<&HistoryRecord>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> f64 {
    let Some(record) = record else {
        return PRIORITY_NEW;
    };
    let Some(last_seen) = record.last_seen else {
        return PRIORITY_NEW;
    };
    if record.streak == 0 {
        return PRIORITY_FAILED;
    }

    let days_since = (now.timestamp_millis() - last_seen) as f64 / MS_PER_DAY;
    let interval_days = 2f64.powi(record.streak as i32);
    if days_since >= interval_days {
        PRIORITY_DUE
    } else {
        rng.gen_range(10.0..30.0)
    }
}

/// Select up to `count` items from `pool`, highest priority first.
///
/// The sort is stable and descending; equal priorities keep whatever order
/// scoring produced, which callers must not rely on. A pool smaller than
/// `count` is returned whole. Duplicate ids in the pool are dropped, first
/// occurrence wins.
pub fn select_session<R: Rng>(
    history: &HistoryMap,
    pool: &[ReviewableItem],
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ReviewableItem> {
    let mut seen = HashSet::new();
    let mut scored: Vec<(f64, &ReviewableItem)> = pool
        .iter()
        .filter(|item| seen.insert(item.id.as_str()))
        .map(|item| (priority(history.get(&item.id), now, rng), item))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(count)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Apply one answer to a student's history map and return the updated record.
///
/// Creates a zero-valued record on first contact. A correct answer extends
/// the streak; an incorrect answer resets it. Lifetime counters never reset.
pub fn record_answer(
    history: &mut HistoryMap,
    item_id: &str,
    correct: bool,
    now: DateTime<Utc>,
) -> HistoryRecord {
    let record = history.entry(item_id.to_string()).or_default();
    record.last_seen = Some(now.timestamp_millis());
    if correct {
        record.streak += 1;
        record.correct += 1;
    } else {
        record.streak = 0;
        record.incorrect += 1;
    }
    record.clone()
}

/// Aggregate statistics over a student's full history map.
pub fn stats(history: &HistoryMap) -> SrsStats {
    if history.is_empty() {
        return SrsStats::default();
    }

    let mut total_correct: u64 = 0;
    let mut total_incorrect: u64 = 0;
    let mut mastered = 0;
    let mut learning = 0;

    for record in history.values() {
        total_correct += u64::from(record.correct);
        total_incorrect += u64::from(record.incorrect);
        if record.streak >= MASTERY_STREAK {
            mastered += 1;
        } else {
            learning += 1;
        }
    }

    let attempts = total_correct + total_incorrect;
    let accuracy = if attempts > 0 {
        ((total_correct as f64 / attempts as f64) * 100.0).round() as u32
    } else {
        0
    };

    SrsStats {
        total_seen: history.len(),
        mastered,
        learning,
        accuracy,
    }
}
