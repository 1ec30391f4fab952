//! Drill builders: multiple-choice options and sentence-block layouts.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::sampling;
use crate::types::ReviewableItem;

/// Options shown per multiple-choice question, correct answer included.
pub const QUIZ_OPTIONS: usize = 4;
/// Decoy tiles mixed into a sentence-block layout when the record does not
/// carry its own distractor list.
pub const BLOCK_DISTRACTORS: usize = 2;

/// One multiple-choice question: the prompted item plus its shuffled options.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub item: ReviewableItem,
    pub options: Vec<ReviewableItem>,
}

/// Build one quiz question for `correct`.
///
/// Distractors prefer the item's own category and top up from the full pool,
/// excluding anything that shares the correct item's id or Korean text.
/// Small pools produce fewer than four options rather than failing.
pub fn quiz_question<R: Rng>(
    correct: &ReviewableItem,
    category_pool: &[ReviewableItem],
    full_pool: &[ReviewableItem],
    rng: &mut R,
) -> QuizQuestion {
    let wanted = QUIZ_OPTIONS - 1;
    let mut distractors = pick_distractors(correct, category_pool, &[], wanted, rng);
    if distractors.len() < wanted {
        let chosen: Vec<&str> = distractors.iter().map(|d| d.id.as_str()).collect();
        let more = pick_distractors(correct, full_pool, &chosen, wanted - distractors.len(), rng);
        distractors.extend(more);
    }

    let mut options = distractors;
    options.push(correct.clone());
    QuizQuestion {
        item: correct.clone(),
        options: sampling::shuffled(&options, rng),
    }
}

fn pick_distractors<R: Rng>(
    correct: &ReviewableItem,
    pool: &[ReviewableItem],
    exclude_ids: &[&str],
    n: usize,
    rng: &mut R,
) -> Vec<ReviewableItem> {
    let candidates: Vec<ReviewableItem> = pool
        .iter()
        .filter(|item| {
            item.id != correct.id
                && item.korean != correct.korean
                && !exclude_ids.contains(&item.id.as_str())
        })
        .cloned()
        .collect();
    sampling::pick(&candidates, n, rng)
}

/// One tile of a sentence-arrangement drill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockTile {
    pub text: String,
    pub distractor: bool,
}

/// A sentence-arrangement layout: the expected block order plus the shuffled
/// tiles presented to the learner.
#[derive(Debug, Clone, Serialize)]
pub struct BlockLayout {
    pub sentence: ReviewableItem,
    pub answer: Vec<String>,
    pub tiles: Vec<BlockTile>,
}

/// Build the block layout for one sentence.
///
/// Decoy tiles come from the record's own `distractors` array when present,
/// otherwise from random blocks of other sentences. Sentences without a
/// `blocks` segmentation fall back to whitespace-splitting the Korean text.
pub fn block_layout<R: Rng>(
    sentence: &ReviewableItem,
    others: &[ReviewableItem],
    rng: &mut R,
) -> BlockLayout {
    let answer = sentence_blocks(sentence);

    let distractors = match explicit_distractors(sentence) {
        Some(list) => list,
        None => sampled_distractors(&answer, sentence, others, rng),
    };

    let mut tiles: Vec<BlockTile> = answer
        .iter()
        .map(|text| BlockTile {
            text: text.clone(),
            distractor: false,
        })
        .collect();
    tiles.extend(distractors.into_iter().map(|text| BlockTile {
        text,
        distractor: true,
    }));

    BlockLayout {
        sentence: sentence.clone(),
        answer,
        tiles: sampling::shuffled(&tiles, rng),
    }
}

fn sentence_blocks(sentence: &ReviewableItem) -> Vec<String> {
    if !sentence.blocks.is_empty() {
        sentence.blocks.clone()
    } else {
        sentence
            .korean
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

fn explicit_distractors(sentence: &ReviewableItem) -> Option<Vec<String>> {
    let list = sentence.extra.get("distractors")?.as_array()?;
    if list.is_empty() {
        return None;
    }
    Some(
        list.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

/// One random block apiece from a few other sentences, skipping anything
/// already in the answer.
fn sampled_distractors<R: Rng>(
    answer: &[String],
    sentence: &ReviewableItem,
    others: &[ReviewableItem],
    rng: &mut R,
) -> Vec<String> {
    let mut distractors = Vec::new();
    for other in sampling::shuffled(others, rng) {
        if distractors.len() >= BLOCK_DISTRACTORS {
            break;
        }
        if other.id == sentence.id {
            continue;
        }
        let blocks = sentence_blocks(&other);
        if let Some(block) = blocks.choose(rng) {
            if !answer.contains(block) && !distractors.contains(block) {
                distractors.push(block.clone());
            }
        }
    }
    distractors
}
