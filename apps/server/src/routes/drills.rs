//! Drill endpoints: multiple-choice quiz, sentence arrangement, conjugation.
//!
//! Each drill schedules its candidate pool through the SRS engine first and
//! only then dresses the selected items up with options, tiles or tenses.

use axum::{
    extract::{Query, State},
    Json,
};
use review_core::types::{ItemBundle, ReviewableItem, SourceType};
use review_core::{conjugation, drills};

use crate::error::Result;
use crate::models::{
    ConjugationResponse, DrillQuery, QuizResponse, SentencesResponse, DEFAULT_SESSION_SIZE,
};
use crate::AppState;

/// GET /api/quiz
///
/// Multiple-choice questions over the combined pool. Distractors prefer
/// the prompted item's own category.
pub async fn quiz(
    State(state): State<AppState>,
    Query(query): Query<DrillQuery>,
) -> Result<Json<QuizResponse>> {
    let bundle = super::bundle_for(&state, &query.student)?;
    let count = query.count.unwrap_or(DEFAULT_SESSION_SIZE);
    let mut rng = rand::thread_rng();

    let selected = state
        .engine
        .select_session(&query.student, &bundle.all, count, &mut rng);

    let questions = selected
        .iter()
        .map(|item| {
            drills::quiz_question(item, category_pool(bundle, item), &bundle.all, &mut rng)
        })
        .collect();

    Ok(Json(QuizResponse {
        student: query.student,
        questions,
    }))
}

/// GET /api/sentences
///
/// Block-arrangement layouts over the sentence pool.
pub async fn sentences(
    State(state): State<AppState>,
    Query(query): Query<DrillQuery>,
) -> Result<Json<SentencesResponse>> {
    let bundle = super::bundle_for(&state, &query.student)?;
    let count = query.count.unwrap_or(DEFAULT_SESSION_SIZE);
    let mut rng = rand::thread_rng();

    let selected = state
        .engine
        .select_session(&query.student, &bundle.sentences, count, &mut rng);

    let layouts = selected
        .iter()
        .map(|sentence| drills::block_layout(sentence, &bundle.sentences, &mut rng))
        .collect();

    Ok(Json(SentencesResponse {
        student: query.student,
        layouts,
    }))
}

/// GET /api/conjugation
///
/// Verb-form questions; each selected verb gets a random tense it has data
/// for, with the compound history id `<verb_id>_<tense>`.
pub async fn conjugation(
    State(state): State<AppState>,
    Query(query): Query<DrillQuery>,
) -> Result<Json<ConjugationResponse>> {
    let bundle = super::bundle_for(&state, &query.student)?;
    let count = query.count.unwrap_or(DEFAULT_SESSION_SIZE);
    let mut rng = rand::thread_rng();

    let selected = state
        .engine
        .select_session(&query.student, &bundle.verbs, count, &mut rng);

    let questions = selected
        .iter()
        .map(|verb| conjugation::question(verb, &bundle.verbs, &mut rng))
        .collect();

    Ok(Json(ConjugationResponse {
        student: query.student,
        questions,
    }))
}

fn category_pool<'a>(bundle: &'a ItemBundle, item: &ReviewableItem) -> &'a [ReviewableItem] {
    match item.source_type {
        SourceType::Vocabulary => &bundle.vocabulary,
        SourceType::Verb => &bundle.verbs,
        SourceType::Adjective => &bundle.adjectives,
        SourceType::Phrase => &bundle.phrases,
        SourceType::Sentence => &bundle.sentences,
    }
}
