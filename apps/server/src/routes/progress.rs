//! Per-game session summary endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{ProgressQuery, ProgressResponse, ProgressUpdateRequest};
use crate::AppState;

/// GET /api/progress
pub async fn load(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>> {
    super::require_student(&state, &query.student)?;

    let progress = state.engine.progress(&query.student, &query.game);
    Ok(Json(ProgressResponse {
        student: query.student,
        game: query.game,
        progress,
    }))
}

/// POST /api/progress
///
/// Marks one session as completed: bumps the session counter, folds the
/// session's best streak into the running maximum and stamps `lastPlayed`.
pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<ProgressUpdateRequest>,
) -> Result<Json<ProgressResponse>> {
    super::require_student(&state, &payload.student)?;

    let progress = state
        .engine
        .finish_session(&payload.student, &payload.game, payload.best_streak)?;

    Ok(Json(ProgressResponse {
        student: payload.student,
        game: payload.game,
        progress,
    }))
}
