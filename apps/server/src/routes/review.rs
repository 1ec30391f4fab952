//! Answer recording endpoint.

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{ReviewRequest, ReviewResponse};
use crate::AppState;

/// POST /api/review
///
/// Records one answer outcome and persists the student's history before
/// responding; clients may treat a 200 as durable.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>> {
    super::require_student(&state, &payload.student)?;
    if payload.item_id.is_empty() {
        return Err(ApiError::BadRequest("item_id must not be empty".to_string()));
    }

    let record = state
        .engine
        .record_answer(&payload.student, &payload.item_id, payload.correct)?;

    Ok(Json(ReviewResponse {
        item_id: payload.item_id,
        record,
    }))
}
