//! Aggregate statistics endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{StatsQuery, StatsResponse};
use crate::AppState;

/// GET /api/stats
///
/// Missing or corrupt history degrades to all-zero stats rather than an
/// error.
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>> {
    super::require_student(&state, &query.student)?;

    let stats = state.engine.stats(&query.student);
    Ok(Json(StatsResponse {
        student: query.student,
        stats,
    }))
}
