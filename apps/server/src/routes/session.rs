//! Session selection endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{SessionQuery, SessionResponse, DEFAULT_SESSION_SIZE};
use crate::AppState;

/// GET /api/session
///
/// Returns a priority-ordered practice session drawn from the requested
/// pool. A pool smaller than `count` yields a shorter session; an empty
/// tier yields an empty one.
pub async fn session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionResponse>> {
    let bundle = super::bundle_for(&state, &query.student)?;
    let pool = query.pool.items(bundle);
    let count = query.count.unwrap_or(DEFAULT_SESSION_SIZE);

    let items = state
        .engine
        .select_session(&query.student, pool, count, &mut rand::thread_rng());

    Ok(Json(SessionResponse {
        student: query.student,
        items,
    }))
}
