//! Roster endpoint.

use axum::{extract::State, Json};

use crate::models::StudentsResponse;
use crate::AppState;

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> Json<StudentsResponse> {
    Json(StudentsResponse {
        students: state.library.students().to_vec(),
    })
}
