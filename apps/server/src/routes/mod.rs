//! API route handlers.

pub mod drills;
pub mod progress;
pub mod review;
pub mod session;
pub mod stats;
pub mod students;

use review_core::ItemBundle;

use crate::error::{ApiError, Result};
use crate::AppState;

/// Resolve a student's normalized content bundle, or 404.
fn bundle_for<'a>(state: &'a AppState, student: &str) -> Result<&'a ItemBundle> {
    state
        .library
        .bundle_for(student)
        .ok_or_else(|| ApiError::NotFound(format!("student {student}")))
}

/// Check that a student exists in the roster, or 404.
fn require_student(state: &AppState, student: &str) -> Result<()> {
    if state.library.student(student).is_none() {
        return Err(ApiError::NotFound(format!("student {student}")));
    }
    Ok(())
}
