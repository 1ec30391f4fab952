//! Core library for the Korean review hub.
//!
//! Provides:
//! - Normalization of the hub's loosely-shaped vocabulary/verb/sentence
//!   records into a uniform reviewable-item model
//! - A streak-based spaced-repetition scheduler and its persistence seam
//! - Sampling utilities and drill builders (multiple-choice options,
//!   sentence-block layouts, verb conjugation questions)
//!
//! Everything here is synchronous and pure apart from the
//! [`store::ProgressStore`] seam; randomness is always injected as a
//! `rand::Rng` so callers and tests control ordering.

pub mod conjugation;
pub mod drills;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod sampling;
pub mod srs;
pub mod store;
pub mod types;

pub use engine::SrsEngine;
pub use error::StoreError;
pub use normalize::normalize;
pub use store::{MemoryStore, ProgressStore};
pub use types::{
    GameProgress, HistoryMap, HistoryRecord, ItemBundle, ReviewableItem, SourceType, SrsStats,
};
