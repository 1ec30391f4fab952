//! Shuffling and sampling helpers with injectable randomness.
//!
//! Every randomized operation in the crate goes through an explicit
//! `rand::Rng` so callers (and tests) control the source.

use rand::seq::SliceRandom;
use rand::Rng;

/// A shuffled copy of `items` (Fisher-Yates via `SliceRandom`).
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Up to `n` distinct items drawn at random, in random order.
pub fn pick<T: Clone, R: Rng>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    let n = n.min(out.len());
    let (picked, _) = out.partial_shuffle(rng, n);
    picked.to_vec()
}
