//! Threshold filtering and result ordering.

use std::cmp::Ordering;

use crate::types::ScoredCandidate;

/// Keep candidates at or above `min_ratio` and order them best-first.
///
/// Ordering is by match ratio descending, then exact-match flag (true
/// first). The sort is stable, so candidates tying on both keys keep their
/// request order; equal-score output must not reshuffle between calls.
pub fn rank(mut scored: Vec<ScoredCandidate>, min_ratio: f64) -> Vec<ScoredCandidate> {
    scored.retain(|entry| entry.match_ratio >= min_ratio);
    scored.sort_by(|a, b| {
        b.match_ratio
            .partial_cmp(&a.match_ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.exact_match.cmp(&a.exact_match))
    });
    scored
}
