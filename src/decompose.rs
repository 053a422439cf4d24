//! Fallback for multi-word queries that match nothing as a whole.
//!
//! The first and last words are probed as standalone queries. Whatever they
//! find is re-scored against the full query and discounted so that a direct
//! full-name match would always outrank it.

use crate::ranking::{ScoredCandidate, Scorer};

/// First and last words of the query worth probing on their own.
///
/// Both are `None` for single-word queries. A word shorter than `min_chars`
/// characters is not probed.
pub fn probe_tokens(query: &str, min_chars: usize) -> (Option<&str>, Option<&str>) {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.len() < 2 {
        return (None, None);
    }

    let long_enough = |token: &&str| token.chars().count() >= min_chars;
    let first = tokens.first().copied().filter(long_enough);
    let last = tokens.last().copied().filter(long_enough);
    (first, last)
}

/// Re-score sub-query matches against the full query and apply the discount.
pub fn rescore(
    query: &str,
    found: Vec<ScoredCandidate>,
    scorer: &dyn Scorer,
    discount: f64,
) -> Vec<ScoredCandidate> {
    found
        .into_iter()
        .map(|s| {
            let score = scorer.score(query, &s.candidate.name) * discount;
            ScoredCandidate::new(s.candidate, score)
        })
        .collect()
}
