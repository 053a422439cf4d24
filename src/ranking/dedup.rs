//! Ordering and identifier deduplication of scored candidates.

use std::collections::HashSet;

use crate::core::MatchResult;
use crate::ranking::ScoredCandidate;

/// Sort by score descending and keep the first occurrence of each id.
///
/// The sort is stable, so equal scores keep the order they arrived in and the
/// surviving instance of an id is always its highest-scored one. A NaN score
/// from a custom scorer still gets a fixed place in the total order.
pub fn dedup_by_id(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen = HashSet::with_capacity(scored.len());
    scored.retain(|s| seen.insert(s.candidate.id));
    scored
}

/// Sort, deduplicate and drop scores.
pub fn rank(scored: Vec<ScoredCandidate>) -> Vec<MatchResult> {
    dedup_by_id(scored)
        .into_iter()
        .map(|s| MatchResult::from(s.candidate))
        .collect()
}
