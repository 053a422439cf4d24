pub mod dedup;
pub mod fuzzy;

use crate::core::RawCandidate;

pub use dedup::{dedup_by_id, rank};
pub use fuzzy::FuzzyNameScorer;

/// Trait for name similarity implementations
pub trait Scorer: Send + Sync {
    /// Similarity between a query and a candidate name, in [0, 1]
    fn score(&self, query: &str, name: &str) -> f64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Candidate with similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: RawCandidate,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(candidate: RawCandidate, score: f64) -> Self {
        Self { candidate, score }
    }
}
