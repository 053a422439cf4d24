//! # Rider Match
//!
//! Fuzzy resolution of free-text rider names with:
//! - Whitespace/hyphen/case normalization
//! - Sequence-ratio similarity with first/last name transposition handling
//! - Soundex-style phonetic boost for spelling variants
//! - First/last token fallback for multi-word queries
//! - Stable ranking and deduplication by rider id
//!
//! Candidate retrieval is pluggable through [`CandidateSource`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rider_match::{NameMatcher, RawCandidate, StaticSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let roster = StaticSource::new(vec![RawCandidate::new(16973, "Tadej Pogačar")]);
//!     let matcher = NameMatcher::new(Arc::new(roster));
//!
//!     for rider in matcher.search("pogachar").await.matches() {
//!         println!("{} - {}", rider.id, rider.name);
//!     }
//! }
//! ```

pub mod config;
pub mod core;
pub mod decompose;
pub mod engine;
pub mod error;
pub mod providers;
pub mod ranking;
pub mod scoring;

// Re-export primary types
pub use config::MatchConfig;
pub use crate::core::{MatchPhase, MatchResult, RawCandidate, SearchOutcome};
pub use engine::{NameMatcher, NameMatcherBuilder};
pub use error::{MatchError, Result};
pub use providers::{CandidateSource, StaticSource};
pub use ranking::{FuzzyNameScorer, ScoredCandidate, Scorer};
pub use scoring::{normalize, phonetic_code, similarity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
