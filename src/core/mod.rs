pub mod candidate;
pub mod match_result;

pub use candidate::RawCandidate;
pub use match_result::{MatchPhase, MatchResult, SearchOutcome};
