use serde::{Deserialize, Serialize};

use crate::core::RawCandidate;

/// A ranked match returned to the caller.
///
/// Carries no score: ordering in the surrounding list is the only ranking signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl From<RawCandidate> for MatchResult {
    fn from(candidate: RawCandidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            nationality: candidate.nationality,
            team: candidate.team,
        }
    }
}

/// Which phase of the pipeline produced the matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    /// The full query matched directly
    Direct,
    /// Matches were recovered from first/last token sub-queries
    Decomposed,
}

/// Outcome of a search call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchOutcome {
    Matched {
        matches: Vec<MatchResult>,
        phase: MatchPhase,
    },
    Empty,
}

impl SearchOutcome {
    /// Wrap a ranked list, collapsing an empty list to `Empty`
    pub fn from_matches(matches: Vec<MatchResult>, phase: MatchPhase) -> Self {
        if matches.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Matched { matches, phase }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }

    pub fn len(&self) -> usize {
        self.matches().len()
    }

    pub fn phase(&self) -> Option<MatchPhase> {
        match self {
            SearchOutcome::Matched { phase, .. } => Some(*phase),
            SearchOutcome::Empty => None,
        }
    }

    pub fn matches(&self) -> &[MatchResult] {
        match self {
            SearchOutcome::Matched { matches, .. } => matches,
            SearchOutcome::Empty => &[],
        }
    }

    pub fn into_matches(self) -> Vec<MatchResult> {
        match self {
            SearchOutcome::Matched { matches, .. } => matches,
            SearchOutcome::Empty => Vec::new(),
        }
    }
}
