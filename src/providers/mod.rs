pub mod memory;

use async_trait::async_trait;
use crate::core::RawCandidate;
use crate::error::Result;

pub use memory::StaticSource;

/// Trait for rider candidate sources (search pages, local rosters, etc.)
///
/// Implementations own their retry/timeout policy; the matcher treats any
/// error as "no candidates".
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetch raw candidates for a query string
    async fn fetch(&self, query: &str) -> Result<Vec<RawCandidate>>;

    /// Get source name
    fn name(&self) -> &str;
}
