use crate::config::MatchConfig;
use crate::core::{MatchPhase, RawCandidate, SearchOutcome};
use crate::decompose::{probe_tokens, rescore};
use crate::error::{MatchError, Result};
use crate::providers::CandidateSource;
use crate::ranking::{dedup_by_id, rank, FuzzyNameScorer, ScoredCandidate, Scorer};
use std::sync::Arc;
use std::time::Instant;

/// Main name matching orchestrator
pub struct NameMatcher {
    sources: Vec<Arc<dyn CandidateSource>>,
    scorer: Arc<dyn Scorer>,
    config: MatchConfig,
}

/// Builder for [`NameMatcher`]
#[derive(Default)]
pub struct NameMatcherBuilder {
    sources: Vec<Arc<dyn CandidateSource>>,
    scorer: Option<Arc<dyn Scorer>>,
    config: MatchConfig,
}

impl NameMatcherBuilder {
    /// Add a candidate source. Sources are queried in the order added.
    pub fn source(mut self, source: Arc<dyn CandidateSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the default fuzzy scorer
    pub fn scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<NameMatcher> {
        if self.sources.is_empty() {
            return Err(MatchError::Config(
                "at least one candidate source is required".into(),
            ));
        }
        self.config.validate()?;

        let scorer = self
            .scorer
            .unwrap_or_else(|| Arc::new(FuzzyNameScorer::new(self.config.phonetic_boost)));

        Ok(NameMatcher {
            sources: self.sources,
            scorer,
            config: self.config,
        })
    }
}

impl NameMatcher {
    /// Create a matcher over a single source with default configuration
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        let config = MatchConfig::default();
        Self {
            sources: vec![source],
            scorer: Arc::new(FuzzyNameScorer::new(config.phonetic_boost)),
            config,
        }
    }

    pub fn builder() -> NameMatcherBuilder {
        NameMatcherBuilder::default()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Resolve a free-text name against the candidate sources.
    ///
    /// Never fails: source errors count as zero candidates and a query that
    /// matches nothing yields [`SearchOutcome::Empty`].
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let start = Instant::now();

        if query.trim().is_empty() {
            tracing::debug!("Empty query, skipping search");
            return SearchOutcome::Empty;
        }

        let direct = self.direct_pass(query).await;
        if !direct.is_empty() {
            let matches = rank(direct);
            tracing::debug!(
                count = matches.len(),
                latency_ms = start.elapsed().as_secs_f64() * 1000.0,
                "direct matches"
            );
            return SearchOutcome::from_matches(matches, MatchPhase::Direct);
        }

        if !self.config.decompose {
            return SearchOutcome::Empty;
        }

        let (first, last) = probe_tokens(query, self.config.min_token_chars);
        if first.is_none() && last.is_none() {
            return SearchOutcome::Empty;
        }

        tracing::debug!(?first, ?last, "No direct match, probing query tokens");
        let (mut pool, mut from_last) = tokio::join!(
            self.probe(query, first),
            self.probe(query, last)
        );
        pool.append(&mut from_last);

        let matches = rank(pool);
        tracing::debug!(
            count = matches.len(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "decomposed matches"
        );
        SearchOutcome::from_matches(matches, MatchPhase::Decomposed)
    }

    /// Fetch from every source, keeping whatever the healthy ones return
    async fn fetch_candidates(&self, query: &str) -> Vec<RawCandidate> {
        let mut all_candidates = Vec::new();
        for source in &self.sources {
            match source.fetch(query).await {
                Ok(mut candidates) => {
                    tracing::debug!("Source {} returned {} candidates", source.name(), candidates.len());
                    all_candidates.append(&mut candidates);
                }
                Err(e) => {
                    tracing::warn!("Source {} failed: {}", source.name(), e);
                }
            }
        }
        all_candidates
    }

    /// Fetch, score against `query`, apply the threshold and deduplicate
    async fn direct_pass(&self, query: &str) -> Vec<ScoredCandidate> {
        let threshold = self.config.acceptance_threshold;

        let accepted: Vec<ScoredCandidate> = self
            .fetch_candidates(query)
            .await
            .into_iter()
            .filter_map(|candidate| {
                if let Err(e) = candidate.validate() {
                    tracing::warn!("Skipping candidate: {}", e);
                    return None;
                }
                let score = self.scorer.score(query, &candidate.name);
                tracing::trace!(id = candidate.id, name = %candidate.name, score, "scored");
                (score >= threshold).then(|| ScoredCandidate::new(candidate, score))
            })
            .collect();

        dedup_by_id(accepted)
    }

    /// Direct pass on a single token, re-scored against the full query
    async fn probe(&self, query: &str, token: Option<&str>) -> Vec<ScoredCandidate> {
        let Some(token) = token else {
            return Vec::new();
        };
        let found = self.direct_pass(token).await;
        rescore(
            query,
            found,
            self.scorer.as_ref(),
            self.config.decomposition_discount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::StaticSource;

    fn roster() -> Arc<StaticSource> {
        Arc::new(StaticSource::new(vec![
            RawCandidate::new(1, "Mathieu van der Poel"),
            RawCandidate::new(2, "Tadej Pogačar"),
        ]))
    }

    #[test]
    fn test_builder_requires_source() {
        let err = NameMatcher::builder().build().err().unwrap();
        assert!(matches!(err, MatchError::Config(_)));
        assert!(err.to_string().contains("candidate source"));
    }

    #[test]
    fn test_builder_validates_config() {
        let result = NameMatcher::builder()
            .source(roster())
            .config(MatchConfig {
                decomposition_discount: 2.0,
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let matcher = NameMatcher::builder().source(roster()).build().unwrap();
        assert_eq!(matcher.scorer_name(), "fuzzy-soundex");
        assert_eq!(matcher.config(), &MatchConfig::default());
    }

    #[tokio::test]
    async fn test_blank_query_is_empty() {
        let matcher = NameMatcher::new(roster());
        assert!(matcher.search("").await.is_empty());
        assert!(matcher.search(" \t ").await.is_empty());
    }

    #[tokio::test]
    async fn test_direct_match() {
        let matcher = NameMatcher::new(roster());
        let outcome = matcher.search("mathieu van der poel").await;
        assert_eq!(outcome.phase(), Some(MatchPhase::Direct));
        assert_eq!(outcome.matches()[0].id, 1);
    }

    #[tokio::test]
    async fn test_malformed_candidates_skipped() {
        let source = Arc::new(StaticSource::new(vec![
            RawCandidate::new(9, ""),
            RawCandidate::new(2, "Tadej Pogačar"),
        ]));
        let matcher = NameMatcher::new(source);
        let outcome = matcher.search("tadej pogacar").await;
        let ids: Vec<u64> = outcome.matches().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
