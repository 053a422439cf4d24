use async_trait::async_trait;
use std::path::Path;

use crate::core::RawCandidate;
use crate::error::Result;
use crate::providers::CandidateSource;

/// Fixed in-memory roster returned for every query
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    candidates: Vec<RawCandidate>,
}

impl StaticSource {
    pub fn new(candidates: Vec<RawCandidate>) -> Self {
        Self { candidates }
    }

    /// Parse a JSON array of candidates
    pub fn from_json(json: &str) -> Result<Self> {
        let candidates: Vec<RawCandidate> = serde_json::from_str(json)?;
        Ok(Self::new(candidates))
    }

    /// Load a JSON array of candidates from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[async_trait]
impl CandidateSource for StaticSource {
    async fn fetch(&self, _query: &str) -> Result<Vec<RawCandidate>> {
        Ok(self.candidates.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    const ROSTER: &str = r#"[
        {"id": 16973, "name": "Tadej Pogačar", "nationality": "si", "team": "UAE Team Emirates"},
        {"id": 8, "name": "Mathieu van der Poel"}
    ]"#;

    #[test]
    fn test_from_json() {
        let source = StaticSource::from_json(ROSTER).unwrap();
        assert_eq!(source.len(), 2);
        assert!(!source.is_empty());
    }

    #[test]
    fn test_null_name_keeps_roster() {
        let source =
            StaticSource::from_json(r#"[{"id": 1, "name": null}, {"id": 2, "name": "Tadej Pogačar"}]"#)
                .unwrap();
        assert_eq!(source.len(), 2);

        let fetched = tokio_test::block_on(source.fetch("pogacar")).unwrap();
        assert!(fetched[0].validate().is_err());
        assert!(fetched[1].validate().is_ok());
    }

    #[test]
    fn test_invalid_json() {
        let err = StaticSource::from_json("{not json").unwrap_err();
        assert!(matches!(err, MatchError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = StaticSource::from_json_file("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
    }

    #[test]
    fn test_fetch_ignores_query() {
        let source = StaticSource::from_json(ROSTER).unwrap();
        let fetched = tokio_test::block_on(source.fetch("anything")).unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0].team.as_deref(), Some("UAE Team Emirates"));
        assert_eq!(source.name(), "static");
    }
}
