use thiserror::Error;

/// Main error type for the matcher
#[derive(Error, Debug)]
pub enum MatchError {
    /// A candidate source failed to produce candidates
    #[error("Candidate source '{source_name}' error: {message}")]
    Source { source_name: String, message: String },

    /// A candidate record without a usable name
    #[error("Malformed candidate {id}: {reason}")]
    MalformedCandidate { id: u64, reason: String },

    /// Invalid matcher configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File read errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    /// Build a source failure for the named collaborator
    pub fn source_failure(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        MatchError::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        let err = MatchError::source_failure("firstcycling", "connection reset");
        assert_eq!(
            err.to_string(),
            "Candidate source 'firstcycling' error: connection reset"
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = MatchError::MalformedCandidate {
            id: 42,
            reason: "empty name".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed candidate 42: empty name");
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: MatchError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MatchError>();
    }
}
