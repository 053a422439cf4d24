use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Sources sometimes send `"name": null`; decode it as empty so `validate` can skip the record
fn deserialize_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A rider record as returned by a candidate source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCandidate {
    /// Identifier assigned by the source
    pub id: u64,

    /// Display name
    #[serde(default, deserialize_with = "deserialize_name")]
    pub name: String,

    /// Nationality code (e.g. "si", "nl")
    #[serde(default)]
    pub nationality: Option<String>,

    /// Current team
    #[serde(default)]
    pub team: Option<String>,
}

impl RawCandidate {
    /// Create a new candidate with required fields
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            nationality: None,
            team: None,
        }
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Reject records that cannot be scored
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::MalformedCandidate {
                id: self.id,
                reason: "empty name".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let rider = RawCandidate::new(16973, "Tadej Pogačar")
            .with_nationality("si")
            .with_team("UAE Team Emirates");
        assert_eq!(rider.id, 16973);
        assert_eq!(rider.name, "Tadej Pogačar");
        assert_eq!(rider.nationality.as_deref(), Some("si"));
        assert_eq!(rider.team.as_deref(), Some("UAE Team Emirates"));
    }

    #[test]
    fn test_validate() {
        assert!(RawCandidate::new(1, "Wout van Aert").validate().is_ok());
        assert!(RawCandidate::new(2, "").validate().is_err());

        let err = RawCandidate::new(3, "  \t ").validate().unwrap_err();
        assert!(matches!(err, MatchError::MalformedCandidate { id: 3, .. }));
    }

    #[test]
    fn test_deserialize_optional_fields() {
        let rider: RawCandidate = serde_json::from_str(r#"{"id": 7, "name": "Remco Evenepoel"}"#).unwrap();
        assert_eq!(rider.id, 7);
        assert!(rider.nationality.is_none());
        assert!(rider.team.is_none());
    }

    #[test]
    fn test_deserialize_null_name() {
        let rider: RawCandidate = serde_json::from_str(r#"{"id": 4, "name": null}"#).unwrap();
        assert_eq!(rider.name, "");
        assert!(matches!(
            rider.validate(),
            Err(MatchError::MalformedCandidate { id: 4, .. })
        ));

        let rider: RawCandidate = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(rider.name, "");
    }

    #[test]
    fn test_deserialize_rejects_wrong_name_type() {
        assert!(serde_json::from_str::<RawCandidate>(r#"{"id": 6, "name": 42}"#).is_err());
    }
}
