//! Researcher profile document

use serde::{Deserialize, Serialize};

/// One education entry on the profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// The researcher's profile, stored as `data/profile.json`.
///
/// Free-form document: every field defaults so a missing or partial file
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub institution: String,
    pub research_interests: Vec<String>,
    pub expertise: Vec<String>,
    pub education: Vec<Education>,
    pub publications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_loads_with_defaults() {
        let profile: Profile =
            serde_json::from_str(r#"{"name": "Ada Lovelace", "expertise": ["analysis"]}"#).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.expertise, vec!["analysis"]);
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let profile = Profile {
            name: "Ada".to_string(),
            education: vec![Education {
                institution: "London".to_string(),
                degree: "Mathematics".to_string(),
                year: "1835".to_string(),
            }],
            ..Profile::default()
        };

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
