//! Workspace settings document

use serde::{Deserialize, Serialize};

/// Workspace preferences, stored as `data/settings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Citation style for exports (APA, MLA, Chicago)
    pub citation_style: String,

    /// strftime-style date format for display
    pub date_format: String,

    pub auto_save: bool,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            citation_style: "APA".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            auto_save: true,
            notifications: true,
        }
    }
}
