//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// MRT configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credential for the chat-completion service
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL
    pub chat_url: Option<String>,

    /// Chat-completion model identifier
    pub chat_model: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/mrt/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(key) = std::env::var("MRT_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("MRT_CHAT_URL") {
            config.chat_url = Some(url);
        }
        if let Ok(model) = std::env::var("MRT_CHAT_MODEL") {
            config.chat_model = Some(model);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mrt")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.chat_url.is_some() {
            self.chat_url = other.chat_url;
        }
        if other.chat_model.is_some() {
            self.chat_model = other.chat_model;
        }
    }
}
