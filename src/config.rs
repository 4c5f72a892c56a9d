//! Author configuration
//!
//! Stores user preferences in `~/.config/quiz-author/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::DEFAULT_SLOT_KEY;

/// Markup output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupConfig {
    /// Backslash-escape `\` and `"` in attribute values
    #[serde(default)]
    pub escape_attributes: bool,
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorConfig {
    /// Storage slot holding the document
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub markup: MarkupConfig,
}

fn default_storage_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            markup: MarkupConfig::default(),
        }
    }
}

impl AuthorConfig {
    /// Load config from the user config directory, or defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or unreadable files give defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
