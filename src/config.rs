// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine limits and the default language.
//!
//! The defaults are the values the site's UI is built around (8 results,
//! 5 suggestions, 3 fallback suggestions, 2-character autocomplete threshold,
//! 30-character snippet radius). A JSON config file can override any subset.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default UI language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Tunable limits for a [`QueryEngine`](crate::QueryEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Language selected when an engine is created.
    pub default_language: String,
    /// Maximum number of results returned by `search`.
    pub max_results: usize,
    /// Maximum number of suggestions returned by `suggestions`.
    pub max_suggestions: usize,
    /// Number of seed entries shown when no suggestion matches.
    pub fallback_suggestions: usize,
    /// Autocomplete stays silent below this many characters.
    pub autocomplete_min_chars: usize,
    /// Maximum number of autocomplete entries.
    pub max_autocomplete: usize,
    /// Characters of context on each side of a snippet match.
    pub snippet_radius: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            max_results: 8,
            max_suggestions: 5,
            fallback_suggestions: 3,
            autocomplete_min_chars: 2,
            max_autocomplete: 5,
            snippet_radius: 30,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_language.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "defaultLanguage",
                reason: "must not be empty".to_string(),
            });
        }
        if self.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxResults",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.fallback_suggestions > self.max_suggestions {
            return Err(ConfigError::InvalidValue {
                field: "fallbackSuggestions",
                reason: format!(
                    "{} exceeds maxSuggestions {}",
                    self.fallback_suggestions, self.max_suggestions
                ),
            });
        }
        Ok(())
    }
}
