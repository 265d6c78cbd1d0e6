//! Dictionary configuration module.
//!
//! This module defines where word lists are read from and how their lines
//! are interpreted.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list files loaded in order before answering queries
    pub paths: Vec<PathBuf>,

    /// Lines starting with this prefix are ignored (empty disables comments)
    pub comment_prefix: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            comment_prefix: "#".to_string(),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(
                "dictionary paths must not be empty".to_string(),
            ));
        }

        // Words are trimmed before the prefix check, so whitespace could never match.
        if self.comment_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "comment_prefix must not contain whitespace: {:?}",
                self.comment_prefix
            )));
        }

        Ok(())
    }
}
