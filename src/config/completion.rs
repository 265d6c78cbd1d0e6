//! Completion output configuration module.
//!
//! These settings shape what the command line prints. They never change the
//! result of [`WordTrie::find_completions`](crate::data_structures::WordTrie::find_completions).

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_results`.
const MAX_RESULTS_LIMIT: usize = 1_000_000;

/// Output format for printed completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One completion per line
    Plain,
    /// A single JSON array
    Json,
}

/// Completion output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Maximum number of completions printed (0 for unlimited)
    pub max_results: usize,

    /// How completions are printed
    pub output: OutputFormat,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_results: 0,
            output: OutputFormat::Plain,
        }
    }
}

impl CompletionConfig {
    /// Truncates `completions` to `max_results` when a limit is set.
    pub fn apply_limit(&self, mut completions: Vec<String>) -> Vec<String> {
        if self.max_results > 0 {
            completions.truncate(self.max_results);
        }
        completions
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "completion.max_results".to_string(),
                message: format!("must be at most {MAX_RESULTS_LIMIT}"),
            });
        }
        Ok(())
    }
}
