//! Dictionary error module.
//!
//! This module defines error types that may occur while loading word lists
//! into a trie.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading word lists.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when a word list file does not exist.
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when a word list file exists but cannot be opened.
    #[error("Failed to open word list {path}: {source}")]
    Open {
        /// Path of the word list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when a line of an in-memory source cannot be read.
    #[error("Failed to read word list line {line}: {source}")]
    Read {
        /// One-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when a line of a word list file cannot be read.
    #[error("Failed to read {path} at line {line}: {source}")]
    FileRead {
        /// Path of the word list
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
