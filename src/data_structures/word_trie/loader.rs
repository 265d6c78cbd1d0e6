// Copyright (c) 2025 Word Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bulk loading of word lists into a [`WordTrie`].
//!
//! Word lists hold one word per line. Surrounding whitespace is trimmed,
//! blank lines are skipped and so are lines starting with the comment prefix.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, info};

use super::WordTrie;
use crate::config::dictionary::DictionaryConfig;
use crate::error::dictionary::DictionaryError;

/// Result type for dictionary loading operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Default prefix marking a comment line in a word list
const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Reads word lists and feeds them into a [`WordTrie`].
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    /// Lines starting with this prefix are ignored. Empty disables comments.
    comment_prefix: String,
}

impl DictionaryLoader {
    /// Creates a loader that treats `#` lines as comments.
    pub fn new() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }

    /// Creates a loader from the dictionary section of the configuration.
    pub fn with_config(config: &DictionaryConfig) -> Self {
        Self {
            comment_prefix: config.comment_prefix.clone(),
        }
    }

    /// Sets the comment prefix. An empty prefix disables comment handling.
    pub fn with_comment_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Adds every word read from `reader` to `trie`.
    ///
    /// # Arguments
    ///
    /// * `trie` - The trie receiving the words.
    /// * `reader` - Source of newline separated words.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words added, duplicates included.
    /// * `Err(DictionaryError)` - If reading a line failed.
    pub fn load_reader<R: BufRead>(&self, trie: &mut WordTrie, reader: R) -> DictionaryResult<usize> {
        let mut loaded = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DictionaryError::Read {
                line: index + 1,
                source,
            })?;

            match self.parse_line(&line) {
                Some(word) => {
                    trie.add(word);
                    loaded += 1;
                }
                None => continue,
            }
        }

        debug!(words = loaded, nodes = trie.node_count(), "Loaded words from reader");
        Ok(loaded)
    }

    /// Adds every word of the file at `path` to `trie`.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words added.
    /// * `Err(DictionaryError)` - If the file is missing or cannot be read.
    pub fn load_file<P: AsRef<Path>>(&self, trie: &mut WordTrie, path: P) -> DictionaryResult<usize> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => DictionaryError::FileNotFound(path.to_path_buf()),
            _ => DictionaryError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let loaded = self
            .load_reader(trie, BufReader::new(file))
            .map_err(|e| match e {
                DictionaryError::Read { line, source } => DictionaryError::FileRead {
                    path: path.to_path_buf(),
                    line,
                    source,
                },
                other => other,
            })?;

        info!(path = %path.display(), words = loaded, "Loaded word list");
        Ok(loaded)
    }

    /// Loads several files in order, stopping at the first failure.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The total number of words added.
    /// * `Err(DictionaryError)` - The first loading error encountered.
    pub fn load_files<I, P>(&self, trie: &mut WordTrie, paths: I) -> DictionaryResult<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut total = 0;
        for path in paths {
            total += self.load_file(trie, path)?;
        }
        Ok(total)
    }

    /// Extracts the word on a line, if any.
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let word = line.trim();
        if word.is_empty() {
            return None;
        }
        if !self.comment_prefix.is_empty() && word.starts_with(self.comment_prefix.as_str()) {
            return None;
        }
        Some(word)
    }
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new()
    }
}
