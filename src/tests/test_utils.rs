//! Test utilities and fixtures for the Word Trie crate.
//!
//! This module provides reusable strategies for property-based testing and a
//! fixture for tests that need files or environment variables.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

use crate::data_structures::WordTrie;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum number of words in a generated word list.
const MAX_WORD_COUNT: usize = 40;

/// Generate a strategy for short words over a small alphabet.
///
/// The alphabet is kept small so generated words share prefixes often.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[a-dA-D]{{1,{MAX_WORD_LENGTH}}}"))
        .expect("valid word regex")
        .boxed()
}

/// Generate a strategy for lists of words.
pub fn word_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 1..MAX_WORD_COUNT).boxed()
}

/// Build a trie holding `words`, inserted in order.
pub fn trie_from(words: &[String]) -> WordTrie {
    words.iter().collect()
}

/// Test fixture for tests requiring files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
