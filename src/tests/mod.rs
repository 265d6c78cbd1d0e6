//! Test modules for the Word Trie crate.
//!
//! This module contains crate-internal testing infrastructure:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the word trie using proptest
//! - Table-driven completion scenarios using test-case
//! - Test fixtures and utilities

pub mod error_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
