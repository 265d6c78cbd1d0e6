//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::dictionary::DictionaryError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, TracingErrorReporter,
    WordTrieError,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = WordTrieError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that a failed load reported with its command keeps both in the message.
#[test]
fn test_error_context_names_failed_command() {
    let error: WordTrieError = ConfigError::FileNotFound(PathBuf::from("missing.toml")).into();
    let context =
        ErrorContext::new(error, "word_trie").with_details(format!("command: {}", "Validate"));

    let display_string = context.to_string();
    assert!(display_string.starts_with("Error in word_trie: "));
    assert!(display_string.contains("missing.toml"));
    assert!(display_string.ends_with("\nDetails: command: Validate"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = WordTrieError::Io(io_error);
    assert!(error.to_string().contains("file not found"));

    let error: WordTrieError = ConfigError::ValidationError("bad level".to_string()).into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );

    let error: WordTrieError = DictionaryError::FileNotFound(PathBuf::from("words.txt")).into();
    assert_eq!(
        error.to_string(),
        "Dictionary error: Word list not found: words.txt"
    );
}

/// Test the line number appears in read errors.
#[test]
fn test_dictionary_read_error_display() {
    let error = DictionaryError::FileRead {
        path: PathBuf::from("en.txt"),
        line: 42,
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
    };
    assert_eq!(error.to_string(), "Failed to read en.txt at line 42: bad utf-8");
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    let error = WordTrieError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = WordTrieError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}
