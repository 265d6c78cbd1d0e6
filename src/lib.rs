//! Word Trie Library
//!
//! This library provides an in-memory word-prefix trie for autocomplete and
//! spelling suggestions, together with the configuration, error handling and
//! word list loading used by the `word_trie` binary.
//!
//! # Example
//!
//! ```
//! use word_trie_lib::data_structures::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! for word in ["cat", "car", "cart", "dog"] {
//!     trie.add(word);
//! }
//!
//! assert_eq!(trie.find_completions("ca"), vec!["cat", "car", "cart"]);
//! assert!(trie.find_completions("x").is_empty());
//! ```

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Word Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
