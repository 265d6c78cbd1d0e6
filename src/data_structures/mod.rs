//! Data structures for the Word Trie crate.
//!
//! This module contains the generic trie node, the character word trie built
//! on top of it, and the loader that fills a trie from word lists.

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{DictionaryLoader, DictionaryResult, TrieNode, WordTrie};
