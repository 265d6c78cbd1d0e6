// Copyright (c) 2025 Word Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! This module provides a character trie for autocomplete and spelling
//! suggestions. Words are lowercased on the way in and on the way out, so
//! lookups are case-insensitive by construction.
//!
//! Completions are enumerated depth-first from the node matching the queried
//! prefix. Children are visited in the order they were first created, which
//! makes the result order reproducible for a given sequence of insertions.
//! A word is reported where it ends, so "car" is still completed after
//! "cart" has extended its path.

mod loader;
mod node;

pub use loader::{DictionaryLoader, DictionaryResult};
pub use node::TrieNode;

/// Placeholder symbol held by the root node. Never read as a real character.
const ROOT_SYMBOL: char = '_';

/// Word Trie indexes words by their characters and answers prefix queries.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * Structural sharing of common prefixes
/// * Deterministic completion order following insertion order
/// * Stack-based traversal, so long words cannot overflow the call stack
///
/// The node where a word ends is marked terminal. It is also a leaf exactly
/// when the word is not a prefix of any other inserted word.
#[derive(Debug, Clone)]
pub struct WordTrie {
    /// Sentinel root; words start at its children
    root: TrieNode<char>,
}

impl WordTrie {
    /// Creates a new empty `WordTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(ROOT_SYMBOL),
        }
    }

    /// Inserts a word into the trie.
    ///
    /// The word is lowercased, then walked character by character from the
    /// root, reusing existing children and creating missing ones, and the
    /// last node is marked as a word end. Inserting the same word twice
    /// leaves the trie unchanged. An empty word is a no-op.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    pub fn add<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        let normalized = normalize(word.as_ref());
        if normalized.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for c in normalized.chars() {
            current = current.add_unique_child(c);
        }
        current.mark_terminal();
    }

    /// Finds the node reached by following `word` from the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The prefix to follow. Matched case-insensitively.
    ///
    /// # Returns
    ///
    /// * `Some(&TrieNode)` - The node for the last character of `word`, or
    ///   the root itself when `word` is empty.
    /// * `None` - If some character of `word` has no matching child.
    pub fn find_node_by_prefix<W>(&self, word: W) -> Option<&TrieNode<char>>
    where
        W: AsRef<str>,
    {
        let normalized = normalize(word.as_ref());

        let mut current = &self.root;
        for c in normalized.chars() {
            current = current.find_child_by(&c)?;
        }
        Some(current)
    }

    /// Returns every inserted word that starts with `word`.
    ///
    /// Each completion is `word` exactly as passed in, original casing kept,
    /// followed by the lowercased characters on the path from the prefix
    /// node down to a word end or leaf. When the prefix is itself a word it
    /// comes first, unchanged; when its node is a leaf it is the only
    /// completion.
    ///
    /// # Arguments
    ///
    /// * `word` - The prefix to complete.
    ///
    /// # Returns
    ///
    /// The completions in depth-first, insertion order. Empty if the prefix
    /// was never inserted or the trie holds no words.
    ///
    /// On an empty trie even `""` yields no completions: the root is never
    /// reported as a word.
    pub fn find_completions<W>(&self, word: W) -> Vec<String>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();

        let sub_root = match self.find_node_by_prefix(word) {
            Some(node) => node,
            None => return Vec::new(),
        };

        // The root is a leaf only while nothing has been inserted.
        if self.is_empty() {
            return Vec::new();
        }

        let mut result = Vec::new();
        Self::collect_words(sub_root, word, &mut result);
        result
    }

    /// Depth-first word collection with an explicit stack.
    ///
    /// A node is reported before its children when it ends a word, and
    /// every leaf is reported. Children are pushed in reverse so they pop in
    /// insertion order, which yields the same sequence as a recursive
    /// pre-order walk. Each stack entry records its depth below `sub_root`;
    /// the shared `path` buffer is cut back to that depth before the entry's
    /// symbol is appended.
    fn collect_words(sub_root: &TrieNode<char>, prefix: &str, result: &mut Vec<String>) {
        let mut path: Vec<char> = Vec::new();
        let mut stack: Vec<(&TrieNode<char>, usize)> = vec![(sub_root, 0)];

        while let Some((node, depth)) = stack.pop() {
            if depth > 0 {
                path.truncate(depth - 1);
                path.push(*node.value());
            }

            if node.is_terminal() || node.is_leaf() {
                let mut completion = String::with_capacity(prefix.len() + path.len());
                completion.push_str(prefix);
                completion.extend(path.iter());
                result.push(completion);
            }

            for child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Checks whether any inserted word starts with `word`.
    pub fn contains_prefix<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node_by_prefix(word).is_some()
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns the number of character nodes, the root excluded.
    ///
    /// This walks the whole trie, so it is an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Removes every word, tearing the whole structure down at once.
    pub fn clear(&mut self) {
        self.root.clear_children();
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<str>> Extend<W> for WordTrie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for WordTrie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

/// Simple case fold applied to every word and prefix.
///
/// Each character is lowercased on its own with the Unicode default mapping,
/// so a prefix folds exactly like the start of a longer word. Context rules
/// such as final sigma are not applied, and nothing is locale aware. A
/// character whose lowercase form spans several scalar values contributes
/// all of them as separate symbols.
fn normalize(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}
