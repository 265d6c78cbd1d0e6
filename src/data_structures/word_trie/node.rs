// Copyright (c) 2025 Word Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! `TrieNode` is a labelled multi-way tree node. It is generic over any
//! symbol type that can be compared for equality, so the same container
//! backs character tries, byte tries or token tries.

/// A node in a trie.
///
/// Each node carries the symbol on the edge leading into it and owns its
/// children exclusively. Children keep the order in which they were first
/// added; no sorting is applied.
///
/// A node may be marked terminal when a complete sequence ends on it. Leaf
/// status is independent of that mark and only depends on the children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode<S> {
    /// Symbol this node represents
    value: S,

    /// Child nodes in insertion order
    children: Vec<TrieNode<S>>,

    /// Whether a complete sequence ends at this node
    terminal: bool,
}

impl<S: PartialEq> TrieNode<S> {
    /// Creates a new childless node holding `value`.
    pub fn new(value: S) -> Self {
        Self {
            value,
            children: Vec::new(),
            terminal: false,
        }
    }

    /// Returns the symbol held by this node.
    pub fn value(&self) -> &S {
        &self.value
    }

    /// Returns the children of this node in insertion order.
    pub fn children(&self) -> &[TrieNode<S>] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if a complete sequence ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Marks this node as the end of a complete sequence.
    pub fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    /// Finds the first child whose value equals `val`.
    ///
    /// # Returns
    ///
    /// * `Some(&TrieNode)` - The first matching child in insertion order.
    /// * `None` - If no child holds `val`.
    pub fn find_child_by(&self, val: &S) -> Option<&TrieNode<S>> {
        self.children.iter().find(|child| child.value == *val)
    }

    /// Mutable counterpart of [`TrieNode::find_child_by`].
    pub fn find_child_by_mut(&mut self, val: &S) -> Option<&mut TrieNode<S>> {
        self.children.iter_mut().find(|child| child.value == *val)
    }

    /// Appends an already constructed node to the children.
    ///
    /// No uniqueness check is made: appending a node whose value matches an
    /// existing sibling produces duplicate siblings. Word insertion must go
    /// through [`TrieNode::add_unique_child`] instead.
    pub fn add_child_node(&mut self, node: TrieNode<S>) {
        self.children.push(node);
    }

    /// Creates a new child holding `val`, appends it and returns it.
    ///
    /// A new node is always created, even if a child with the same value
    /// already exists.
    pub fn add_child(&mut self, val: S) -> &mut TrieNode<S> {
        let index = self.children.len();
        self.add_child_node(TrieNode::new(val));
        &mut self.children[index]
    }

    /// Returns the child holding `val`, creating it first if none exists.
    ///
    /// Calling this repeatedly with the same value never mutates the node
    /// after the first call, so sibling values stay unique.
    pub fn add_unique_child(&mut self, val: S) -> &mut TrieNode<S> {
        match self.children.iter().position(|child| child.value == val) {
            Some(index) => &mut self.children[index],
            None => self.add_child(val),
        }
    }

    /// Counts the nodes below this one, excluding itself.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TrieNode<S>> = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.iter());
        }
        count
    }

    /// Drops every child of this node.
    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
    }
}

// Unlinks descendants one at a time so dropping a deep chain
// does not recurse once per level.
impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
