//! Prefix tree over characters.

use std::collections::BTreeMap;

/// One trie node. `BTreeMap` keeps child enumeration deterministic.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) is_end: bool,
}

/// A trie; paths from the root spell inserted words.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
    words: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word without stepping. Returns false if it was present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.is_end {
            false
        } else {
            node.is_end = true;
            self.words += 1;
            true
        }
    }

    /// Whether the trie holds `word` as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n.is_end)
    }

    /// Whether any inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub(crate) fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    pub(crate) fn mark_inserted(&mut self) {
        self.words += 1;
    }
}
