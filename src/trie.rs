use std::collections::HashMap;
use std::fmt;

use log::info;

use crate::fold_case;

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    // Set only on terminal nodes, holds the full lowercase word.
    word: Option<String>,
}

// A chain is as deep as its longest word, so children are freed from a work
// list instead of by nested drops.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Prefix tree over a lowercase vocabulary, used for completions.
///
/// Grows monotonically: words can be added but never removed. Traversal and
/// teardown are iterative, so word length is bounded only by memory.
#[derive(Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex").field("len", &self.len).finish()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        index.insert_all(words);
        info!("prefix index built with {} words", index.len);
        index
    }

    /// Inserts the lowercased `word`. Inserting the same word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let word = fold_case(word);
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.word.is_none() {
            node.word = Some(word);
            self.len += 1;
        }
    }

    /// Inserts every entry that is not blank after trimming.
    pub fn insert_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if !word.trim().is_empty() {
                self.insert(word);
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(&fold_case(word))
            .is_some_and(|node| node.word.is_some())
    }

    /// Up to `limit` words starting with `prefix`, in ascending lexicographic
    /// order. Empty if no stored word has this prefix.
    pub fn get_prefix_matches(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut matches = Vec::new();
        if limit == 0 {
            return matches;
        }
        if let Some(node) = self.find(&fold_case(prefix)) {
            collect_words(node, limit, &mut matches);
        }
        matches
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

/// Depth-first walk emitting a node's own word before its children, children
/// in ascending char order. Stops once `out` holds `limit` words.
fn collect_words(start: &TrieNode, limit: usize, out: &mut Vec<String>) {
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if let Some(word) = &node.word {
            out.push(word.clone());
        }
        if out.len() >= limit {
            return;
        }

        let mut children: Vec<(&char, &TrieNode)> = node.children.iter().collect();
        // popped in ascending order
        children.sort_unstable_by(|a, b| b.0.cmp(a.0));
        stack.extend(children.into_iter().map(|(_, child)| child));
    }
}
