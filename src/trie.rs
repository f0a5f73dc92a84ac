// Copyright (C) 2020-2026 Andy Kurnia.

// Compressed prefix tree. Every node owns its children, which are kept sorted
// by the first letter of their labels. Siblings never share a first letter, so
// that letter alone locates a child.

use super::error;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrieNode {
    #[serde(with = "label_serde")]
    label: Box<[char]>,
    level: usize,
    #[serde(rename = "isTerminal")]
    is_terminal: bool,
    children: Vec<TrieNode>,
}

mod label_serde {
    use serde::Deserialize;

    pub fn serialize<S: serde::Serializer>(
        label: &[char],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&label.iter().collect::<String>())
    }

    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Box<[char]>, D::Error> {
        Ok(String::deserialize(deserializer)?.chars().collect())
    }
}

#[inline(always)]
fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl TrieNode {
    #[inline(always)]
    fn new_leaf(label: &[char], level: usize) -> Self {
        Self {
            label: label.into(),
            level,
            is_terminal: true,
            children: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn label(&self) -> &[char] {
        &self.label
    }

    // depth in letters at the end of the label.
    #[inline(always)]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    #[inline(always)]
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    #[inline(always)]
    fn find_child(&self, first: char) -> Result<usize, usize> {
        self.children
            .binary_search_by(|child| child.label[0].cmp(&first))
    }

    // keeps the first `at` letters here and pushes the rest, with the flag and
    // children, down into a single child.
    fn split_at(&mut self, at: usize) {
        let tail = TrieNode {
            label: self.label[at..].into(),
            level: self.level,
            is_terminal: self.is_terminal,
            children: std::mem::take(&mut self.children),
        };
        self.label = self.label[..at].into();
        self.level -= tail.label.len();
        self.is_terminal = false;
        self.children.push(tail);
    }

    fn absorb_only_child(&mut self) {
        if let Some(only) = self.children.pop() {
            let mut label = Vec::with_capacity(self.label.len() + only.label.len());
            label.extend_from_slice(&self.label);
            label.extend_from_slice(&only.label);
            self.label = label.into_boxed_slice();
            self.level = only.level;
            self.is_terminal = only.is_terminal;
            self.children = only.children;
        }
    }

    fn insert(&mut self, key: &[char]) -> (bool, &mut TrieNode) {
        if key.is_empty() {
            let added = !self.is_terminal;
            self.is_terminal = true;
            return (added, self);
        }
        let level = self.level;
        match self.find_child(key[0]) {
            Err(ix) => {
                self.children
                    .insert(ix, TrieNode::new_leaf(key, level + key.len()));
                (true, &mut self.children[ix])
            }
            Ok(ix) => {
                let child = &mut self.children[ix];
                let i = common_prefix_len(&child.label, key);
                if i == child.label.len() {
                    // also covers the word ending exactly at this child.
                    child.insert(&key[i..])
                } else if i == key.len() {
                    child.split_at(i);
                    child.is_terminal = true;
                    (true, child)
                } else {
                    child.split_at(i);
                    let leaf_ix = match child.find_child(key[i]) {
                        Ok(ix) | Err(ix) => ix,
                    };
                    child
                        .children
                        .insert(leaf_ix, TrieNode::new_leaf(&key[i..], level + key.len()));
                    (true, &mut child.children[leaf_ix])
                }
            }
        }
    }

    fn remove(&mut self, key: &[char]) -> bool {
        if key.is_empty() {
            let removed = self.is_terminal;
            self.is_terminal = false;
            return removed;
        }
        let Ok(ix) = self.find_child(key[0]) else {
            return false;
        };
        let child = &mut self.children[ix];
        let n = child.label.len();
        if key.len() < n || child.label[..] != key[..n] || !child.remove(&key[n..]) {
            return false;
        }
        if !child.is_terminal {
            match child.children.len() {
                0 => {
                    self.children.remove(ix);
                }
                1 => child.absorb_only_child(),
                _ => {}
            }
        }
        true
    }

    fn find(&self, key: &[char]) -> Option<&TrieNode> {
        if key.is_empty() {
            return Some(self);
        }
        let child = &self.children[self.find_child(key[0]).ok()?];
        let n = child.label.len();
        if key.len() < n || child.label[..] != key[..n] {
            return None;
        }
        child.find(&key[n..])
    }

    // path must already end with this node's label.
    fn collect(&self, path: &mut Vec<char>, out: &mut Vec<String>) {
        if self.is_terminal {
            out.push(path.iter().collect());
        }
        for child in &self.children {
            let len = path.len();
            path.extend_from_slice(&child.label);
            child.collect(path, out);
            path.truncate(len);
        }
    }

    fn collect_matching(
        &self,
        pattern: &[Option<char>],
        path: &mut Vec<char>,
        out: &mut Vec<String>,
    ) {
        let depth = path.len();
        if depth == pattern.len() {
            if self.is_terminal {
                out.push(path.iter().collect());
            }
            return;
        }
        let mut visit = |child: &TrieNode| {
            let end = depth + child.label.len();
            if end > pattern.len()
                || child
                    .label
                    .iter()
                    .zip(&pattern[depth..end])
                    .any(|(l, p)| p.is_some_and(|p| p != *l))
            {
                return;
            }
            path.extend_from_slice(&child.label);
            child.collect_matching(pattern, path, out);
            path.truncate(depth);
        };
        match pattern[depth] {
            Some(c) => {
                if let Ok(ix) = self.find_child(c) {
                    visit(&self.children[ix]);
                }
            }
            None => self.children.iter().for_each(visit),
        }
    }

    fn check(&self, level: usize) -> error::Returns<usize> {
        if self.level != level {
            return_error!(format!(
                "node {:?} has level {}, expected {}",
                self.label.iter().collect::<String>(),
                self.level,
                level
            ));
        }
        let mut num_words = self.is_terminal as usize;
        for (i, child) in self.children.iter().enumerate() {
            if child.label.is_empty() {
                return_error!(format!("empty label below level {}", level));
            }
            if i > 0 && self.children[i - 1].label[0] >= child.label[0] {
                return_error!(format!(
                    "children at level {} are not sorted by first letter",
                    level
                ));
            }
            num_words += child.check(level + child.label.len())?;
        }
        Ok(num_words)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: TrieNode) -> error::Returns<Self> {
        if !root.label.is_empty() {
            return_error!("root label must be empty".into());
        }
        let len = root.check(0)?;
        Ok(Self { root, len })
    }

    #[inline(always)]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    // number of words.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, word: &str) -> (bool, &TrieNode) {
        self.insert_letters(&word.chars().collect::<Vec<_>>())
    }

    pub fn insert_letters(&mut self, word: &[char]) -> (bool, &TrieNode) {
        let (added, node) = self.root.insert(word);
        self.len += added as usize;
        (added, node)
    }

    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self.root.remove(&word.chars().collect::<Vec<_>>());
        self.len -= removed as usize;
        removed
    }

    pub fn contains(&self, word: &str) -> bool {
        self.contains_letters(&word.chars().collect::<Vec<_>>())
    }

    #[inline(always)]
    pub fn contains_letters(&self, word: &[char]) -> bool {
        self.root.find(word).is_some_and(|node| node.is_terminal)
    }

    // every word, in sibling order.
    pub fn search_all(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect(&mut Vec::new(), &mut out);
        out
    }

    // words of exactly pattern.len() letters agreeing on every fixed letter.
    pub fn search(&self, pattern: &[Option<char>]) -> Vec<String> {
        let mut out = Vec::new();
        self.root
            .collect_matching(pattern, &mut Vec::with_capacity(pattern.len()), &mut out);
        out
    }

    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.chars().collect::<Vec<_>>();
        let mut out = Vec::new();
        let mut node = &self.root;
        let mut path = Vec::new();
        let mut key = &prefix[..];
        while !key.is_empty() {
            let Ok(ix) = node.find_child(key[0]) else {
                return out;
            };
            let child = &node.children[ix];
            let i = common_prefix_len(&child.label, key);
            if i < key.len() && i < child.label.len() {
                return out;
            }
            path.extend_from_slice(&child.label);
            key = &key[i.min(key.len())..];
            node = child;
        }
        node.collect(&mut path, &mut out);
        out
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl serde::Serialize for Trie {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Trie {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Trie::from_root(TrieNode::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
