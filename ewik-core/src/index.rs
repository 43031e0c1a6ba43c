//! Compressed trie (radix tree) over page identifiers.
//!
//! The index is built once per generation pass from the ordered list of page
//! identifiers and answers "which pages contain this fragment" queries for
//! the search bar. Chains of single-child nodes are merged into one edge, so
//! a wiki of `n` pages holds at most `2n` nodes.
//!
//! Children keep their insertion order. [`PageIndex::search`] walks them in
//! that order and reports matches last-discovered-first, which is the order
//! the generated script shows results in.

use std::fmt;

/// A node in the radix tree.
///
/// `label` is the text the incoming edge contributes to the path. It is only
/// empty for the root. Children are keyed by the first character of their
/// label; at most one child exists per character.
#[derive(Debug, Clone, Default)]
struct Node {
    label: String,
    children: Vec<Node>,
    is_word: bool,
}

impl Node {
    fn leaf(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
            is_word: true,
        }
    }

    fn child_index(&self, first: char) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.label.starts_with(first))
    }

    /// Insert `word` relative to this node; the path up to here is already
    /// consumed.
    fn insert(&mut self, word: &str) {
        let Some(first) = word.chars().next() else {
            self.is_word = true;
            return;
        };

        let Some(idx) = self.child_index(first) else {
            self.children.push(Node::leaf(word));
            return;
        };

        let child = &mut self.children[idx];
        let common = common_prefix_len(&child.label, word);

        if common < child.label.len() {
            // Split: `child` keeps the shared prefix and adopts a new node
            // carrying the remainder of its old label, children and word flag.
            let remainder = child.label.split_off(common);
            let lower = Node {
                label: remainder,
                children: std::mem::take(&mut child.children),
                is_word: std::mem::replace(&mut child.is_word, false),
            };
            child.children.push(lower);
        }

        // Either marks `child` as a word (nothing left) or descends/attaches
        // a leaf for the rest.
        child.insert(&word[common..]);
    }

    fn collect(&self, query: &str, path: &mut String, matches: &mut Vec<String>) {
        let mark = path.len();
        path.push_str(&self.label);

        if self.is_word && path.contains(query) {
            matches.push(path.clone());
        }
        for child in &self.children {
            child.collect(query, path, matches);
        }

        path.truncate(mark);
    }

    fn word_count(&self) -> usize {
        usize::from(self.is_word) + self.children.iter().map(Node::word_count).sum::<usize>()
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{} {}{}",
            "-".repeat(depth),
            self.label,
            if self.is_word { " (leaf)" } else { "" }
        )?;
        for child in &self.children {
            child.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Byte length of the longest common prefix of `a` and `b`, always on a
/// character boundary of both strings.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Substring search index over page identifiers.
///
/// # Examples
///
/// ```
/// use ewik_core::PageIndex;
///
/// let index = PageIndex::from_pages(["andrew", "andrea", "al"]);
/// assert_eq!(index.search("an"), vec!["andrea", "andrew"]);
/// assert_eq!(index.search("al"), vec!["al"]);
/// assert!(index.search("z").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    root: Node,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index by inserting every page in sequence order.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pages.into_iter().collect()
    }

    /// Add `word` to the index. Inserting an existing word is a no-op and
    /// inserting `""` marks the root itself as a word.
    pub fn insert(&mut self, word: &str) {
        self.root.insert(word);
    }

    /// Every indexed identifier containing `query` as a contiguous substring.
    ///
    /// Results come back in reverse discovery order of a depth-first walk
    /// over children in insertion order. An empty query matches everything;
    /// callers that want "no results until the user types" must check for
    /// that themselves.
    pub fn search(&self, query: &str) -> Vec<String> {
        let mut matches = Vec::new();
        let mut path = String::new();
        self.root.collect(query, &mut path, &mut matches);
        matches.reverse();
        matches
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        let mut rest = word;
        loop {
            let Some(first) = rest.chars().next() else {
                return node.is_word;
            };
            let Some(idx) = node.child_index(first) else {
                return false;
            };
            let child = &node.children[idx];
            match rest.strip_prefix(child.label.as_str()) {
                Some(tail) => {
                    node = child;
                    rest = tail;
                }
                None => return false,
            }
        }
    }

    /// Number of distinct identifiers stored.
    pub fn len(&self) -> usize {
        self.root.word_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for PageIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PageIndex::new();
        index.extend(iter);
        index
    }
}

impl<S: AsRef<str>> Extend<S> for PageIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for page in iter {
            self.insert(page.as_ref());
        }
    }
}

/// Debug dump: one line per edge, dashes proportional to depth, word nodes
/// tagged `(leaf)`.
impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.root.children {
            child.fmt_tree(f, 1)?;
        }
        Ok(())
    }
}
