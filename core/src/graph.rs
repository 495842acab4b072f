//! Derivative graph: which words share a lexical root.
//!
//! Nodes live in an arena and refer to each other by index, so the stem
//! back-reference and the derivative forward references never own anything.
//! The word table maps text to the most recently registered node for that
//! text; nodes replaced in the table stay in the arena because older
//! derivatives may still point at them.

use ahash::AHashMap;
use tracing::warn;

use crate::source::DerivativeRecord;

/// A word in the derivative graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    word: String,
    stem: Option<usize>,
    derivatives: Vec<usize>,
}

impl GraphNode {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            stem: None,
            derivatives: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

#[derive(Debug, Clone, Default)]
pub struct DerivativeGraph {
    nodes: Vec<GraphNode>,
    index: AHashMap<String, usize>,
}

impl DerivativeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from stem/derivative-list records.
    pub fn from_records(records: &[DerivativeRecord]) -> Self {
        let mut graph = Self::new();
        for record in records {
            let derivatives = record
                .derivatives
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty());
            graph.add_family(&record.name, derivatives);
        }
        graph
    }

    fn push(&mut self, word: &str) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(GraphNode::new(word));
        self.index.insert(word.to_string(), idx);
        idx
    }

    /// Register `stem` and its derivatives. Every call creates fresh nodes,
    /// so a family never nests more than one level deep.
    pub fn add_family<'a, I>(&mut self, stem: &str, derivatives: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let stem_idx = self.push(stem);
        for derivative in derivatives {
            let idx = self.push(derivative);
            self.nodes[idx].stem = Some(stem_idx);
            let family = &mut self.nodes[stem_idx].derivatives;
            if !family.contains(&idx) {
                family.push(idx);
            }
        }
    }

    /// Point the current node of `word` at the current node of `stem`,
    /// registering either word if needed. Unlike [`add_family`](Self::add_family)
    /// this can build chains of any depth, including cycles.
    pub fn set_stem(&mut self, word: &str, stem: &str) {
        let stem_idx = match self.index.get(stem) {
            Some(&idx) => idx,
            None => self.push(stem),
        };
        let word_idx = match self.index.get(word) {
            Some(&idx) => idx,
            None => self.push(word),
        };
        if let Some(old) = self.nodes[word_idx].stem {
            self.nodes[old].derivatives.retain(|&d| d != word_idx);
        }
        self.nodes[word_idx].stem = Some(stem_idx);
        self.nodes[stem_idx].derivatives.push(word_idx);
    }

    pub fn get(&self, word: &str) -> Option<&GraphNode> {
        self.index.get(word).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The root reached by following stem links from `word`; a word without
    /// a stem is its own root. `None` when the word is not in the graph.
    ///
    /// The walk is bounded by the arena size and gives up on cyclic data.
    pub fn find_root(&self, word: &str) -> Option<&str> {
        let mut idx = *self.index.get(word)?;
        for _ in 0..=self.nodes.len() {
            match self.nodes[idx].stem {
                Some(stem) => idx = stem,
                None => return Some(&self.nodes[idx].word),
            }
        }
        warn!(word = %word, "stem chain does not terminate; treating word as rootless");
        None
    }

    /// The immediate stem of `word`, if it has one.
    pub fn stem_of(&self, word: &str) -> Option<&str> {
        let node = self.get(word)?;
        node.stem.map(|idx| self.nodes[idx].word.as_str())
    }

    /// Words registered as derivatives of `word`.
    pub fn derivatives_of(&self, word: &str) -> Vec<&str> {
        self.get(word)
            .map(|node| {
                node.derivatives
                    .iter()
                    .map(|&idx| self.nodes[idx].word.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
