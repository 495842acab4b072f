//! Lexical tables consulted by the decomposition engine.
//!
//! A [`Dictionary`] is built once from a [`DictionarySource`] and never
//! mutated afterwards, so one instance can be shared by any number of
//! parsers through an `Arc`. [`Dictionary::shared`] offers a process-wide
//! instance initialised exactly once.
//!
//! Word membership is answered by an `fst::Set`; the suffix table keeps the
//! order in which decomposable endings arrived, because suffix search tries
//! them in that order.

use ahash::{AHashMap, AHashSet};
use fst::Set;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::info;

use crate::error::DictionaryError;
use crate::graph::DerivativeGraph;
use crate::morpheme::{MorphNode, MorphemeKind};
use crate::rules::EndingType;
use crate::source::{DictionarySource, EndingRecord, LeftRightRecord};
use crate::suffix::SuffixRule;

const HYPHEN: char = '-';

static SHARED: OnceCell<Arc<Dictionary>> = OnceCell::new();

/// Base form and inflection of an irregular surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflected {
    pub base: String,
    pub inflection: String,
}

pub struct Dictionary {
    words: Set<Vec<u8>>,
    unsplittables: AHashSet<String>,
    strong_suffixes: AHashSet<String>,
    consonant_y: Vec<String>,
    vcc: Vec<String>,
    suffix_table: IndexMap<String, Vec<SuffixRule>>,
    prefixes: Vec<String>,
    affixes: Vec<String>,
    graph: DerivativeGraph,
    inflections: AHashMap<String, Inflected>,
    overrides: AHashMap<String, MorphNode>,
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .field("unsplittables", &self.unsplittables.len())
            .field("suffix_table", &self.suffix_table.len())
            .field("prefixes", &self.prefixes.len())
            .field("graph", &self.graph.len())
            .field("inflections", &self.inflections.len())
            .field("overrides", &self.overrides.len())
            .finish()
    }
}

impl Dictionary {
    /// Build every table from `source`.
    ///
    /// Fails on an unknown ending type code and on a decomposable ending
    /// whose cut rule is missing or malformed.
    pub fn build<S: DictionarySource + ?Sized>(source: &S) -> Result<Self, DictionaryError> {
        let mut splittable = Vec::new();
        let mut unsplittables = AHashSet::new();
        for record in source.words() {
            if record.splittable {
                splittable.push(record.name);
            } else {
                unsplittables.insert(record.name);
            }
        }

        // fst requires sorted, distinct keys
        let mut all_words: Vec<&str> = splittable
            .iter()
            .map(String::as_str)
            .chain(unsplittables.iter().map(String::as_str))
            .collect();
        all_words.sort_unstable();
        all_words.dedup();
        let words = Set::from_iter(all_words)?;

        let mut strong = Vec::new();
        let mut consonant_y = Vec::new();
        let mut vcc = Vec::new();
        let mut suffix_table = IndexMap::new();
        for record in source.endings() {
            match classify(&record)? {
                EndingType::StrongSuffix => strong.push(record.name),
                EndingType::ConsonantY => consonant_y.push(record.name),
                EndingType::VowelConsonantConsonant => vcc.push(record.name),
                EndingType::Decomposable => {
                    let cut_ways =
                        record
                            .cut_ways
                            .as_deref()
                            .ok_or_else(|| DictionaryError::MissingCutRule {
                                ending: record.name.clone(),
                            })?;
                    let rules = SuffixRule::parse_all(cut_ways, record.suffix_text())?;
                    suffix_table.insert(record.name, rules);
                }
            }
        }

        let prefixes: Vec<String> = source.prefixes().into_iter().map(|p| p.name).collect();

        let mut affixes: Vec<String> = suffix_table.keys().cloned().collect();
        affixes.extend(prefixes.iter().cloned());
        affixes.extend(strong.iter().cloned());

        let inflections = source
            .inflected()
            .into_iter()
            .map(|r| {
                let entry = Inflected {
                    base: r.base,
                    inflection: r.inflection,
                };
                (r.name, entry)
            })
            .collect();

        let overrides = source
            .left_rights()
            .iter()
            .map(|r| (r.name.clone(), override_node(r)))
            .collect();

        let dictionary = Self {
            words,
            unsplittables,
            strong_suffixes: strong.into_iter().collect(),
            consonant_y,
            vcc,
            suffix_table,
            prefixes,
            affixes,
            graph: DerivativeGraph::from_records(&source.derivatives()),
            inflections,
            overrides,
        };

        info!(
            words = dictionary.words.len(),
            unsplittables = dictionary.unsplittables.len(),
            suffix_endings = dictionary.suffix_table.len(),
            prefixes = dictionary.prefixes.len(),
            graph_words = dictionary.graph.len(),
            inflections = dictionary.inflections.len(),
            overrides = dictionary.overrides.len(),
            "dictionary built"
        );
        Ok(dictionary)
    }

    /// The process-wide dictionary, built from `source` on first use.
    ///
    /// Concurrent first callers block until one build finishes; later calls
    /// return the same instance and ignore their `source`. A failed build
    /// leaves the slot empty so a later call may retry.
    pub fn shared<S: DictionarySource + ?Sized>(
        source: &S,
    ) -> Result<Arc<Dictionary>, DictionaryError> {
        SHARED
            .get_or_try_init(|| Self::build(source).map(Arc::new))
            .map(Arc::clone)
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_unsplittable(&self, word: &str) -> bool {
        self.unsplittables.contains(word)
    }

    pub fn is_strong_suffix(&self, ending: &str) -> bool {
        self.strong_suffixes.contains(ending)
    }

    /// Number of entries in the word list, unsplittable words included.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn consonant_y_endings(&self) -> &[String] {
        &self.consonant_y
    }

    pub fn vcc_endings(&self) -> &[String] {
        &self.vcc
    }

    /// Decomposable endings and their cut rules, in source order.
    pub fn suffix_table(&self) -> &IndexMap<String, Vec<SuffixRule>> {
        &self.suffix_table
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Suffix-table endings, then prefixes, then strong suffixes.
    pub fn affixes(&self) -> &[String] {
        &self.affixes
    }

    pub fn graph(&self) -> &DerivativeGraph {
        &self.graph
    }

    pub fn inflection(&self, word: &str) -> Option<&Inflected> {
        self.inflections.get(word)
    }

    /// Precomputed split for words no rule can derive.
    pub fn override_for(&self, word: &str) -> Option<&MorphNode> {
        self.overrides.get(word)
    }
}

fn classify(record: &EndingRecord) -> Result<EndingType, DictionaryError> {
    EndingType::from_code(record.ending_type).ok_or_else(|| DictionaryError::UnknownEndingType {
        ending: record.name.clone(),
        code: record.ending_type,
    })
}

/// `bull + pen`, `aero- + -phyte`, `adulterer + -ous`, `ambi- + sexual`.
fn override_node(record: &LeftRightRecord) -> MorphNode {
    use MorphemeKind::*;

    let bare_left = record.left.strip_suffix(HYPHEN);
    let bare_right = record.right.strip_prefix(HYPHEN);

    let (son, daughter) = match (bare_left, bare_right) {
        (None, None) => (
            MorphNode::leaf(record.left.as_str(), Word),
            MorphNode::leaf(record.right.as_str(), Word),
        ),
        (Some(left), Some(right)) => (MorphNode::leaf(left, Prefix), MorphNode::leaf(right, Suffix)),
        (None, Some(right)) => (
            MorphNode::leaf(record.left.as_str(), Stem),
            MorphNode::leaf(right, Suffix),
        ),
        (Some(left), None) => (
            MorphNode::leaf(left, Prefix),
            MorphNode::leaf(record.right.as_str(), Stem),
        ),
    };
    MorphNode::with_children(record.name.as_str(), Word, son, daughter)
}
