//! libmorph-core
//!
//! Dictionary-driven decomposition of English words into morpheme trees:
//! de-inflection, suffix and prefix stripping, and a plausibility score used
//! to choose between competing splits.
//!
//! Lexical data comes from a `DictionarySource` (usually a `Snapshot` file)
//! and is compiled once into an immutable `Dictionary`. Each `MorphParser`
//! holds its own memo caches and shares the dictionary through an `Arc`.
//!
//! Public API:
//! - `MorphParser` - the decomposition engine
//! - `MorphNode` / `MorphemeKind` - parse results
//! - `Dictionary` - lexical tables, built once and shared
//! - `DerivativeGraph` - root/derivative relations between words
//! - `SuffixRule` - one cut rule of a decomposable ending
//! - `Snapshot` / `DictionarySource` - raw dictionary data
//! - `Config` - engine limits and cache size
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::DictionaryError;

pub mod rules;
pub use rules::EndingType;

pub mod strutil;

pub mod suffix;
pub use suffix::SuffixRule;

pub mod graph;
pub use graph::{DerivativeGraph, GraphNode};

pub mod source;
pub use source::{
    DerivativeRecord, DictionarySource, EndingRecord, InflectedRecord, LeftRightRecord,
    PrefixRecord, Snapshot, WordRecord,
};

pub mod morpheme;
pub use morpheme::{MorphNode, MorphemeKind};

pub mod dictionary;
pub use dictionary::{Dictionary, Inflected};

pub mod parser;
pub use parser::MorphParser;

/// Engine configuration.
///
/// The defaults reproduce the standard heuristics; the length limits exist
/// to keep short words like "icy" or "abed" from being over-split.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of entries in the parse memo.
    pub max_cache_size: usize,

    // Affix search limits (in characters)
    /// Shortest word tried for suffix stripping ("icy").
    pub min_suffix_word_len: usize,
    /// Shortest word tried for prefix stripping ("abed").
    pub min_prefix_word_len: usize,
    /// Shortest stem accepted after a prefix cut.
    pub min_prefix_stem_len: usize,

    /// A scored affix candidate must score strictly above this floor.
    pub min_score: u32,

    /// Shortest word handed to the last-resort ending battery.
    pub min_last_resort_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cache_size: 10_000,
            min_suffix_word_len: 3,
            min_prefix_word_len: 4,
            min_prefix_stem_len: 3,
            min_score: 1,
            min_last_resort_len: 4,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Small helpers for front ends.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
