//! Dictionary source data.
//!
//! The engine never talks to a database. A [`DictionarySource`] hands the
//! dictionary builder six flat record lists; [`Snapshot`] is the in-memory
//! implementation used by the tools and the tests, and can be stored as
//! JSON or bincode.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::DictionaryError;
use crate::rules::EndingType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub name: String,
    /// `false` excludes the word from every decomposition attempt.
    pub splittable: bool,
}

impl WordRecord {
    pub fn new<N: Into<String>>(name: N, splittable: bool) -> Self {
        Self {
            name: name.into(),
            splittable,
        }
    }
}

/// An ending with its classification code.
///
/// Decomposable endings (code 2) carry a cut-rule string such as `"3y,2^"`
/// and the suffix text reported for them, which defaults to `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingRecord {
    pub name: String,
    pub ending_type: u8,
    #[serde(default)]
    pub cut_ways: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl EndingRecord {
    pub fn new<N: Into<String>>(name: N, ending_type: EndingType) -> Self {
        Self {
            name: name.into(),
            ending_type: ending_type.code(),
            cut_ways: None,
            suffix: None,
        }
    }

    /// A decomposable ending with its cut rules.
    pub fn decomposable<N: Into<String>, C: Into<String>>(name: N, cut_ways: C) -> Self {
        Self {
            cut_ways: Some(cut_ways.into()),
            ..Self::new(name, EndingType::Decomposable)
        }
    }

    pub fn suffix_text(&self) -> &str {
        self.suffix.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRecord {
    pub name: String,
}

impl PrefixRecord {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { name: name.into() }
    }
}

/// An irregular inflected form, e.g. `mice -> (mouse, ice)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectedRecord {
    pub name: String,
    pub base: String,
    pub inflection: String,
}

impl InflectedRecord {
    pub fn new<N, B, I>(name: N, base: B, inflection: I) -> Self
    where
        N: Into<String>,
        B: Into<String>,
        I: Into<String>,
    {
        Self {
            name: name.into(),
            base: base.into(),
            inflection: inflection.into(),
        }
    }
}

/// A stem and its comma-separated derivatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeRecord {
    pub name: String,
    pub derivatives: String,
}

impl DerivativeRecord {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, derivatives: D) -> Self {
        Self {
            name: name.into(),
            derivatives: derivatives.into(),
        }
    }
}

/// A fixed two-part split, e.g. `bulldog = bull + dog` or `anti- + body`.
///
/// A trailing hyphen on `left` marks a prefix, a leading hyphen on `right`
/// marks a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftRightRecord {
    pub name: String,
    pub left: String,
    pub right: String,
}

impl LeftRightRecord {
    pub fn new<N, L, R>(name: N, left: L, right: R) -> Self
    where
        N: Into<String>,
        L: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Supplier of raw dictionary data, read once at build time.
pub trait DictionarySource {
    fn words(&self) -> Vec<WordRecord>;
    fn endings(&self) -> Vec<EndingRecord>;
    fn prefixes(&self) -> Vec<PrefixRecord>;
    fn inflected(&self) -> Vec<InflectedRecord>;
    fn derivatives(&self) -> Vec<DerivativeRecord>;
    fn left_rights(&self) -> Vec<LeftRightRecord>;
}

/// All dictionary records in one serialisable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub words: Vec<WordRecord>,
    #[serde(default)]
    pub endings: Vec<EndingRecord>,
    #[serde(default)]
    pub prefixes: Vec<PrefixRecord>,
    #[serde(default)]
    pub inflected: Vec<InflectedRecord>,
    #[serde(default)]
    pub derivatives: Vec<DerivativeRecord>,
    #[serde(default)]
    pub left_rights: Vec<LeftRightRecord>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot holding only splittable words.
    pub fn with_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut snapshot = Self::new();
        for word in words {
            snapshot.add_word(word);
        }
        snapshot
    }

    pub fn add_word(&mut self, word: &str) -> &mut Self {
        self.words.push(WordRecord::new(word, true));
        self
    }

    pub fn add_unsplittable(&mut self, word: &str) -> &mut Self {
        self.words.push(WordRecord::new(word, false));
        self
    }

    pub fn add_ending(&mut self, ending: EndingRecord) -> &mut Self {
        self.endings.push(ending);
        self
    }

    pub fn add_prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefixes.push(PrefixRecord::new(prefix));
        self
    }

    pub fn add_inflected(&mut self, name: &str, base: &str, inflection: &str) -> &mut Self {
        self.inflected.push(InflectedRecord::new(name, base, inflection));
        self
    }

    pub fn add_derivatives(&mut self, stem: &str, derivatives: &str) -> &mut Self {
        self.derivatives.push(DerivativeRecord::new(stem, derivatives));
        self
    }

    pub fn add_left_right(&mut self, name: &str, left: &str, right: &str) -> &mut Self {
        self.left_rights.push(LeftRightRecord::new(name, left, right));
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, DictionaryError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Load by file extension: `.json`, `.bincode` or `.bin`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        match SnapshotFormat::of(path)? {
            SnapshotFormat::Json => Self::load_json(path),
            SnapshotFormat::Bincode => Self::load_bincode(path),
        }
    }

    /// Save by file extension, see [`Snapshot::load`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        match SnapshotFormat::of(path)? {
            SnapshotFormat::Json => self.save_json(path),
            SnapshotFormat::Bincode => self.save_bincode(path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Bincode,
}

impl SnapshotFormat {
    fn of(path: &Path) -> Result<Self, DictionaryError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("bincode") | Some("bin") => Ok(Self::Bincode),
            _ => Err(DictionaryError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl DictionarySource for Snapshot {
    fn words(&self) -> Vec<WordRecord> {
        self.words.clone()
    }

    fn endings(&self) -> Vec<EndingRecord> {
        self.endings.clone()
    }

    fn prefixes(&self) -> Vec<PrefixRecord> {
        self.prefixes.clone()
    }

    fn inflected(&self) -> Vec<InflectedRecord> {
        self.inflected.clone()
    }

    fn derivatives(&self) -> Vec<DerivativeRecord> {
        self.derivatives.clone()
    }

    fn left_rights(&self) -> Vec<LeftRightRecord> {
        self.left_rights.clone()
    }
}
