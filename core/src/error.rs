//! Construction-time errors.
//!
//! Building a [`Dictionary`](crate::Dictionary) is the only fallible step in
//! this crate: bad lexical data must stop the build instead of silently
//! producing a weaker dictionary. Parsing never fails, unknown words degrade
//! to atomic leaves.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("malformed cut rule '{rule}' for ending '{ending}': {reason}")]
    MalformedCutRule {
        ending: String,
        rule: String,
        reason: &'static str,
    },

    #[error("decomposable ending '{ending}' has no cut rule")]
    MissingCutRule { ending: String },

    #[error("ending '{ending}' has unknown type code {code}")]
    UnknownEndingType { ending: String, code: u8 },

    #[error("failed to build word index: {0}")]
    WordIndex(#[from] fst::Error),

    #[error("snapshot i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unsupported snapshot format: '{0}' (expected .json, .bincode or .bin)")]
    UnsupportedFormat(String),
}
