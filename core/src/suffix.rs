//! Suffix cutting rules.
//!
//! Every decomposable ending carries a compact rule string such as
//! `"3y, 2^"`: each comma-separated variant is a single cut digit followed by
//! the addon restored to the stem head. For `bility` in "ability" the rule
//! `5le` cuts five characters and restores "le" (`ab|ility -> able`).

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;
use crate::rules::NO_RESTORE_MARKER;
use crate::strutil::split_from_right;

/// One way of cutting a word that ends with `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    cut_position: usize,
    addon: String,
    suffix: String,
}

impl SuffixRule {
    pub fn new<A: Into<String>, S: Into<String>>(cut_position: usize, addon: A, suffix: S) -> Self {
        Self {
            cut_position,
            addon: addon.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse every variant of a rule string, preserving their order.
    pub fn parse_all(cut_ways: &str, suffix: &str) -> Result<Vec<SuffixRule>, DictionaryError> {
        let malformed = |rule: &str, reason: &'static str| DictionaryError::MalformedCutRule {
            ending: suffix.to_string(),
            rule: rule.to_string(),
            reason,
        };

        let mut rules = Vec::new();
        for variant in cut_ways.split(',').map(str::trim) {
            let mut chars = variant.chars();
            let digit = chars
                .next()
                .ok_or_else(|| malformed(cut_ways, "empty variant"))?;
            let cut_position = digit
                .to_digit(10)
                .ok_or_else(|| malformed(variant, "variant must start with a cut digit"))?;
            rules.push(SuffixRule::new(cut_position as usize, chars.as_str(), suffix));
        }
        Ok(rules)
    }

    /// Characters removed from the right of the word.
    pub fn cut_position(&self) -> usize {
        self.cut_position
    }

    /// Text appended to the stem head, or [`NO_RESTORE_MARKER`].
    pub fn addon(&self) -> &str {
        &self.addon
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// False for the "no restoration" marker, which instead demands a
    /// doubled consonant across the cut.
    pub fn restores(&self) -> bool {
        self.addon != NO_RESTORE_MARKER
    }

    /// Apply this rule to `word`, returning `(stem, removed tail)`.
    ///
    /// Marker rules only apply when the removed tail starts with the letter
    /// the stem ends with (`begg|ing -> beg`).
    pub fn apply(&self, word: &str) -> Option<(String, String)> {
        let (stem, tail) = split_from_right(word, self.cut_position, &self.addon)?;
        if !self.restores() {
            match (stem.chars().last(), tail.chars().next()) {
                (Some(last), Some(first)) if last == first => {}
                _ => return None,
            }
        }
        Some((stem, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variants_in_order() {
        let rules = SuffixRule::parse_all("3y , 2^,1", "ies").unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0], SuffixRule::new(3, "y", "ies"));
        assert_eq!(rules[1].cut_position(), 2);
        assert!(!rules[1].restores());
        assert_eq!(rules[2].addon(), "");
        assert!(rules.iter().all(|r| r.suffix() == "ies"));
    }

    #[test]
    fn malformed_rules_are_errors() {
        for bad in ["", "y3", "3y,,2", "x"] {
            let err = SuffixRule::parse_all(bad, "ness").unwrap_err();
            assert!(
                matches!(err, DictionaryError::MalformedCutRule { ref ending, .. } if ending == "ness"),
                "{bad:?} gave {err}"
            );
        }
    }

    #[test]
    fn apply_restores_addon() {
        let rule = SuffixRule::new(5, "le", "bility");
        assert_eq!(
            rule.apply("ability"),
            Some(("able".to_string(), "ility".to_string()))
        );
    }

    #[test]
    fn marker_requires_doubling() {
        let rule = SuffixRule::new(4, NO_RESTORE_MARKER, "ing");
        assert_eq!(
            rule.apply("begging"),
            Some(("beg".to_string(), "ging".to_string()))
        );
        assert_eq!(rule.apply("singing"), None);
    }
}
