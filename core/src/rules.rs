//! Fixed phonological tables used by the decomposition engine. Everything
//! here is plain data; the engine decides how and in which order to apply it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Addon value meaning "do not restore anything, but require the cut to
/// fall inside a doubled consonant" (e.g. `begg|ing`).
pub const NO_RESTORE_MARKER: &str = "^";

/// Endings handled by the silent-e / plain truncation rule.
pub const ED_ER_EST_ING: &[&str] = &["ed", "er", "est", "ing"];

/// Sibilant plural endings whose tail is split with [`split_ending`](crate::strutil::split_ending).
pub const ES_ENDINGS: &[&str] = &["ches", "oes", "ses", "shes", "ves", "xes", "zes"];

/// Classification codes carried by ending records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndingType {
    /// A suffix that is trusted whenever the remaining stem is a word.
    StrongSuffix,
    /// An ending with cut rules, e.g. `ies` in "cities".
    Decomposable,
    /// Consonant + y endings, e.g. `ties`, `ried`.
    ConsonantY,
    /// Vowel + doubled consonant endings, e.g. `otter`.
    VowelConsonantConsonant,
}

impl EndingType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::StrongSuffix),
            2 => Some(Self::Decomposable),
            3 => Some(Self::ConsonantY),
            4 => Some(Self::VowelConsonantConsonant),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::StrongSuffix => 1,
            Self::Decomposable => 2,
            Self::ConsonantY => 3,
            Self::VowelConsonantConsonant => 4,
        }
    }
}

/// One quasi-irregular inflection pattern.
///
/// `pattern` captures the stem head in group 1; the stem is rebuilt as
/// `head + addon` and the inflection reported as `inflection`.
#[derive(Debug)]
pub struct QuasiIrregular {
    pub pattern: Regex,
    pub addon: &'static str,
    pub inflection: &'static str,
}

const QUASI_IRREGULAR_ROWS: &[(&str, &str, &str)] = &[
    // radii -> radius
    (r"(?i)^(.{4,})i$", "us", "i"),
    // concerti -> concerto
    (r"(?i)^(.{4,})i$", "o", "i"),
    // curricula -> curriculum
    (r"(?i)^(.{4,})a$", "um", "a"),
    // phenomena -> phenomenon
    (r"(?i)^(.{4,})a$", "on", "a"),
    // schemata -> schema
    (r"(?i)^(.{3,})ta$", "", "ta"),
    // analyses -> analysis
    (r"(?i)^(.{3,})es$", "is", "e"),
    // formulae -> formula
    (r"(?i)^(.{3,}a)e$", "", "e"),
    // women -> woman
    (r"(?i)^(.*m)en$", "an", "e"),
    // slept -> sleep
    (r"(?i)^(.{2,})ept$", "eep", "ept"),
];

/// Quasi-irregular patterns in priority order.
pub static QUASI_IRREGULARS: Lazy<Vec<QuasiIrregular>> = Lazy::new(|| {
    QUASI_IRREGULAR_ROWS
        .iter()
        .map(|&(pattern, addon, inflection)| QuasiIrregular {
            // the rows are compile-time constants
            pattern: Regex::new(pattern).expect("quasi-irregular pattern"),
            addon,
            inflection,
        })
        .collect()
});

impl QuasiIrregular {
    /// Rebuild the candidate stem for `word`, if the pattern matches.
    pub fn stem_of(&self, word: &str) -> Option<String> {
        let caps = self.pattern.captures(word)?;
        let head = caps.get(1)?.as_str();
        Some(format!("{}{}", head, self.addon))
    }
}

/// Constraint an assimilated prefix puts on the first letter of its stem.
#[derive(Debug, Clone, Copy)]
pub enum Assimilation {
    Requires(&'static [char]),
    Forbids(&'static [char]),
}

/// `in-` assimilates to `ir-`, `il-` and `im-` before r, l and labials.
pub const PREFIX_ASSIMILATION: &[(&str, Assimilation)] = &[
    ("ir", Assimilation::Requires(&['r'])),
    ("il", Assimilation::Requires(&['l'])),
    ("im", Assimilation::Requires(&['m', 'p', 'b'])),
    ("in", Assimilation::Forbids(&['m', 'p', 'b', 'l', 'r'])),
];

/// True when `stem` may follow `prefix` under the assimilation table.
pub fn prefix_agrees(prefix: &str, stem: &str) -> bool {
    let Some(first) = stem.chars().next() else {
        return false;
    };
    match PREFIX_ASSIMILATION.iter().find(|(p, _)| *p == prefix) {
        Some((_, Assimilation::Requires(letters))) => letters.contains(&first),
        Some((_, Assimilation::Forbids(letters))) => !letters.contains(&first),
        None => true,
    }
}
