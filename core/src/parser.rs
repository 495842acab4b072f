//! The decomposition engine.
//!
//! `MorphParser::parse` turns one word into a [`MorphNode`] tree. Each
//! recursive step tries, in order:
//!
//! 1. the memo cache
//! 2. the unsplittable list and the cycle guards (atomic leaf)
//! 3. de-inflection: overrides, the inflection table, quasi-irregular
//!    patterns, consonant+y and doubled-consonant endings, ed/er/est/ing,
//!    and finally plural "s"
//! 4. suffix stripping, then prefix stripping, or refinement of the stem a
//!    de-inflection produced
//! 5. a last-resort battery of ending cuts
//!
//! Any split that scores zero under [`MorphNode::validate`] is discarded and
//! the word stays atomic.
//!
//! A parser carries per-session state (memo caches, the word being parsed and
//! a root hint), so it takes `&mut self`. Threads that parse concurrently
//! each own a parser and share the [`Dictionary`] through an `Arc`.

use ahash::{AHashMap, AHashSet};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::morpheme::{MorphNode, MorphemeKind};
use crate::rules::{prefix_agrees, ED_ER_EST_ING, ES_ENDINGS, QUASI_IRREGULARS};
use crate::strutil::{
    char_len, crude_root_suffix, cut_ed_er_est_ing, ends_with_any, split_ending, split_from_right,
};
use crate::Config;

const HYPHEN: char = '-';

type Split = Option<(String, String)>;

pub struct MorphParser {
    dictionary: Arc<Dictionary>,
    config: Config,

    /// Resolved nodes by text; survives across `parse` calls.
    cache: LruCache<String, MorphNode>,
    /// word -> (stem, suffix)
    stem_suffix_memo: AHashMap<String, Split>,
    /// word -> (prefix, stem)
    prefix_stem_memo: AHashMap<String, Split>,

    word_being_parsed: Option<String>,
    first_call: bool,
    /// Derivative-graph root of the word being parsed, once known.
    word_root: Option<String>,
    /// Tokens whose decomposition is still on the stack.
    in_flight: AHashSet<String>,

    cache_hits: usize,
    cache_misses: usize,
}

impl MorphParser {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self::with_config(dictionary, Config::default())
    }

    pub fn with_config(dictionary: Arc<Dictionary>, config: Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            dictionary,
            config,
            cache: LruCache::new(capacity),
            stem_suffix_memo: AHashMap::new(),
            prefix_stem_memo: AHashMap::new(),
            word_being_parsed: None,
            first_call: false,
            word_root: None,
            in_flight: AHashSet::new(),
            cache_hits: 0,
            cache_misses: 0,
        }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derivative-graph root established for the most recent parse.
    pub fn root_hint(&self) -> Option<&str> {
        self.word_root.as_deref()
    }

    /// Returns (hits, misses) of top-level `parse` lookups.
    pub fn cache_stats(&self) -> (usize, usize) {
        (self.cache_hits, self.cache_misses)
    }

    /// Number of memoized nodes.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Forget every memoized result and reset the statistics.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stem_suffix_memo.clear();
        self.prefix_stem_memo.clear();
        self.cache_hits = 0;
        self.cache_misses = 0;
    }

    /// Decompose the first whitespace-delimited token of `text`.
    ///
    /// Never fails: words without a supported split come back as a single
    /// `Root` leaf. The returned tree has its roots marked and its depths
    /// numbered from 0.
    pub fn parse(&mut self, text: &str) -> MorphNode {
        if let Some(hit) = self.cache.get(text) {
            self.cache_hits += 1;
            let mut node = hit.clone();
            finish_top_level(&mut node);
            return node;
        }
        self.cache_misses += 1;

        let token = text.split_whitespace().next().unwrap_or_default().to_string();
        if token.is_empty() {
            return MorphNode::leaf(token, MorphemeKind::Root);
        }

        self.first_call = true;
        self.word_being_parsed = Some(token.clone());
        self.try_set_word_root(&token, true);

        let mut node = self.decompose(&token, MorphemeKind::Word, true);
        finish_top_level(&mut node);

        debug!(
            token = %token,
            root_hint = ?self.word_root,
            morphemes = ?node.content_morphemes(),
            "parsed"
        );

        self.cache.put(token.clone(), node.clone());
        if token != text {
            self.cache.put(text.to_string(), node.clone());
        }
        node
    }

    fn decompose(&mut self, token: &str, kind: MorphemeKind, check_quasi: bool) -> MorphNode {
        if let Some(hit) = self.cache.get(token) {
            return hit.clone();
        }

        let dictionary = Arc::clone(&self.dictionary);
        if dictionary.is_unsplittable(token) {
            let node = MorphNode::leaf(token, kind);
            self.cache.put(token.to_string(), node.clone());
            return node;
        }

        let self_reference =
            !self.first_call && self.word_being_parsed.as_deref() == Some(token);
        if self_reference || self.in_flight.contains(token) {
            // the outer call caches the real result
            return MorphNode::leaf(token, kind);
        }

        self.first_call = false;
        self.in_flight.insert(token.to_string());

        let mut node = self
            .de_inflect(token, kind, check_quasi)
            .unwrap_or_else(|| MorphNode::leaf(token, kind));

        self.bootstrap(&mut node);

        if node.is_leaf() {
            if let Some(resolved) = self.last_resort(token, kind) {
                node = resolved;
            }
        }

        node.mark_roots();
        if !node.is_leaf() && node.validate(&dictionary) == 0 {
            trace!(token = %token, "rejected unsupported split");
            node = MorphNode::leaf(token, kind);
        }

        self.in_flight.remove(token);
        self.cache.put(token.to_string(), node.clone());
        node
    }

    /// Strip an inflection from `word`. `None` only for empty input.
    fn de_inflect(
        &mut self,
        word: &str,
        kind: MorphemeKind,
        check_quasi: bool,
    ) -> Option<MorphNode> {
        if word.is_empty() {
            return None;
        }

        let mut node = MorphNode::leaf(word, kind);
        if self.dictionary.is_unsplittable(word) {
            return Some(node);
        }

        if let Some(fixed) = self.dictionary.override_for(word) {
            let mut fixed = fixed.clone();
            fixed.set_kind(kind);
            trace!(word = %word, "override");
            return Some(fixed);
        }

        if let Some((stem, inflection)) = self.inflection_split(word, check_quasi) {
            self.try_set_word_root(&stem, false);
            node.set_son(Some(MorphNode::leaf(stem, MorphemeKind::Stem)));
            node.set_daughter(Some(MorphNode::leaf(inflection, MorphemeKind::Inflection)));
        }
        Some(node)
    }

    /// First de-inflection rule whose stem is a known word.
    fn inflection_split(&self, word: &str, check_quasi: bool) -> Split {
        let dict = &*self.dictionary;
        let is_word = |stem: &str| dict.is_word(stem);
        let accept = |rule: &'static str, stem: String, inflection: String| -> Split {
            if is_word(&stem) {
                trace!(word = %word, stem = %stem, inflection = %inflection, rule, "de-inflected");
                Some((stem, inflection))
            } else {
                None
            }
        };

        if let Some(entry) = dict.inflection(word) {
            let found = accept("table", entry.base.clone(), entry.inflection.clone());
            if found.is_some() {
                return found;
            }
        }

        if check_quasi {
            for quasi in QUASI_IRREGULARS.iter() {
                if let Some(stem) = quasi.stem_of(word) {
                    let found = accept("quasi-irregular", stem, quasi.inflection.to_string());
                    if found.is_some() {
                        return found;
                    }
                }
            }
        }

        let tail_split = |endings: &[String]| -> Option<(String, String)> {
            let (head, ending) = crude_root_suffix(word, endings)?;
            let (fragment, inflection) = split_ending(&ending)?;
            Some((format!("{}{}", head, fragment), inflection))
        };

        if let Some((stem, inflection)) = tail_split(dict.consonant_y_endings()) {
            if let found @ Some(_) = accept("consonant-y", stem, inflection) {
                return found;
            }
        }

        if let Some((stem, inflection)) = tail_split(dict.vcc_endings()) {
            if let found @ Some(_) = accept("doubled-consonant", stem, inflection) {
                return found;
            }
        }

        if ends_with_any(word, ED_ER_EST_ING).is_some() {
            let (stem, inflection) = cut_ed_er_est_ing(word, is_word);
            if let found @ Some(_) = accept("ed-er-est-ing", stem, inflection) {
                return found;
            }
        }

        if let Some(head) = word.strip_suffix('s') {
            if let found @ Some(_) = accept("plural", head.to_string(), "s".to_string()) {
                return found;
            }
            if let Some((head, ending)) = crude_root_suffix(word, ES_ENDINGS) {
                if let Some((fragment, inflection)) = split_ending(&ending) {
                    return accept("sibilant", format!("{}{}", head, fragment), inflection);
                }
            }
        }

        None
    }

    /// Split a leaf by suffix, then by prefix; refine the children of a node
    /// that already has them.
    fn bootstrap(&mut self, node: &mut MorphNode) {
        if !node.kind().is_decomposable() || self.dictionary.is_unsplittable(node.text()) {
            return;
        }

        if node.is_leaf() {
            let text = node.text().to_string();
            if let Some((stem, suffix)) = self.stem_suffix(&text) {
                self.try_set_word_root(&stem, false);
                node.set_daughter(Some(MorphNode::leaf(suffix, MorphemeKind::Suffix)));
                let son = self.decompose(&stem, MorphemeKind::Stem, false);
                node.set_son(Some(son));
            } else if let Some((prefix, stem)) = self.prefix_stem(&text) {
                self.try_set_word_root(&stem, false);
                node.set_son(Some(MorphNode::leaf(prefix, MorphemeKind::Prefix)));
                let daughter = self.decompose(&stem, MorphemeKind::Stem, false);
                node.set_daughter(Some(daughter));
            }
            return;
        }

        let son = node
            .son()
            .filter(|n| n.kind().is_decomposable())
            .map(|n| n.text().to_string());
        if let Some(text) = son {
            let refined = self.decompose(&text, MorphemeKind::Stem, false);
            node.set_son(Some(refined));
        }

        let daughter = node
            .daughter()
            .filter(|n| n.kind().is_decomposable())
            .map(|n| n.text().to_string());
        if let Some(text) = daughter {
            let refined = self.decompose(&text, MorphemeKind::Stem, false);
            node.set_daughter(Some(refined));
        }
    }

    /// Best (stem, suffix) split of `word`, memoized.
    fn stem_suffix(&mut self, word: &str) -> Split {
        if let Some(hit) = self.stem_suffix_memo.get(word) {
            return hit.clone();
        }

        let dictionary = Arc::clone(&self.dictionary);
        let mut best = None;

        if char_len(word) >= self.config.min_suffix_word_len && !dictionary.is_unsplittable(word) {
            let word_own_root = dictionary.graph().find_root(word);
            let mut max_score = self.config.min_score;

            'endings: for (ending, rules) in dictionary.suffix_table() {
                if !word.ends_with(ending.as_str()) {
                    continue;
                }
                for rule in rules {
                    let Some((stem, _)) = rule.apply(word) else {
                        continue;
                    };

                    let stem_root = dictionary.graph().find_root(&stem);
                    let strong = dictionary.is_word(&stem) && dictionary.is_strong_suffix(ending);
                    let same_root = stem_root.is_some()
                        && (stem_root == self.word_root.as_deref() || stem_root == word_own_root);

                    if strong || same_root {
                        trace!(word = %word, stem = %stem, suffix = %ending, "suffix accepted");
                        self.word_root = stem_root.map(str::to_string);
                        best = Some((stem, ending.clone()));
                        break 'endings;
                    }

                    let score = self.score(&stem);
                    if score > max_score {
                        max_score = score;
                        best = Some((stem, ending.clone()));
                    }
                }
            }
        }

        self.stem_suffix_memo.insert(word.to_string(), best.clone());
        best
    }

    /// Best (prefix, stem) split of `word`, memoized.
    fn prefix_stem(&mut self, word: &str) -> Split {
        if let Some(hit) = self.prefix_stem_memo.get(word) {
            return hit.clone();
        }

        let dictionary = Arc::clone(&self.dictionary);
        let mut best = None;

        if char_len(word) >= self.config.min_prefix_word_len && !dictionary.is_unsplittable(word) {
            let word_own_root = dictionary.graph().find_root(word);
            let mut max_score = self.config.min_score;

            for prefix in dictionary.prefixes() {
                let Some(rest) = word.strip_prefix(prefix.as_str()) else {
                    continue;
                };
                let stem = rest.strip_prefix(HYPHEN).unwrap_or(rest);
                if char_len(stem) < self.config.min_prefix_stem_len || !prefix_agrees(prefix, stem) {
                    continue;
                }

                let stem_root = dictionary.graph().find_root(stem);
                if stem_root.is_some()
                    && (stem_root == self.word_root.as_deref() || stem_root == word_own_root)
                {
                    trace!(word = %word, prefix = %prefix, stem = %stem, "prefix accepted");
                    self.word_root = stem_root.map(str::to_string);
                    best = Some((prefix.clone(), stem.to_string()));
                    break;
                }

                let score = self.score(stem);
                if score > max_score {
                    max_score = score;
                    best = Some((prefix.clone(), stem.to_string()));
                }
            }
        }

        self.prefix_stem_memo.insert(word.to_string(), best.clone());
        best
    }

    /// Plausibility of `stem` decomposed on its own.
    fn score(&mut self, stem: &str) -> u32 {
        let mut node = self.decompose(stem, MorphemeKind::Stem, true);
        node.mark_roots();
        node.validate(&self.dictionary)
    }

    /// Try the fixed ending cuts; accept the first stem that itself splits.
    fn last_resort(&mut self, token: &str, kind: MorphemeKind) -> Option<MorphNode> {
        for (stem, inflection) in self.last_resort_candidates(token) {
            let mut resolved = self.decompose(&stem, MorphemeKind::Stem, false);
            if resolved.son().is_none() || resolved.daughter().is_none() {
                continue;
            }
            trace!(token = %token, stem = %stem, inflection = %inflection, "last resort");
            resolved.downgrade();
            return Some(MorphNode::with_children(
                token,
                kind,
                resolved,
                MorphNode::leaf(inflection, MorphemeKind::Inflection),
            ));
        }
        None
    }

    fn last_resort_candidates(&self, word: &str) -> Vec<(String, String)> {
        let len = char_len(word);
        if len < self.config.min_last_resort_len || self.dictionary.is_unsplittable(word) {
            return Vec::new();
        }

        let long = len >= 5;
        let cuts: &[(usize, &str)] = if long && word.ends_with("ies") {
            &[(3, "y")]
        } else if ends_with_any(word, ES_ENDINGS).is_some() {
            &[(2, "")]
        } else if word.ends_with('s') && !word.ends_with("ss") {
            &[(1, "")]
        } else if long && word.ends_with("ves") {
            &[(1, ""), (3, "fe")]
        } else if long && (word.ends_with("er") || word.ends_with("ed")) {
            &[(1, ""), (2, ""), (3, ""), (3, "y")]
        } else if long && word.ends_with("est") {
            &[(2, ""), (3, ""), (4, "")]
        } else if long && word.ends_with("ing") {
            &[(3, ""), (3, "e"), (4, "")]
        } else {
            &[]
        };

        cuts.iter()
            .filter_map(|&(cut, addon)| split_from_right(word, cut, addon))
            .collect()
    }

    fn try_set_word_root(&mut self, word: &str, force: bool) {
        if force || self.word_root.is_none() {
            self.word_root = self.dictionary.graph().find_root(word).map(str::to_string);
        }
    }
}

/// Normalize a memoized node for return from `parse`.
///
/// The memo also holds nodes first reached as inner stems: those keep the
/// `Stem` kind and unnumbered depths they were stored with.
fn finish_top_level(node: &mut MorphNode) {
    if !node.is_leaf() && node.kind() == MorphemeKind::Stem {
        node.set_kind(MorphemeKind::Word);
    }
    node.mark_roots();
    node.organize_depths();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::EndingType;
    use crate::source::{EndingRecord, Snapshot};
    use MorphemeKind::*;

    fn parser(snapshot: &Snapshot) -> MorphParser {
        MorphParser::new(Arc::new(Dictionary::build(snapshot).unwrap()))
    }

    fn split(node: &MorphNode) -> (&str, &str) {
        (node.son().unwrap().text(), node.daughter().unwrap().text())
    }

    #[test]
    fn first_token_only() {
        let mut p = parser(&Snapshot::with_words(["hope", "work"]));
        let node = p.parse("  working hard ");
        assert_eq!(node.text(), "working");
        assert_eq!(split(&node), ("work", "ing"));
        assert_eq!(p.parse("").text(), "");
        assert_eq!(p.parse("   ").kind(), Root);
    }

    #[test]
    fn parse_is_memoized() {
        let mut p = parser(&Snapshot::with_words(["hope"]));
        let first = p.parse("hoping");
        let second = p.parse("hoping");
        assert_eq!(first, second);
        assert_eq!(p.cache_stats(), (1, 1));
        assert!(p.cache_size() >= 2);
        p.clear_cache();
        assert_eq!(p.cache_size(), 0);
        assert_eq!(p.cache_stats(), (0, 0));
        assert_eq!(p.parse("hoping"), first);
    }

    #[test]
    fn depths_are_numbered() {
        let mut p = parser(&Snapshot::with_words(["hope"]));
        let node = p.parse("hoping");
        assert_eq!(node.depth(), 0);
        assert_eq!(node.son().unwrap().depth(), 1);
        assert_eq!(node.daughter().unwrap().depth(), 1);
    }

    #[test]
    fn inflection_table_wins_first() {
        let mut snapshot = Snapshot::with_words(["mouse"]);
        snapshot.add_inflected("mice", "mouse", "ice");
        let mut p = parser(&snapshot);
        let node = p.parse("mice");
        assert_eq!(split(&node), ("mouse", "ice"));
        assert_eq!(node.daughter().unwrap().kind(), Inflection);
    }

    #[test]
    fn quasi_irregular_plurals() {
        let mut p = parser(&Snapshot::with_words(["radius", "schema", "analysis", "sleep"]));
        assert_eq!(split(&p.parse("radii")), ("radius", "i"));
        assert_eq!(split(&p.parse("schemata")), ("schema", "ta"));
        assert_eq!(split(&p.parse("analyses")), ("analysis", "e"));
        assert_eq!(split(&p.parse("slept")), ("sleep", "ept"));
    }

    #[test]
    fn consonant_y_and_doubling() {
        let mut snapshot = Snapshot::with_words(["city", "hot", "happy"]);
        snapshot
            .add_ending(EndingRecord::new("ties", EndingType::ConsonantY))
            .add_ending(EndingRecord::new("pier", EndingType::ConsonantY))
            .add_ending(EndingRecord::new("otter", EndingType::VowelConsonantConsonant));
        let mut p = parser(&snapshot);
        assert_eq!(split(&p.parse("cities")), ("city", "es"));
        assert_eq!(split(&p.parse("happier")), ("happy", "er"));
        assert_eq!(split(&p.parse("hotter")), ("hot", "er"));
    }

    #[test]
    fn plural_s_then_sibilants() {
        let mut p = parser(&Snapshot::with_words(["cat", "box", "wolf", "church"]));
        assert_eq!(split(&p.parse("cats")), ("cat", "s"));
        assert_eq!(split(&p.parse("boxes")), ("box", "es"));
        assert_eq!(split(&p.parse("wolves")), ("wolf", "es"));
        assert_eq!(split(&p.parse("churches")), ("church", "es"));
    }

    #[test]
    fn strong_suffix_is_trusted() {
        let mut snapshot = Snapshot::with_words(["kind"]);
        snapshot
            .add_ending(EndingRecord::decomposable("ness", "4"))
            .add_ending(EndingRecord::new("ness", EndingType::StrongSuffix));
        let mut p = parser(&snapshot);
        let node = p.parse("kindness");
        assert_eq!(split(&node), ("kind", "ness"));
        assert_eq!(node.daughter().unwrap().kind(), Suffix);
        assert_eq!(node.roots(), vec!["kind"]);
    }

    #[test]
    fn weak_suffix_needs_a_shared_root() {
        let mut snapshot = Snapshot::with_words(["act"]);
        snapshot
            .add_ending(EndingRecord::decomposable("ive", "3"))
            .add_derivatives("act", "active");
        let mut p = parser(&snapshot);
        let node = p.parse("active");
        assert_eq!(split(&node), ("act", "ive"));
        assert_eq!(p.root_hint(), Some("act"));

        // "ive" is not strong, "pass" is not in the graph and scores only 1
        let mut snapshot = Snapshot::with_words(["pass"]);
        snapshot.add_ending(EndingRecord::decomposable("ive", "3"));
        let mut p = parser(&snapshot);
        assert!(p.parse("passive").is_leaf());
    }

    #[test]
    fn prefix_agreement_and_hyphen() {
        let mut snapshot = Snapshot::with_words(["regular", "legal", "possible"]);
        snapshot
            .add_prefix("ir")
            .add_prefix("in")
            .add_prefix("im")
            .add_prefix("anti")
            .add_derivatives("regular", "irregular")
            .add_derivatives("possible", "impossible, inpossible")
            .add_derivatives("legal", "anti-legal");
        let mut p = parser(&snapshot);

        let node = p.parse("irregular");
        assert_eq!(split(&node), ("ir", "regular"));
        assert_eq!(node.son().unwrap().kind(), Prefix);

        assert_eq!(split(&p.parse("impossible")), ("im", "possible"));
        // "in" may not precede "p"
        assert!(p.parse("inpossible").is_leaf());
        assert_eq!(split(&p.parse("anti-legal")), ("anti", "legal"));
    }

    #[test]
    fn override_children_are_refined() {
        let mut snapshot = Snapshot::with_words(["bull", "dog"]);
        snapshot.add_left_right("bulldogs", "bull", "dogs");
        let mut p = parser(&snapshot);
        let node = p.parse("bulldogs");
        assert_eq!(node.kind(), Word);
        assert_eq!(node.son().unwrap().kind(), Root);
        assert_eq!(split(node.daughter().unwrap()), ("dog", "s"));
        assert_eq!(node.roots(), vec!["bull", "dog"]);
    }

    #[test]
    fn last_resort_wraps_a_split_stem() {
        let mut snapshot = Snapshot::with_words(["kind"]);
        snapshot
            .add_ending(EndingRecord::decomposable("ness", "4"))
            .add_ending(EndingRecord::new("ness", EndingType::StrongSuffix));
        let mut p = parser(&snapshot);
        let node = p.parse("kindnesses");
        assert_eq!(node.daughter().unwrap().text(), "es");
        let son = node.son().unwrap();
        assert_eq!(split(son), ("kind", "ness"));
        assert_eq!(son.kind(), Stem);
    }

    #[test]
    fn last_resort_candidates_follow_endings() {
        let p = parser(&Snapshot::new());
        let stems = |w: &str| -> Vec<String> {
            p.last_resort_candidates(w).into_iter().map(|(s, _)| s).collect()
        };
        assert_eq!(stems("babies"), ["baby"]);
        assert_eq!(stems("boxes"), ["box"]);
        assert_eq!(stems("dogs"), ["dog"]);
        assert!(stems("glass").is_empty());
        assert_eq!(stems("bigger"), ["bigge", "bigg", "big", "bigy"]);
        assert_eq!(stems("biggest"), ["bigge", "bigg", "big"]);
        assert_eq!(stems("hoping"), ["hop", "hope", "ho"]);
        assert!(stems("dog").is_empty());
    }

    #[test]
    fn unsplittable_words_stay_whole() {
        let mut snapshot = Snapshot::with_words(["sin"]);
        snapshot.add_unsplittable("sing").add_unsplittable("news");
        let mut p = parser(&snapshot);
        for word in ["sing", "news"] {
            let node = p.parse(word);
            assert!(node.is_leaf());
            assert_eq!(node.kind(), Root);
        }
    }

    #[test]
    fn scored_suffix_split_beats_the_floor() {
        let mut snapshot = Snapshot::with_words(["hope"]);
        snapshot
            .add_ending(EndingRecord::decomposable("ful", "3"))
            .add_derivatives("hope", "hopes");
        let mut p = parser(&snapshot);
        let node = p.parse("hopeful");
        // "ful" is not strong and "hopeful" has no graph root: only the score admits it
        assert_eq!(split(&node), ("hope", "ful"));
        assert_eq!(node.daughter().unwrap().kind(), Suffix);
        assert_eq!(node.validate(p.dictionary()), 2);
    }

    #[test]
    fn equal_scores_keep_the_first_variant() {
        let build = |cut_ways: &str| {
            let mut snapshot = Snapshot::with_words(["hope", "hop"]);
            snapshot
                .add_ending(EndingRecord::decomposable("ful", cut_ways))
                .add_derivatives("hope", "hopes")
                .add_derivatives("hop", "hops");
            parser(&snapshot)
        };

        let mut p = build("3, 4");
        assert_eq!(p.score("hope"), p.score("hop"));
        assert_eq!(split(&p.parse("hopeful")), ("hope", "ful"));

        let mut p = build("4, 3");
        assert_eq!(split(&p.parse("hopeful")), ("hop", "ful"));
    }

    #[test]
    fn scored_prefix_split_beats_the_floor() {
        let mut snapshot = Snapshot::with_words(["lock"]);
        snapshot.add_prefix("un").add_derivatives("lock", "locks");
        let mut p = parser(&snapshot);
        let node = p.parse("unlock");
        assert_eq!(split(&node), ("un", "lock"));
        assert_eq!(node.son().unwrap().kind(), Prefix);
        assert_eq!(node.daughter().unwrap().kind(), Root);
    }

    #[test]
    fn stem_memo_hit_comes_back_as_a_word() {
        let mut snapshot = Snapshot::with_words(["kind"]);
        snapshot
            .add_ending(EndingRecord::decomposable("ness", "4"))
            .add_ending(EndingRecord::new("ness", EndingType::StrongSuffix));
        let mut p = parser(&snapshot);
        p.parse("kindnesses");

        let node = p.parse("kindness");
        assert_eq!(node.kind(), Word);
        assert_eq!(node.depth(), 0);
        assert_eq!(node.son().unwrap().depth(), 1);
        assert_eq!(node.daughter().unwrap().depth(), 1);
        assert_eq!(node.get_children(1), Some((None, None)));
        assert_eq!(node, parser(&snapshot).parse("kindness"));
    }

    #[test]
    fn unsplittable_memo_hit_is_a_root() {
        let mut snapshot = Snapshot::with_words(["sin"]);
        snapshot.add_unsplittable("sing");
        let mut p = parser(&snapshot);
        assert_eq!(split(&p.parse("sings")), ("sing", "s"));

        let node = p.parse("sing");
        assert!(node.is_leaf());
        assert_eq!(node.kind(), Root);
        assert_eq!(node.depth(), 0);
    }
}
