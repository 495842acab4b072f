//! Morpheme trees.
//!
//! A parse result is a strict binary tree: the son holds the left part of a
//! split (stem, or prefix) and the daughter the right part (inflection,
//! suffix, or stem after a prefix). Children are owned by their parent and
//! `Clone` is a deep copy.
//!
//! Public API:
//! - `MorphemeKind` - the six morpheme tags
//! - `MorphNode` - tree node with the traversal, scoring and rendering helpers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dictionary::Dictionary;

/// Morpheme tags. `Root`, `Word` and `Stem` are reassigned while parsing;
/// `Inflection`, `Prefix` and `Suffix` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorphemeKind {
    Inflection,
    Prefix,
    Suffix,
    Stem,
    Root,
    Word,
}

impl MorphemeKind {
    /// True for the kinds that never decompose further.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Inflection | Self::Prefix | Self::Suffix)
    }

    /// True for the kinds the engine tries to decompose.
    pub fn is_decomposable(self) -> bool {
        matches!(self, Self::Word | Self::Stem)
    }
}

impl fmt::Display for MorphemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inflection => "Inflection",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::Stem => "Stem",
            Self::Root => "Root",
            Self::Word => "Word",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphNode {
    text: String,
    kind: MorphemeKind,
    /// Distance from the tree root, starting at 0.
    depth: usize,
    son: Option<Box<MorphNode>>,
    daughter: Option<Box<MorphNode>>,
}

impl MorphNode {
    /// A node without children.
    pub fn leaf<T: Into<String>>(text: T, kind: MorphemeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            depth: 0,
            son: None,
            daughter: None,
        }
    }

    pub fn with_children<T: Into<String>>(
        text: T,
        kind: MorphemeKind,
        son: MorphNode,
        daughter: MorphNode,
    ) -> Self {
        let mut node = Self::leaf(text, kind);
        node.set_son(Some(son));
        node.set_daughter(Some(daughter));
        node
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<T: Into<String>>(&mut self, text: T) {
        self.text = text.into();
    }

    pub fn kind(&self) -> MorphemeKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: MorphemeKind) {
        self.kind = kind;
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn son(&self) -> Option<&MorphNode> {
        self.son.as_deref()
    }

    pub fn daughter(&self) -> Option<&MorphNode> {
        self.daughter.as_deref()
    }

    /// Replace the son. `None` leaves an existing son in place.
    pub fn set_son(&mut self, son: Option<MorphNode>) {
        if let Some(son) = son {
            self.son = Some(Box::new(son));
        }
    }

    /// Replace the daughter. `None` leaves an existing daughter in place.
    pub fn set_daughter(&mut self, daughter: Option<MorphNode>) {
        if let Some(daughter) = daughter {
            self.daughter = Some(Box::new(daughter));
        }
    }

    pub(crate) fn son_mut(&mut self) -> Option<&mut MorphNode> {
        self.son.as_deref_mut()
    }

    pub(crate) fn daughter_mut(&mut self) -> Option<&mut MorphNode> {
        self.daughter.as_deref_mut()
    }

    pub fn is_leaf(&self) -> bool {
        self.son.is_none() && self.daughter.is_none()
    }

    /// Son and daughter of the node at `depth`.
    ///
    /// - `None`: no node at that depth along the explored path
    /// - `Some((None, None))`: the node at `depth` has not been split
    /// - `Some((son, daughter))`: its children
    ///
    /// Below this node the search follows the son while the son has children
    /// of its own, and the daughter otherwise.
    pub fn get_children(&self, depth: usize) -> Option<(Option<&MorphNode>, Option<&MorphNode>)> {
        if self.depth == depth {
            return Some((self.son(), self.daughter()));
        }
        let son = self.son()?;
        if son.son.is_some() {
            return son.get_children(depth);
        }
        self.daughter()?.get_children(depth)
    }

    /// Number every node with its distance from this one.
    pub fn organize_depths(&mut self) {
        self.organize_depths_from(0);
    }

    fn organize_depths_from(&mut self, depth: usize) {
        self.depth = depth;
        if let Some(son) = self.son_mut() {
            son.organize_depths_from(depth + 1);
        }
        if let Some(daughter) = self.daughter_mut() {
            daughter.organize_depths_from(depth + 1);
        }
    }

    /// Push this subtree one level down: depths grow by one and `Word`
    /// becomes `Stem`.
    ///
    /// Only the kind change is visible in parse results. A version that
    /// keeps depths unchanged produces identical trees, since
    /// `MorphParser::parse` renumbers every depth with
    /// [`organize_depths`](Self::organize_depths) before returning.
    pub fn downgrade(&mut self) {
        self.depth += 1;
        if self.kind == MorphemeKind::Word {
            self.kind = MorphemeKind::Stem;
        }
        if let Some(son) = self.son_mut() {
            son.downgrade();
        }
        if let Some(daughter) = self.daughter_mut() {
            daughter.downgrade();
        }
    }

    /// Tag every childless non-terminal node as `Root`.
    pub fn mark_roots(&mut self) {
        if self.kind.is_terminal() {
            return;
        }
        if self.is_leaf() {
            self.kind = MorphemeKind::Root;
            return;
        }
        if let Some(son) = self.son_mut() {
            son.mark_roots();
        }
        if let Some(daughter) = self.daughter_mut() {
            daughter.mark_roots();
        }
    }

    /// All leaves, son side before daughter side.
    pub fn leaves(&self) -> Vec<&MorphNode> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a MorphNode>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        if let Some(son) = self.son() {
            son.collect_leaves(out);
        }
        if let Some(daughter) = self.daughter() {
            daughter.collect_leaves(out);
        }
    }

    /// Texts of the leaves whose kind satisfies `filter`, in leaf order.
    pub fn find_morphemes<F>(&self, filter: F) -> Vec<String>
    where
        F: Fn(MorphemeKind) -> bool,
    {
        self.leaves()
            .into_iter()
            .filter(|leaf| filter(leaf.kind))
            .map(|leaf| leaf.text.clone())
            .collect()
    }

    /// Everything except inflections.
    pub fn content_morphemes(&self) -> Vec<String> {
        self.find_morphemes(|kind| kind != MorphemeKind::Inflection)
    }

    pub fn content_morphemes_of(&self, kind: MorphemeKind) -> Vec<String> {
        self.find_morphemes(|k| k == kind)
    }

    /// A word may carry several prefixes, e.g. "anti" and "en" in "anti-enslavement".
    pub fn prefixes(&self) -> Vec<String> {
        self.content_morphemes_of(MorphemeKind::Prefix)
    }

    pub fn suffixes(&self) -> Vec<String> {
        self.content_morphemes_of(MorphemeKind::Suffix)
    }

    pub fn stems(&self) -> Vec<String> {
        self.content_morphemes_of(MorphemeKind::Stem)
    }

    /// Compounds such as "bulldog" have more than one root.
    pub fn roots(&self) -> Vec<String> {
        self.content_morphemes_of(MorphemeKind::Root)
    }

    /// Plausibility score of this decomposition.
    ///
    /// One point per root that is a dictionary word, plus one point per
    /// content morpheme whose derivative-graph root is among this tree's
    /// roots. Zero means nothing supports the split.
    pub fn validate(&self, dictionary: &Dictionary) -> u32 {
        let roots = self.roots();
        let mut oks = roots.iter().filter(|r| dictionary.is_word(r)).count() as u32;

        for morpheme in self.content_morphemes() {
            if let Some(root) = dictionary.graph().find_root(&morpheme) {
                if roots.iter().any(|r| r == root) {
                    oks += 1;
                }
            }
        }
        oks
    }

    /// Indented tree rendering. `h_marker` introduces a child, `v_marker`
    /// draws the vertical connectors.
    pub fn render(&self, h_marker: &str, v_marker: &str) -> String {
        let mut out = String::new();
        self.render_into(0, h_marker, v_marker, &mut out);
        out
    }

    fn render_into(&self, level: usize, h_marker: &str, v_marker: &str, out: &mut String) {
        let rail = format!("{} ", v_marker);
        if level > 0 {
            out.push_str(&rail.repeat(level - 1));
            out.push_str(h_marker);
        }
        out.push_str(&format!("{}({})", self.text, self.kind));

        if self.is_leaf() {
            return;
        }
        if let Some(son) = self.son() {
            out.push('\n');
            son.render_into(level + 1, h_marker, v_marker, out);
        }
        out.push('\n');
        out.push_str(&rail.repeat(level));
        out.push_str(v_marker);
        if let Some(daughter) = self.daughter() {
            out.push('\n');
            daughter.render_into(level + 1, h_marker, v_marker, out);
        }
    }
}

impl fmt::Display for MorphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("+-", "|"))
    }
}
