//! Shared plumbing for the libmorph command-line tools.

use anyhow::{Context, Result};
use clap::ValueEnum;
use libmorph_core::{Dictionary, MorphNode, Snapshot};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or
/// everything down to `debug` with `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // a second install (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Load a snapshot file and build the dictionary from it.
pub fn load_dictionary(path: &Path) -> Result<Arc<Dictionary>> {
    let snapshot = Snapshot::load(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let dictionary = Dictionary::build(&snapshot)
        .with_context(|| format!("snapshot {} is not a valid dictionary", path.display()))?;
    info!(path = %path.display(), "dictionary loaded");
    Ok(Arc::new(dictionary))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented morpheme tree
    Tree,
    /// One JSON object per word
    Json,
    /// Word followed by its leaf morphemes
    List,
}

#[derive(Serialize)]
struct Report<'a> {
    word: &'a str,
    prefixes: Vec<String>,
    roots: Vec<String>,
    suffixes: Vec<String>,
    tree: &'a MorphNode,
}

/// Render one parse result for output.
pub fn render(word: &str, node: &MorphNode, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Tree => node.to_string(),
        OutputFormat::Json => {
            let report = Report {
                word,
                prefixes: node.prefixes(),
                roots: node.roots(),
                suffixes: node.suffixes(),
                tree: node,
            };
            serde_json::to_string(&report)?
        }
        OutputFormat::List => {
            let leaves: Vec<String> = node
                .leaves()
                .iter()
                .map(|leaf| format!("{}:{}", leaf.text(), leaf.kind()))
                .collect();
            format!("{}\t{}", word, leaves.join(" "))
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libmorph_core::MorphemeKind;

    fn hoping() -> MorphNode {
        MorphNode::with_children(
            "hoping",
            MorphemeKind::Word,
            MorphNode::leaf("hope", MorphemeKind::Root),
            MorphNode::leaf("ing", MorphemeKind::Inflection),
        )
    }

    #[test]
    fn list_format_names_leaf_kinds() {
        let line = render("hoping", &hoping(), OutputFormat::List).unwrap();
        assert_eq!(line, "hoping\thope:Root ing:Inflection");
    }

    #[test]
    fn json_format_carries_tree_and_roots() {
        let text = render("hoping", &hoping(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["word"], "hoping");
        assert_eq!(value["roots"][0], "hope");
        assert_eq!(value["tree"]["son"]["text"], "hope");
        assert_eq!(value["tree"]["daughter"]["kind"], "Inflection");
    }

    #[test]
    fn missing_snapshot_reports_path() {
        let err = load_dictionary(Path::new("no/such/snapshot.json")).unwrap_err();
        assert!(err.to_string().contains("no/such/snapshot.json"));
    }
}
