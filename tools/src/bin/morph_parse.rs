use anyhow::{Context, Result};
use clap::Parser;
use libmorph_core::utils::normalize;
use libmorph_core::{Config, MorphParser};
use libmorph_tools::{OutputFormat, init_logging, load_dictionary, render};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Decompose English words into morphemes.
///
/// Words are taken from the command line, or one per line from stdin when
/// none are given.
#[derive(Parser)]
struct Args {
    /// dictionary snapshot (.json, .bincode or .bin)
    #[arg(long)]
    snapshot: PathBuf,

    /// parser configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "tree")]
    format: OutputFormat,

    /// log decomposition steps to stderr
    #[arg(long, short)]
    verbose: bool,

    words: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    let dictionary = load_dictionary(&args.snapshot)?;
    let mut parser = MorphParser::with_config(dictionary, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut emit = |raw: &str| -> Result<()> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(());
        }
        let node = parser.parse(&word);
        writeln!(out, "{}", render(&word, &node, args.format)?)?;
        Ok(())
    };

    if args.words.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&line.context("failed to read stdin")?)?;
        }
    } else {
        for word in &args.words {
            emit(word)?;
        }
    }

    let (hits, misses) = parser.cache_stats();
    tracing::debug!(hits, misses, cached = parser.cache_size(), "done");
    Ok(())
}
