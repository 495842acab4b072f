use anyhow::{Context, Result};
use clap::Parser;
use libmorph_core::{Dictionary, Snapshot};
use libmorph_tools::init_logging;
use std::path::PathBuf;

/// Convert a dictionary snapshot between JSON and bincode.
///
/// The snapshot is compiled into a dictionary first, so a file with bad
/// cut rules or ending codes is never written.
#[derive(Parser)]
struct Args {
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    output: PathBuf,

    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let snapshot = Snapshot::load(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let dictionary = Dictionary::build(&snapshot)
        .with_context(|| format!("{} is not a valid dictionary", args.input.display()))?;

    snapshot
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} ({} words, {} suffix endings, {} prefixes)",
        args.output.display(),
        dictionary.word_count(),
        dictionary.suffix_table().len(),
        dictionary.prefixes().len()
    );
    Ok(())
}
