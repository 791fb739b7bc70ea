//! word2vec Vocabulary Reducer
//!
//! Filters a binary model down to the words listed in a text file.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use word2vec::{reduce_files, ReduceConfig};

/// Shrink a binary word2vec model to a word list
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Newline-delimited word list
    #[arg(short, long)]
    input: PathBuf,

    /// Source model
    #[arg(short, long)]
    model: PathBuf,

    /// Destination model
    #[arg(short, long)]
    output: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,

    /// Records between progress messages (0 = never)
    #[arg(long, default_value_t = 100_000)]
    progress_every: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Without --log no subscriber is installed and every event is dropped.
    if args.log {
        fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("word2vec=debug".parse()?))
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ReduceConfig::default()
        .with_word_list(&args.input)
        .with_model(&args.model)
        .with_output(&args.output)
        .with_progress_every(args.progress_every);

    let stats = reduce_files(&config)
        .with_context(|| format!("reducing {}", args.model.display()))?;
    println!("{} of {} records kept", stats.kept, stats.scanned);

    Ok(())
}
