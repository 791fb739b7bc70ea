//! word2vec Query Binary
//!
//! Loads a binary model and prints vectors or similarities.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use word2vec::{score_pairs, BatchConfig, Model};

/// Query a binary word2vec model
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Model file
    #[arg(short, long)]
    model: PathBuf,

    /// Print the cosine similarity of two words
    #[arg(short, long, num_args = 2, value_names = ["WORD_A", "WORD_B"])]
    similarity: Option<Vec<String>>,

    /// Print the raw vector and norm of a word
    #[arg(short, long)]
    vector: Option<String>,

    /// File of word pairs, one whitespace-separated pair per line
    #[arg(short, long)]
    pairs: Option<PathBuf>,

    /// Worker threads for --pairs (0 = auto-detect)
    #[arg(long, default_value_t = 0)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("word2vec=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let model = Model::from_path(&args.model)
        .with_context(|| format!("loading {}", args.model.display()))?;
    info!(
        "Model ready: vocab={} vector={}",
        model.vocab_size(),
        model.vector_size()
    );

    if let Some(word) = &args.vector {
        match model.vector(word) {
            (Some(v), norm) => {
                let components: Vec<String> = v.iter().map(|x| x.to_string()).collect();
                println!("{}\t{}\t{}", word, norm, components.join(" "));
            }
            (None, _) => println!("{}\t(not found)", word),
        }
    }

    if let Some(words) = &args.similarity {
        let sim = model.similarity(&words[0], &words[1])?;
        println!("{}\t{}\t{}", words[0], words[1], sim);
    }

    if let Some(path) = &args.pairs {
        let pairs = read_pairs(path)?;
        let config = BatchConfig::default().with_workers(args.workers);
        for ((a, b), result) in pairs.iter().zip(score_pairs(&model, &pairs, &config)) {
            match result {
                Ok(sim) => println!("{}\t{}\t{}", a, b, sim),
                Err(e) => println!("{}\t{}\t({})", a, b, e),
            }
        }
    }

    Ok(())
}

fn read_pairs(path: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut pairs = Vec::new();

    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [a, b] => pairs.push((a.to_string(), b.to_string())),
            _ => anyhow::bail!("{}:{}: expected two words, got {:?}", path.display(), n + 1, line),
        }
    }

    Ok(pairs)
}
