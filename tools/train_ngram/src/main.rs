use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use libviet_core::{Config, NGramModel};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Train the next-word model from a one-sentence-per-line corpus and write
/// the versioned artifact loaded by the engine.
#[derive(Parser, Debug)]
#[command(name = "train_ngram")]
#[command(version)]
struct Args {
    /// UTF-8 training corpus
    #[arg(long)]
    corpus: PathBuf,

    /// Output artifact path
    #[arg(long, default_value = "data/ngram.bin")]
    output: PathBuf,

    /// TOML config providing defaults for the options below
    #[arg(long)]
    config: Option<PathBuf>,

    /// N-gram order
    #[arg(long)]
    order: Option<usize>,

    /// Absolute discount D in (0, 1)
    #[arg(long)]
    discount: Option<f64>,

    /// Candidate pool per prefix bucket
    #[arg(long)]
    pool: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(order) = args.order {
        cfg.order = order;
    }
    if let Some(discount) = args.discount {
        cfg.discount = discount;
    }
    if let Some(pool) = args.pool {
        cfg.extra_pool = pool;
    }

    if cfg.order < 2 {
        bail!("--order must be at least 2, got {}", cfg.order);
    }
    let mut model = NGramModel::from_config(&cfg).context("invalid model settings")?;

    info!(
        corpus = %args.corpus.display(),
        order = cfg.order,
        discount = cfg.discount,
        pool = cfg.extra_pool,
        "training"
    );

    model
        .fit(&args.corpus)
        .with_context(|| format!("failed to train on {}", args.corpus.display()))?;

    let stats = model.stats();
    info!(
        vocab = stats.vocab_size,
        histories = stats.histories,
        unique_bigrams = stats.unique_bigrams,
        ngram_types = ?stats.ngram_types,
        "model statistics"
    );

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    model
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Wrote {}", args.output.display());
    Ok(())
}
