use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use libviet::{AutocorrectConfig, Engine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libviet")]
#[command(about = "Vietnamese next-word suggestion and autocorrect")]
#[command(version)]
struct Cli {
    /// Directory holding ngram.bin, vocab.csv and bigram.csv
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// What to do with each input line
    #[arg(long, value_enum, default_value_t = Mode::Suggest)]
    mode: Mode,

    /// Number of suggestions
    #[arg(short, default_value_t = 5)]
    k: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// `context|prefix` lines -> next-word suggestions
    Suggest,
    /// Live token-by-token correction
    Correct,
    /// Whole-sentence contextual correction
    Sentence,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AutocorrectConfig::load_toml(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => AutocorrectConfig::default(),
    };

    let engine = Engine::from_data_dir(&cli.data_dir, config)
        .with_context(|| format!("failed to load data from {}", cli.data_dir.display()))?;
    info!(mode = ?cli.mode, k = cli.k, "reading stdin");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let raw = line.context("failed to read stdin")?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }

        match cli.mode {
            Mode::Suggest => {
                let (context, prefix) = match input.split_once('|') {
                    Some((c, p)) => (c, Some(p)),
                    None => (input, None),
                };
                let words = engine.suggest(context, prefix, cli.k);
                if words.is_empty() {
                    writeln!(out, "  → (no suggestions)")?;
                } else {
                    for (i, w) in words.iter().enumerate() {
                        writeln!(out, "  {}. {}", i + 1, w)?;
                    }
                }
            }
            Mode::Correct => writeln!(out, "  → {}", engine.autocorrect_line(input))?,
            Mode::Sentence => writeln!(out, "  → {}", engine.correct_sentence(input))?,
        }
        out.flush()?;
    }

    let (suggest, correct) = engine.cache_stats();
    info!(
        suggest_hits = suggest.hits,
        suggest_misses = suggest.misses,
        correct_hits = correct.hits,
        correct_misses = correct.misses,
        "done"
    );
    Ok(())
}
