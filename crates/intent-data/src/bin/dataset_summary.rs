//! Dataset summary tool
//!
//! Loads a tokenized intent corpus and prints split sizes, vocabulary size
//! and label cardinality as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use intent_data::{DatasetConfig, IntentDataset, Split};

/// CLI arguments
#[derive(Parser)]
#[command(name = "dataset_summary")]
#[command(about = "Load a tokenized intent dataset and summarize it")]
#[command(version)]
struct Cli {
    /// JSON dataset config; the flags below override its fields
    #[arg(short, long, env = "INTENT_DATA_CONFIG")]
    config: Option<PathBuf>,

    /// Folder holding the tokenized files
    #[arg(short, long, env = "INTENT_DATA_FOLDER")]
    data_folder: Option<PathBuf>,

    /// Input vocabulary size the files were tokenized against
    #[arg(short, long)]
    vocab_size: Option<usize>,

    /// Pad/truncate length
    #[arg(short = 'l', long)]
    max_len: Option<usize>,

    /// Maximum examples per split
    #[arg(short = 'n', long)]
    max_examples: Option<usize>,

    /// Embedding width (reads the embeddings file)
    #[arg(short, long)]
    embed_size: Option<usize>,

    /// Draw one training batch of this size as a smoke test
    #[arg(short, long)]
    batch_size: Option<usize>,
}

#[derive(Serialize)]
struct DatasetSummary {
    data_folder: PathBuf,
    train: usize,
    dev: usize,
    test: usize,
    vocab_size: usize,
    label_vocab_size: Option<usize>,
    num_labels: usize,
    max_in_seq_len: usize,
    embed_size: Option<usize>,
}

fn build_config(cli: &Cli) -> Result<DatasetConfig> {
    let mut config = match &cli.config {
        Some(path) => DatasetConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DatasetConfig::default(),
    };

    if let Some(folder) = &cli.data_folder {
        config.data_folder = folder.clone();
    }
    if let Some(vocab_size) = cli.vocab_size {
        config.vocab_size = vocab_size;
    }
    if cli.data_folder.is_some() || cli.vocab_size.is_some() {
        // An explicit layout would shadow the folder and vocab size flags.
        config.paths = None;
    }
    if let Some(max_len) = cli.max_len {
        config.max_in_seq_len = max_len;
    }
    if let Some(max_examples) = cli.max_examples {
        config.max_data_size = max_examples;
    }
    if let Some(embed_size) = cli.embed_size {
        config.embed_size = Some(embed_size);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intent_data=info".parse()?)
                .add_directive("dataset_summary=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let mut dataset = IntentDataset::load(&config)
        .with_context(|| format!("loading dataset from {}", config.data_folder.display()))?;

    if let Some(batch_size) = cli.batch_size {
        let batch = dataset.next_batch(batch_size).context("drawing training batch")?;
        info!(
            examples = batch.len(),
            input_width = batch.input_width,
            "drew training batch"
        );
    }

    let summary = DatasetSummary {
        data_folder: config.data_folder.clone(),
        train: dataset.split(Split::Train).len(),
        dev: dataset.split(Split::Dev).len(),
        test: dataset.split(Split::Test).len(),
        vocab_size: dataset.vocab_size(),
        label_vocab_size: dataset.label_vocab_size(),
        num_labels: dataset.num_labels(),
        max_in_seq_len: dataset.max_in_seq_len(),
        embed_size: dataset.embed_size(),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
