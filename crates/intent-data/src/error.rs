use std::path::PathBuf;

use thiserror::Error;

use crate::split::Split;

/// Errors that can occur while loading or batching an intent dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A dataset file could not be opened or read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A tokenized file contained something other than a non-negative integer.
    #[error("invalid token {token:?} at {path:?}:{line}")]
    InvalidToken {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        token: String,
    },

    /// A split has a different number of inputs and labels.
    #[error("number of {split} labels != number of {split} inputs: {labels} != {inputs}")]
    LengthMismatch {
        split: Split,
        inputs: usize,
        labels: usize,
    },

    /// A label id cannot be one-hot encoded with the known cardinality.
    #[error("label id {label} is outside 1..={num_labels}")]
    LabelOutOfRange { label: u32, num_labels: usize },

    /// A label line carried no label id.
    #[error("example {index} has no label id")]
    MissingLabel { index: usize },

    /// The embedding table has no vector for a token.
    #[error("no embedding vector for token id {0}")]
    MissingEmbedding(u32),

    /// The embedding table width disagrees with the configured size.
    #[error("embedding dimension mismatch: expected {expected}, found {found}")]
    EmbeddingDimension { expected: usize, found: usize },

    /// Batching was requested from a split with no examples.
    #[error("{0} split is empty")]
    EmptySplit(Split),

    /// A batch of size zero was requested.
    #[error("batch size must be greater than zero")]
    EmptyBatch,

    /// The configuration file is not valid JSON for a dataset config.
    #[error("invalid dataset config: {0}")]
    Config(#[from] serde_json::Error),

    /// Candle tensor construction failed.
    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),
}

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
