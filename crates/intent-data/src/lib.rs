//! # Intent Data
//!
//! Loading and batching of tokenized intent-classification corpora. A data
//! folder holds train/dev/test files of whitespace-separated token ids plus
//! input and label vocabularies; [`IntentDataset`] reads them, checks that
//! every split has as many labels as inputs, and serves padded batches with
//! one-hot labels, optionally expanded through a word embedding.
//!
//! ## Quick Start
//!
//! ```rust
//! use intent_data::{IntentDataset, Split, SplitData};
//!
//! let train = SplitData::new(
//!     Split::Train,
//!     vec![vec![4, 5], vec![6], vec![7, 8, 9]],
//!     vec![vec![1], vec![2], vec![1]],
//! ).unwrap();
//! let dev = SplitData::new(Split::Dev, vec![], vec![]).unwrap();
//! let test = SplitData::new(Split::Test, vec![vec![5]], vec![vec![2]]).unwrap();
//!
//! let mut dataset = IntentDataset::from_splits(train, dev, test, 10, 3);
//! let batch = dataset.next_batch(2).unwrap();
//!
//! assert_eq!(batch.inputs.as_ids().unwrap()[0], vec![4, 5, 0]);
//! assert_eq!(batch.labels[1], vec![0, 1]);
//! ```
pub mod batch;
pub mod config;
pub mod dataset;
pub mod embedding;
pub mod error;
pub mod labels;
pub mod padding;
pub mod reader;
pub mod split;

// Re-export primary API
pub use batch::{Batch, BatchInputs};
pub use config::{DataPaths, DatasetConfig};
pub use dataset::IntentDataset;
pub use embedding::{EmbeddingTable, WordEmbedding};
pub use error::{DatasetError, Result};
pub use padding::PAD_ID;
pub use split::{Split, SplitData};
