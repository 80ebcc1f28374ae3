use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::split::Split;

/// Locations of the tokenized files of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    pub train_inputs: PathBuf,
    pub train_labels: PathBuf,
    pub dev_inputs: PathBuf,
    pub dev_labels: PathBuf,
    pub test_inputs: PathBuf,
    pub test_labels: PathBuf,
    pub input_vocab: PathBuf,
    pub label_vocab: PathBuf,
    /// Embedding table, read only when an embedding size is configured.
    pub embeddings: PathBuf,
}

impl DataPaths {
    /// Default file layout of a tokenized data folder.
    ///
    /// Id files are suffixed with the input vocabulary size they were
    /// tokenized against, e.g. `train.ids1000.in` / `train.ids1000.label`.
    pub fn for_folder<P: AsRef<Path>>(folder: P, vocab_size: usize) -> Self {
        let folder = folder.as_ref();
        let ids = |split: Split, kind: &str| folder.join(format!("{split}.ids{vocab_size}.{kind}"));

        Self {
            train_inputs: ids(Split::Train, "in"),
            train_labels: ids(Split::Train, "label"),
            dev_inputs: ids(Split::Dev, "in"),
            dev_labels: ids(Split::Dev, "label"),
            test_inputs: ids(Split::Test, "in"),
            test_labels: ids(Split::Test, "label"),
            input_vocab: folder.join(format!("vocab{vocab_size}.in")),
            label_vocab: folder.join("vocab.label"),
            embeddings: folder.join(format!("embeddings{vocab_size}.txt")),
        }
    }

    /// `(inputs, labels)` files of a split.
    pub fn split(&self, split: Split) -> (&Path, &Path) {
        match split {
            Split::Train => (&self.train_inputs, &self.train_labels),
            Split::Dev => (&self.dev_inputs, &self.dev_labels),
            Split::Test => (&self.test_inputs, &self.test_labels),
        }
    }
}

/// Parameters for loading an intent dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Folder holding the tokenized files.
    pub data_folder: PathBuf,
    /// Input vocabulary size the files were tokenized against.
    pub vocab_size: usize,
    /// Length every sequence is padded or truncated to.
    pub max_in_seq_len: usize,
    /// Maximum number of examples kept per split.
    pub max_data_size: usize,
    /// Embedding width; `None` or `Some(0)` keeps raw token ids.
    pub embed_size: Option<usize>,
    /// Explicit file locations, overriding the default layout.
    pub paths: Option<DataPaths>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from("data"),
            vocab_size: 1000,
            max_in_seq_len: 30,
            max_data_size: 100_000,
            embed_size: None,
            paths: None,
        }
    }
}

impl DatasetConfig {
    pub fn new<P: Into<PathBuf>>(
        data_folder: P,
        vocab_size: usize,
        max_in_seq_len: usize,
        max_data_size: usize,
    ) -> Self {
        Self {
            data_folder: data_folder.into(),
            vocab_size,
            max_in_seq_len,
            max_data_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_embed_size(mut self, embed_size: usize) -> Self {
        self.embed_size = Some(embed_size);
        self
    }

    /// Read a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Effective embedding width, if embeddings are enabled.
    pub fn embedding_size(&self) -> Option<usize> {
        self.embed_size.filter(|&size| size > 0)
    }

    /// Resolved file locations.
    pub fn paths(&self) -> DataPaths {
        self.paths
            .clone()
            .unwrap_or_else(|| DataPaths::for_folder(&self.data_folder, self.vocab_size))
    }
}
