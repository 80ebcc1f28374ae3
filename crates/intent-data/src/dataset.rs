//! # Intent Dataset
//!
//! Owns the three splits of a tokenized intent-classification corpus and
//! turns them into padded, optionally embedded batches with one-hot labels.
//! Training batches are drawn from a cursor that wraps around the train
//! split.

use std::fmt;

use tracing::{debug, info};

use crate::batch::{Batch, BatchInputs};
use crate::config::DatasetConfig;
use crate::embedding::{expand_sequence, EmbeddingTable, WordEmbedding};
use crate::error::{DatasetError, Result};
use crate::labels::{count_distinct_labels, one_hot_labels};
use crate::padding::pad_sequences;
use crate::reader::{count_lines, read_id_file};
use crate::split::{Split, SplitData};

type BoxedEmbedding = Box<dyn WordEmbedding + Send + Sync>;

/// Train/dev/test intent data with a wrapping training cursor.
pub struct IntentDataset {
    train: SplitData,
    dev: SplitData,
    test: SplitData,
    vocab_size: usize,
    label_vocab_size: Option<usize>,
    num_labels: usize,
    max_in_seq_len: usize,
    embedding: Option<BoxedEmbedding>,
    batch_index: usize,
}

impl IntentDataset {
    /// Load all splits and vocabularies described by `config`.
    ///
    /// Each split is truncated to `max_data_size` examples. When an embedding
    /// size is configured, the embedding table is read from the configured
    /// embeddings file and must have exactly that width.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let paths = config.paths();

        let read_split = |split: Split| -> Result<SplitData> {
            let (inputs_path, labels_path) = paths.split(split);
            let inputs = read_id_file(inputs_path, config.max_data_size)?;
            let labels = read_id_file(labels_path, config.max_data_size)?;
            SplitData::new(split, inputs, labels)
        };

        let [train, dev, test] = Split::ALL.map(read_split);
        let (train, dev, test) = (train?, dev?, test?);

        let vocab_size = count_lines(&paths.input_vocab)?;
        let label_vocab_size = count_lines(&paths.label_vocab)?;

        let mut dataset = Self::from_splits(train, dev, test, vocab_size, config.max_in_seq_len);
        dataset.label_vocab_size = Some(label_vocab_size);

        if let Some(embed_size) = config.embedding_size() {
            let table = EmbeddingTable::from_file(&paths.embeddings)?;
            if table.dim() != embed_size {
                return Err(DatasetError::EmbeddingDimension {
                    expected: embed_size,
                    found: table.dim(),
                });
            }
            dataset = dataset.with_embedding(table);
        }

        info!(
            train = dataset.train.len(),
            dev = dataset.dev.len(),
            test = dataset.test.len(),
            vocab_size = dataset.vocab_size,
            num_labels = dataset.num_labels,
            "loaded intent dataset from {}",
            config.data_folder.display()
        );

        Ok(dataset)
    }

    /// Build a dataset from splits that are already in memory.
    ///
    /// The label cardinality is the number of distinct label ids in `train`.
    pub fn from_splits(
        train: SplitData,
        dev: SplitData,
        test: SplitData,
        vocab_size: usize,
        max_in_seq_len: usize,
    ) -> Self {
        let num_labels = count_distinct_labels(train.labels());

        Self {
            train,
            dev,
            test,
            vocab_size,
            label_vocab_size: None,
            num_labels,
            max_in_seq_len,
            embedding: None,
            batch_index: 0,
        }
    }

    /// Expand padded token ids through `embedding` in every batch.
    #[must_use]
    pub fn with_embedding<E>(mut self, embedding: E) -> Self
    where
        E: WordEmbedding + Send + Sync + 'static,
    {
        self.embedding = Some(Box::new(embedding));
        self
    }

    /// Number of entries in the input vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Number of entries in the label vocabulary file, when loaded from disk.
    pub fn label_vocab_size(&self) -> Option<usize> {
        self.label_vocab_size
    }

    /// Width of the one-hot label vectors.
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    pub fn max_in_seq_len(&self) -> usize {
        self.max_in_seq_len
    }

    pub fn set_max_in_seq_len(&mut self, max_in_seq_len: usize) {
        self.max_in_seq_len = max_in_seq_len;
    }

    /// Embedding width, if an embedding is attached.
    pub fn embed_size(&self) -> Option<usize> {
        self.embedding.as_ref().map(|e| e.dim())
    }

    pub fn split(&self, split: Split) -> &SplitData {
        match split {
            Split::Train => &self.train,
            Split::Dev => &self.dev,
            Split::Test => &self.test,
        }
    }

    /// Current offset into the train split.
    pub fn cursor(&self) -> usize {
        self.batch_index
    }

    pub fn reset_cursor(&mut self) {
        self.batch_index = 0;
    }

    /// Next `batch_size` training examples starting at the cursor.
    ///
    /// A batch running past the end of the split continues from its start.
    /// The cursor is left just after the last example taken, wrapping to 0
    /// when that is the end of the split.
    pub fn next_batch(&mut self, batch_size: usize) -> Result<Batch> {
        if batch_size == 0 {
            return Err(DatasetError::EmptyBatch);
        }
        let size = self.train.len();
        if size == 0 {
            return Err(DatasetError::EmptySplit(Split::Train));
        }

        let start = self.batch_index;
        let indices = (0..batch_size).map(|offset| (start + offset) % size);
        let (inputs, labels): (Vec<&Vec<u32>>, Vec<&Vec<u32>>) = indices
            .map(|idx| (&self.train.inputs()[idx], &self.train.labels()[idx]))
            .unzip();

        let batch = self.make_batch(&inputs, &labels)?;
        self.batch_index = (start + batch_size) % size;

        debug!(
            start,
            batch_size,
            next = self.batch_index,
            "drew training batch"
        );
        Ok(batch)
    }

    /// The whole test split as one batch.
    pub fn test_data(&self) -> Result<Batch> {
        self.split_batch(Split::Test)
    }

    /// The whole dev split as one batch.
    pub fn dev_data(&self) -> Result<Batch> {
        self.split_batch(Split::Dev)
    }

    fn split_batch(&self, split: Split) -> Result<Batch> {
        let data = self.split(split);
        self.make_batch(data.inputs(), data.labels())
    }

    fn make_batch<S: AsRef<[u32]>>(&self, inputs: &[S], labels: &[S]) -> Result<Batch> {
        let padded = pad_sequences(inputs, self.max_in_seq_len);
        let labels = one_hot_labels(labels, self.num_labels)?;

        let (inputs, input_width) = match &self.embedding {
            Some(embedding) => {
                let rows = padded
                    .iter()
                    .map(|seq| expand_sequence(embedding.as_ref(), seq))
                    .collect::<Result<Vec<_>>>()?;
                (
                    BatchInputs::Embedded(rows),
                    self.max_in_seq_len * embedding.dim(),
                )
            }
            None => (BatchInputs::Ids(padded), self.max_in_seq_len),
        };

        Ok(Batch {
            inputs,
            labels,
            input_width,
            num_labels: self.num_labels,
        })
    }
}

impl fmt::Debug for IntentDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentDataset")
            .field("train", &self.train.len())
            .field("dev", &self.dev.len())
            .field("test", &self.test.len())
            .field("vocab_size", &self.vocab_size)
            .field("num_labels", &self.num_labels)
            .field("max_in_seq_len", &self.max_in_seq_len)
            .field("embed_size", &self.embed_size())
            .field("batch_index", &self.batch_index)
            .finish()
    }
}
