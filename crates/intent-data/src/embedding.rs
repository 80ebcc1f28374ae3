//! # Word Embeddings
//!
//! Token id to vector lookup used to expand padded sequences. How the
//! vectors are trained is outside this crate; anything that can answer a
//! lookup implements [`WordEmbedding`]. [`EmbeddingTable`] is the in-memory
//! implementation, loadable from a plain text file with one
//! `<token_id> <v1> ... <vN>` row per line.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{DatasetError, Result};

/// Fixed-width token embedding lookup.
pub trait WordEmbedding {
    /// Width of every vector.
    fn dim(&self) -> usize;

    /// Vector for `token`, if known.
    fn embedding(&self, token: u32) -> Option<&[f32]>;
}

/// In-memory embedding table keyed by token id.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    dim: usize,
    vectors: HashMap<u32, Vec<f32>>,
}

impl EmbeddingTable {
    /// Create an empty table of the given width.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: HashMap::new(),
        }
    }

    /// Add or replace the vector of `token`.
    pub fn insert(&mut self, token: u32, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dim {
            return Err(DatasetError::EmbeddingDimension {
                expected: self.dim,
                found: vector.len(),
            });
        }
        self.vectors.insert(token, vector);
        Ok(())
    }

    /// Load a table from a text file; the width is taken from the first row.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut table: Option<Self> = None;
        for (idx, line) in content.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(first) = fields.next() else {
                continue;
            };

            let invalid = |token: &str| DatasetError::InvalidToken {
                path: path.to_path_buf(),
                line: idx + 1,
                token: token.to_string(),
            };

            let token: u32 = first.parse().map_err(|_| invalid(first))?;
            let vector = fields
                .map(|v| v.parse::<f32>().map_err(|_| invalid(v)))
                .collect::<Result<Vec<f32>>>()?;

            table
                .get_or_insert_with(|| Self::new(vector.len()))
                .insert(token, vector)?;
        }

        let table = table.unwrap_or_default();
        info!(
            path = %path.display(),
            tokens = table.len(),
            dim = table.dim,
            "loaded embedding table"
        );
        Ok(table)
    }

    /// Number of tokens with a vector.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl WordEmbedding for EmbeddingTable {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embedding(&self, token: u32) -> Option<&[f32]> {
        self.vectors.get(&token).map(Vec::as_slice)
    }
}

/// Concatenate the vectors of every token in `sequence`.
pub fn expand_sequence<E: WordEmbedding + ?Sized>(embedding: &E, sequence: &[u32]) -> Result<Vec<f32>> {
    let mut expanded = Vec::with_capacity(sequence.len() * embedding.dim());
    for &token in sequence {
        let vector = embedding
            .embedding(token)
            .ok_or(DatasetError::MissingEmbedding(token))?;
        expanded.extend_from_slice(vector);
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn small_table() -> EmbeddingTable {
        let mut table = EmbeddingTable::new(2);
        table.insert(0, vec![0.0, 0.0]).unwrap();
        table.insert(5, vec![0.5, -1.0]).unwrap();
        table.insert(9, vec![2.0, 3.0]).unwrap();
        table
    }

    #[test]
    fn test_expand_sequence() {
        let table = small_table();
        let expanded = expand_sequence(&table, &[5, 9, 0]).unwrap();
        assert_eq!(expanded, vec![0.5, -1.0, 2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_token() {
        let table = small_table();
        assert!(matches!(
            expand_sequence(&table, &[5, 7]),
            Err(DatasetError::MissingEmbedding(7))
        ));
    }

    #[test]
    fn test_insert_wrong_width() {
        let mut table = EmbeddingTable::new(3);
        let err = table.insert(1, vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::EmbeddingDimension {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 0.0 0.0 0.0").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "4 0.25 1.5 -2").unwrap();
        let table = EmbeddingTable::from_file(file.path()).unwrap();

        assert_eq!(table.dim(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.embedding(4), Some(&[0.25, 1.5, -2.0][..]));
        assert_eq!(table.embedding(1), None);
    }

    #[test]
    fn test_from_file_ragged_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 1.0 2.0").unwrap();
        writeln!(file, "1 1.0").unwrap();
        assert!(matches!(
            EmbeddingTable::from_file(file.path()),
            Err(DatasetError::EmbeddingDimension { .. })
        ));
    }
}
