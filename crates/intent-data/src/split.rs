use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// One of the three dataset partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// All splits, in load order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Lowercase name, also used as the file name prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parallel token-id and label-id sequences of one split.
///
/// Construction guarantees `inputs.len() == labels.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitData {
    split: Split,
    inputs: Vec<Vec<u32>>,
    labels: Vec<Vec<u32>>,
}

impl SplitData {
    /// Pair up inputs and labels, rejecting count mismatches.
    pub fn new(split: Split, inputs: Vec<Vec<u32>>, labels: Vec<Vec<u32>>) -> Result<Self> {
        if inputs.len() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                split,
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            split,
            inputs,
            labels,
        })
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn inputs(&self) -> &[Vec<u32>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[Vec<u32>] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names() {
        assert_eq!(Split::Train.to_string(), "train");
        assert_eq!(Split::Dev.as_str(), "dev");
        assert_eq!(
            serde_json::to_string(&Split::Test).unwrap(),
            "\"test\""
        );
    }

    #[test]
    fn test_matching_counts() {
        let data = SplitData::new(Split::Dev, vec![vec![4, 5], vec![6]], vec![vec![1], vec![2]])
            .unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.split(), Split::Dev);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_mismatched_counts() {
        let err = SplitData::new(Split::Train, vec![vec![4], vec![5]], vec![vec![1]]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                split: Split::Train,
                inputs: 2,
                labels: 1
            }
        ));
    }
}
