//! Label cardinality and one-hot encoding.
//!
//! Label ids are 1-based: id `k` sets position `k - 1`.

use std::collections::HashSet;

use crate::error::{DatasetError, Result};

/// Number of distinct label ids across all label lines.
pub fn count_distinct_labels<S: AsRef<[u32]>>(labels: &[S]) -> usize {
    labels
        .iter()
        .flat_map(|line| line.as_ref().iter().copied())
        .collect::<HashSet<u32>>()
        .len()
}

/// One-hot vector of length `num_labels` for a 1-based label id.
pub fn one_hot(label: u32, num_labels: usize) -> Result<Vec<u32>> {
    if label == 0 || label as usize > num_labels {
        return Err(DatasetError::LabelOutOfRange { label, num_labels });
    }
    let mut encoded = vec![0u32; num_labels];
    encoded[label as usize - 1] = 1;
    Ok(encoded)
}

/// Encode the first id of each label line.
pub fn one_hot_labels<S: AsRef<[u32]>>(labels: &[S], num_labels: usize) -> Result<Vec<Vec<u32>>> {
    labels
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let label = line
                .as_ref()
                .first()
                .copied()
                .ok_or(DatasetError::MissingLabel { index })?;
            one_hot(label, num_labels)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot() {
        assert_eq!(one_hot(3, 5).unwrap(), vec![0, 0, 1, 0, 0]);
        assert_eq!(one_hot(1, 2).unwrap(), vec![1, 0]);
        assert_eq!(one_hot(2, 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_one_hot_out_of_range() {
        assert!(matches!(
            one_hot(0, 4),
            Err(DatasetError::LabelOutOfRange { label: 0, .. })
        ));
        assert!(matches!(
            one_hot(5, 4),
            Err(DatasetError::LabelOutOfRange { label: 5, num_labels: 4 })
        ));
    }

    #[test]
    fn test_count_distinct_labels() {
        let labels = vec![vec![1], vec![3], vec![1], vec![2, 3], vec![]];
        assert_eq!(count_distinct_labels(&labels), 3);
        assert_eq!(count_distinct_labels::<Vec<u32>>(&[]), 0);
    }

    #[test]
    fn test_one_hot_labels_uses_first_id() {
        let labels = vec![vec![2], vec![1, 3]];
        let encoded = one_hot_labels(&labels, 3).unwrap();
        assert_eq!(encoded, vec![vec![0, 1, 0], vec![1, 0, 0]]);
    }

    #[test]
    fn test_one_hot_labels_empty_line() {
        let labels = vec![vec![1], vec![]];
        assert!(matches!(
            one_hot_labels(&labels, 2),
            Err(DatasetError::MissingLabel { index: 1 })
        ));
    }
}
