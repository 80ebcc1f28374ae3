//! Model-ready batches.

use candle_core::{Device, Tensor};

use crate::error::Result;

/// Per-example model inputs of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchInputs {
    /// Padded token ids, `max_len` per example.
    Ids(Vec<Vec<u32>>),
    /// Concatenated embedding vectors, `max_len * dim` per example.
    Embedded(Vec<Vec<f32>>),
}

impl BatchInputs {
    pub fn len(&self) -> usize {
        match self {
            BatchInputs::Ids(rows) => rows.len(),
            BatchInputs::Embedded(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Padded ids, when no embedding was applied.
    pub fn as_ids(&self) -> Option<&[Vec<u32>]> {
        match self {
            BatchInputs::Ids(rows) => Some(rows),
            BatchInputs::Embedded(_) => None,
        }
    }

    /// Embedded rows, when an embedding was applied.
    pub fn as_embedded(&self) -> Option<&[Vec<f32>]> {
        match self {
            BatchInputs::Ids(_) => None,
            BatchInputs::Embedded(rows) => Some(rows),
        }
    }
}

/// A padded batch with one-hot labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub inputs: BatchInputs,
    /// One-hot rows of length `num_labels`.
    pub labels: Vec<Vec<u32>>,
    /// Row width of `inputs`.
    pub input_width: usize,
    pub num_labels: usize,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Convert to `(inputs, labels)` tensors on `device`.
    ///
    /// Inputs are `u32 [n, max_len]` or `f32 [n, max_len * dim]`; labels are
    /// `u32 [n, num_labels]`.
    pub fn to_tensors(&self, device: &Device) -> Result<(Tensor, Tensor)> {
        let n = self.len();
        let inputs = match &self.inputs {
            BatchInputs::Ids(rows) => {
                let flat: Vec<u32> = rows.iter().flatten().copied().collect();
                Tensor::from_vec(flat, (n, self.input_width), device)?
            }
            BatchInputs::Embedded(rows) => {
                let flat: Vec<f32> = rows.iter().flatten().copied().collect();
                Tensor::from_vec(flat, (n, self.input_width), device)?
            }
        };

        let flat_labels: Vec<u32> = self.labels.iter().flatten().copied().collect();
        let labels = Tensor::from_vec(flat_labels, (n, self.num_labels), device)?;

        Ok((inputs, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::DType;

    #[test]
    fn test_id_batch_tensors() {
        let batch = Batch {
            inputs: BatchInputs::Ids(vec![vec![4, 5, 0], vec![6, 0, 0]]),
            labels: vec![vec![1, 0], vec![0, 1]],
            input_width: 3,
            num_labels: 2,
        };

        let (inputs, labels) = batch.to_tensors(&Device::Cpu).unwrap();
        assert_eq!(inputs.dims(), &[2, 3]);
        assert_eq!(inputs.dtype(), DType::U32);
        assert_eq!(labels.dims(), &[2, 2]);
        assert_eq!(
            labels.to_vec2::<u32>().unwrap(),
            vec![vec![1, 0], vec![0, 1]]
        );
    }

    #[test]
    fn test_embedded_batch_tensors() {
        let batch = Batch {
            inputs: BatchInputs::Embedded(vec![vec![0.5, 1.0, 0.0, 0.0]]),
            labels: vec![vec![0, 0, 1]],
            input_width: 4,
            num_labels: 3,
        };

        let (inputs, labels) = batch.to_tensors(&Device::Cpu).unwrap();
        assert_eq!(inputs.dims(), &[1, 4]);
        assert_eq!(inputs.dtype(), DType::F32);
        assert_eq!(labels.dims(), &[1, 3]);
        assert!(batch.inputs.as_ids().is_none());
        assert_eq!(batch.inputs.as_embedded().unwrap().len(), 1);
    }
}
