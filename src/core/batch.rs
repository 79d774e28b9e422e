//! Batch processing utilities for the classification pipeline.
//!
//! This module provides structures for handling batched inputs, including
//! batched path data, sampling, and the tensor aliases used for batched
//! processing.

use crate::core::traits::Sampler;
use std::sync::Arc;

/// A 2-dimensional tensor represented as a 2D array of f32 values.
pub type Tensor2D = ndarray::Array2<f32>;

/// A 4-dimensional tensor represented as a 4D array of f32 values.
pub type Tensor4D = ndarray::Array4<f32>;

/// Data structure for holding batched input data.
///
/// This struct contains the instances, input paths, and indexes for a batch
/// of inputs. Inputs that arrive as raw bytes rather than files get synthetic
/// instance names.
pub struct BatchData {
    /// The instances in the batch, stored as `Arc<str>` for efficient sharing.
    pub instances: Vec<Arc<str>>,
    /// The input paths for the instances in the batch.
    pub input_paths: Vec<Arc<str>>,
    /// The indexes of the instances in the original data set.
    pub indexes: Vec<usize>,
}

impl BatchData {
    /// Creates a new BatchData instance from shared `Arc<str>` paths and indexes.
    pub fn from_shared_arc_paths(paths: Vec<Arc<str>>, indexes: Vec<usize>) -> Self {
        let input_paths = paths.clone();
        Self {
            instances: paths,
            input_paths,
            indexes,
        }
    }

    /// Returns the number of instances in the batch.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Checks if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns an iterator over the instances as string slices.
    pub fn instances_as_str(&self) -> impl Iterator<Item = &str> + '_ {
        self.instances.iter().map(|arc| arc.as_ref())
    }
}

/// A sampler that creates batches of data with a specified batch size.
#[derive(Debug)]
pub struct BatchSampler {
    /// The size of each batch.
    batch_size: usize,
}

impl BatchSampler {
    /// Creates a new BatchSampler with the specified batch size.
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Returns the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Samples batches of data from a vector of strings.
    ///
    /// A batch size of zero yields no batches.
    pub fn sample_batch(&self, data: Vec<String>) -> Vec<BatchData> {
        if self.batch_size == 0 {
            return Vec::new();
        }

        data.chunks(self.batch_size)
            .enumerate()
            .map(|(batch_idx, chunk)| {
                let start_idx = batch_idx * self.batch_size;
                let indexes: Vec<usize> = (0..chunk.len()).map(|i| start_idx + i).collect();

                BatchData::from_shared_arc_paths(
                    chunk.iter().map(|s| Arc::from(s.as_str())).collect(),
                    indexes,
                )
            })
            .collect()
    }
}

impl Sampler<String> for BatchSampler {
    type BatchData = BatchData;

    fn sample(&self, data: Vec<String>) -> Vec<Self::BatchData> {
        self.sample_batch(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_sampler_chunks_with_indexes() {
        let sampler = BatchSampler::new(2);
        let data = vec![
            "a.png".to_string(),
            "b.png".to_string(),
            "c.png".to_string(),
        ];

        let batches = sampler.sample_batch(data);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[0].indexes, vec![0, 1]);
        assert_eq!(batches[1].len(), 1);
        assert_eq!(batches[1].indexes, vec![2]);
        assert_eq!(
            batches[1].instances_as_str().collect::<Vec<_>>(),
            vec!["c.png"]
        );
    }

    #[test]
    fn test_batch_sampler_zero_batch_size() {
        let sampler = BatchSampler::new(0);
        let batches = sampler.sample_batch(vec!["a.png".to_string()]);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_batch_data_empty() {
        let batch = BatchData::from_shared_arc_paths(Vec::new(), Vec::new());
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }
}
