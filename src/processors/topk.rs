//! Top-k extraction from classification outputs.

use crate::core::MotifError;
use std::collections::HashMap;

/// Top-k results for a batch of classification outputs.
#[derive(Debug, Clone)]
pub struct TopkResult {
    /// Top-k class indexes for each prediction, best first.
    pub indexes: Vec<Vec<usize>>,
    /// Scores corresponding to the indexes.
    pub scores: Vec<Vec<f32>>,
    /// Class names for each prediction, if a mapping was provided.
    pub class_names: Option<Vec<Vec<String>>>,
}

/// Extracts the top-k most confident classes from model outputs.
#[derive(Debug)]
pub struct Topk {
    class_id_map: Option<HashMap<usize, String>>,
}

impl Topk {
    /// Creates a Topk processor with an optional class ID to name mapping.
    pub fn new(class_id_map: Option<HashMap<usize, String>>) -> Self {
        Self { class_id_map }
    }

    /// Creates a Topk processor without class name mapping.
    pub fn without_class_names() -> Self {
        Self::new(None)
    }

    /// Creates a Topk processor from an ordered list of class names, where the
    /// vector index is the class ID.
    pub fn from_class_names<S: Into<String>>(class_names: impl IntoIterator<Item = S>) -> Self {
        let class_id_map: HashMap<usize, String> = class_names
            .into_iter()
            .enumerate()
            .map(|(id, name)| (id, name.into()))
            .collect();
        Self::new(Some(class_id_map))
    }

    /// Processes a batch of per-class score vectors into top-k results.
    ///
    /// `k` is clamped to the number of classes in each prediction. An empty
    /// batch yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is 0 or any prediction vector is empty.
    pub fn process(&self, predictions: &[Vec<f32>], k: usize) -> Result<TopkResult, MotifError> {
        if k == 0 {
            return Err(MotifError::invalid_input("k must be greater than 0"));
        }

        if predictions.is_empty() {
            return Ok(TopkResult {
                indexes: vec![],
                scores: vec![],
                class_names: None,
            });
        }

        let mut all_indexes = Vec::with_capacity(predictions.len());
        let mut all_scores = Vec::with_capacity(predictions.len());
        let mut all_class_names = self
            .class_id_map
            .as_ref()
            .map(|_| Vec::with_capacity(predictions.len()));

        for prediction in predictions {
            if prediction.is_empty() {
                return Err(MotifError::invalid_input("empty prediction vector"));
            }

            let effective_k = k.min(prediction.len());
            let (top_indexes, top_scores) = extract_topk(prediction, effective_k);

            if let Some(ref mut class_names_vec) = all_class_names {
                class_names_vec.push(self.map_indexes_to_names(&top_indexes));
            }
            all_indexes.push(top_indexes);
            all_scores.push(top_scores);
        }

        Ok(TopkResult {
            indexes: all_indexes,
            scores: all_scores,
            class_names: all_class_names,
        })
    }

    /// Processes a single per-class score vector.
    pub fn process_single(&self, prediction: &[f32], k: usize) -> Result<TopkResult, MotifError> {
        self.process(&[prediction.to_vec()], k)
    }

    /// Looks up the class name for a class ID.
    pub fn get_class_name(&self, class_id: usize) -> Option<&String> {
        self.class_id_map.as_ref()?.get(&class_id)
    }

    /// Returns the number of classes in the mapping, if one was provided.
    pub fn num_classes(&self) -> Option<usize> {
        self.class_id_map.as_ref().map(|map| map.len())
    }

    fn map_indexes_to_names(&self, indexes: &[usize]) -> Vec<String> {
        if let Some(ref class_map) = self.class_id_map {
            indexes
                .iter()
                .map(|&idx| {
                    class_map
                        .get(&idx)
                        .cloned()
                        .unwrap_or_else(|| format!("Unknown({idx})"))
                })
                .collect()
        } else {
            indexes.iter().map(|&idx| idx.to_string()).collect()
        }
    }
}

impl Default for Topk {
    fn default() -> Self {
        Self::without_class_names()
    }
}

fn extract_topk(prediction: &[f32], k: usize) -> (Vec<usize>, Vec<f32>) {
    let mut indexed_scores: Vec<(usize, f32)> =
        prediction.iter().copied().enumerate().collect();

    // NaN scores sort last
    indexed_scores.sort_by(|a, b| match (a.1.is_nan(), b.1.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.1.total_cmp(&a.1),
    });

    indexed_scores.into_iter().take(k).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_topk_nan_sorts_last() {
        let (indexes, scores) = extract_topk(&[f32::NAN, 0.2, 0.7, f32::NAN, 0.1], 3);
        assert_eq!(indexes, vec![2, 1, 4]);
        assert!(scores.iter().all(|s| !s.is_nan()));

        // With k covering the full slice, NaN entries trail the finite ones.
        let (indexes, _) = extract_topk(&[f32::NAN, 0.5], 2);
        assert_eq!(indexes, vec![1, 0]);
    }

    #[test]
    fn test_topk_without_class_names() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8, 0.1], vec![0.7, 0.2, 0.1]];

        let result = topk.process(&predictions, 2).unwrap();
        assert_eq!(result.indexes.len(), 2);
        assert_eq!(result.indexes[0][0], 1);
        assert_eq!(result.indexes[1], vec![0, 1]);
        assert!(result.class_names.is_none());
    }

    #[test]
    fn test_topk_with_class_names() {
        let topk = Topk::from_class_names(["kawung", "parang", "megamendung"]);
        let predictions = vec![vec![0.1, 0.8, 0.1]];

        let result = topk.process(&predictions, 2).unwrap();
        assert_eq!(result.indexes[0][0], 1);
        assert_eq!(result.class_names.as_ref().unwrap()[0][0], "parang");
    }

    #[test]
    fn test_topk_k_clamped_to_class_count() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8]];

        let result = topk.process(&predictions, 5).unwrap();
        assert_eq!(result.indexes[0].len(), 2);
    }

    #[test]
    fn test_topk_zero_k_rejected() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8, 0.1]];
        assert!(topk.process(&predictions, 0).is_err());
    }

    #[test]
    fn test_topk_empty_batch() {
        let topk = Topk::without_class_names();
        let result = topk.process(&[], 3).unwrap();
        assert!(result.indexes.is_empty());
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_process_single() {
        let topk = Topk::without_class_names();
        let result = topk.process_single(&[0.1, 0.8, 0.1], 1).unwrap();
        assert_eq!(result.indexes, vec![vec![1]]);
        assert!((result.scores[0][0] - 0.8).abs() < 1e-6);
    }
}
