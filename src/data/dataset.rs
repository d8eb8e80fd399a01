use burn::data::dataloader::batcher::Batcher;
use burn::data::dataset::Dataset;
use burn::prelude::Backend;
use serde::{Deserialize, Serialize};

use crate::data::batcher::{TextBatch, TextBatcher};

/// One vectorized record: fixed-length ids plus its one-hot label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSample {
    pub ids:         Vec<u32>,
    pub label:       Vec<f32>,
    pub class_index: usize,
}

impl TextSample {
    /// Count of non-padding ids
    pub fn real_len(&self) -> usize {
        self.ids.iter().filter(|&&id| id != 0).count()
    }
}

pub struct TextDataset {
    samples: Vec<TextSample>,
}

impl TextDataset {
    pub fn new(samples: Vec<TextSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }

    pub fn samples(&self) -> &[TextSample] { &self.samples }

    /// Samples per class index
    pub fn class_counts(&self, num_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; num_classes];
        for s in &self.samples {
            if let Some(c) = counts.get_mut(s.class_index) {
                *c += 1;
            }
        }
        counts
    }
}

impl Dataset<TextSample> for TextDataset {
    fn get(&self, index: usize) -> Option<TextSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

/// A shuffled split, grouped into batches of `batch_size`.
/// The last batch holds the remainder and may be shorter.
pub struct PreparedSplit {
    dataset:    TextDataset,
    batch_size: usize,
}

impl PreparedSplit {
    pub fn new(samples: Vec<TextSample>, batch_size: usize) -> Self {
        Self {
            dataset:    TextDataset::new(samples),
            batch_size: batch_size.max(1),
        }
    }

    pub fn dataset(&self) -> &TextDataset { &self.dataset }

    pub fn batch_size(&self) -> usize { self.batch_size }

    pub fn batches(&self) -> std::slice::Chunks<'_, TextSample> {
        self.dataset.samples.chunks(self.batch_size)
    }

    pub fn num_batches(&self) -> usize {
        self.dataset.samples.len().div_ceil(self.batch_size)
    }

    /// Stack every batch into tensors on the batcher's device.
    pub fn to_tensor_batches<B: Backend>(&self, batcher: &TextBatcher<B>) -> Vec<TextBatch<B>> {
        self.batches().map(|b| batcher.batch(b.to_vec())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    fn sample(class_index: usize) -> TextSample {
        TextSample { ids: vec![3, 4, 0], label: vec![1.0, 0.0], class_index }
    }

    #[test]
    fn test_batches_cover_all_samples() {
        let split = PreparedSplit::new((0..7).map(|i| sample(i % 2)).collect(), 3);
        let sizes: Vec<usize> = split.batches().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(split.num_batches(), 3);
    }

    #[test]
    fn test_tensor_batches_keep_shapes_with_short_tail() {
        let batcher = TextBatcher::<NdArray>::new(Default::default());
        let split = PreparedSplit::new((0..7).map(|i| sample(i % 2)).collect(), 3);
        let batches = split.to_tensor_batches(&batcher);

        assert_eq!(batches.len(), split.num_batches());
        let rows: Vec<usize> = batches.iter().map(|b| b.inputs.dims()[0]).collect();
        assert_eq!(rows, vec![split.batch_size(), split.batch_size(), 1]);
        for (batch, n) in batches.iter().zip(rows) {
            assert_eq!(batch.inputs.dims(), [n, 3]);
            assert_eq!(batch.targets.dims(), [n, 2]);
        }
    }

    #[test]
    fn test_empty_split_has_no_batches() {
        let split = PreparedSplit::new(Vec::new(), 4);
        assert_eq!(split.num_batches(), 0);
        assert_eq!(split.batches().count(), 0);
    }

    #[test]
    fn test_dataset_trait_access() {
        let ds = TextDataset::new(vec![sample(0), sample(1), sample(1)]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.get(1).map(|s| s.class_index), Some(1));
        assert!(ds.get(3).is_none());
        assert_eq!(ds.class_counts(2), vec![1, 2]);
        assert_eq!(ds.get(0).unwrap().real_len(), 2);
    }
}
