// ============================================================
// Layer 4 - Text Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<TextSample>
// into tensors a classifier can consume.
//
// How batching works here:
//   Input:  Vec of N TextSamples, ids of length L, labels of C
//   Output: TextBatch with inputs [N, L] and targets [N, C]
//
//   We flatten all ids into one long Vec, then reshape:
//   [s1_t1, s1_t2, ..., s1_tL, s2_t1, ..., sN_tL] → [N, L]
//
// All sequences are already padded to max_length by the
// vectorizer, so no dynamic padding is needed here.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::TextSample;

/// A batch ready for a classifier's forward pass.
#[derive(Debug, Clone)]
pub struct TextBatch<B: Backend> {
    /// Token ids, shape [batch_size, max_length]
    pub inputs: Tensor<B, 2, Int>,

    /// One-hot labels, shape [batch_size, num_classes]
    pub targets: Tensor<B, 2>,
}

#[derive(Clone, Debug)]
pub struct TextBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> TextBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<TextSample, TextBatch<B>> for TextBatcher<B> {
    fn batch(&self, items: Vec<TextSample>) -> TextBatch<B> {
        let batch_size  = items.len();
        let seq_len     = items.first().map_or(0, |s| s.ids.len());
        let num_classes = items.first().map_or(0, |s| s.label.len());

        // Burn Int tensors are built from i32 here, ids fit easily
        let ids_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.ids.iter().map(|&x| x as i32))
            .collect();

        let labels_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.label.iter().copied())
            .collect();

        let inputs = Tensor::<B, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let targets = Tensor::<B, 1>::from_floats(
            labels_flat.as_slice(), &self.device
        ).reshape([batch_size, num_classes]);

        TextBatch { inputs, targets }
    }
}
