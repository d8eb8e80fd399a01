// ============================================================
// Layer 4 - Stratified Train/Validation Splitter
// ============================================================
// Splits samples into two sets:
//   - Training set:   used to update model weights
//   - Validation set: used to measure performance on unseen data
//
// Why stratify?
//   Review corpora are often unbalanced (e.g. 70% positive).
//   A plain random split can leave the validation set with
//   noticeably fewer negatives than the training set. Splitting
//   each class separately keeps the class proportions equal in
//   both sets, to within one sample per class.
//
// For every class c with n_c samples:
//   n_val(c) = round(test_size * n_c)
// The class's indices are shuffled with a seeded RNG and the
// first n_val(c) go to validation. Both outputs are returned in
// original record order; shuffling for training happens later
// in the buffered shuffle.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::error::{PrepError, PrepResult};

/// Split `samples` into (train, validation), stratified on `class_of`.
///
/// # Arguments
/// * `samples`   - All samples (consumed by this function)
/// * `class_of`  - Class index of a sample
/// * `test_size` - Fraction for validation, strictly between 0 and 1
/// * `seed`      - RNG seed, the same seed always gives the same split
pub fn stratified_split<T, F>(
    samples:   Vec<T>,
    class_of:  F,
    test_size: f64,
    seed:      u64,
) -> PrepResult<(Vec<T>, Vec<T>)>
where
    F: Fn(&T) -> usize,
{
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(PrepError::InvalidConfig(format!(
            "test_size must be between 0 and 1 (got {test_size})"
        )));
    }

    // Group sample positions by class
    let mut by_class: Vec<Vec<usize>> = Vec::new();
    for (i, s) in samples.iter().enumerate() {
        let c = class_of(s);
        if c >= by_class.len() {
            by_class.resize_with(c + 1, Vec::new);
        }
        by_class[c].push(i);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut is_val = vec![false; samples.len()];

    for members in by_class.iter_mut() {
        let n_val = ((members.len() as f64) * test_size).round() as usize;
        members.shuffle(&mut rng);
        for &i in members.iter().take(n_val) {
            is_val[i] = true;
        }
    }

    let total = samples.len();
    let mut train = Vec::with_capacity(total);
    let mut val = Vec::new();
    for (s, to_val) in samples.into_iter().zip(is_val) {
        if to_val {
            val.push(s);
        } else {
            train.push(s);
        }
    }

    tracing::debug!(
        "Dataset split: {} training, {} validation ({}% / {}%)",
        train.len(),
        val.len(),
        (train.len() * 100) / total.max(1),
        (val.len()   * 100) / total.max(1),
    );

    Ok((train, val))
}

/// Shuffle through a window of `buffer_size` items.
///
/// The window is filled from the front of `items`; each step emits a
/// uniformly chosen window item and refills its slot with the next
/// input. A buffer of 1 (or 0) keeps the input order; a buffer at
/// least as large as the input is a full shuffle.
pub fn buffered_shuffle<T, R: Rng + ?Sized>(items: Vec<T>, buffer_size: usize, rng: &mut R) -> Vec<T> {
    if buffer_size <= 1 {
        return items;
    }

    let mut out = Vec::with_capacity(items.len());
    let mut rest = items.into_iter();
    let mut window: Vec<T> = rest.by_ref().take(buffer_size).collect();

    while !window.is_empty() {
        let pick = rng.gen_range(0..window.len());
        match rest.next() {
            Some(next) => out.push(std::mem::replace(&mut window[pick], next)),
            None => out.push(window.swap_remove(pick)),
        }
    }

    out
}
