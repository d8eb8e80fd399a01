// ============================================================
// Layer 4 - Label Encoder
// ============================================================
// Replaces every raw label with its index in the configured
// ClassOrder, then one-hot encodes the index.
//
//   classes = ["positive", "negative"]
//   labels  = ["negative", "positive", "negative"]
//   indices = [1, 0, 1]
//   vectors = [[0,1], [1,0], [0,1]]
//
// A label outside the class order is an error, never a new class:
// the class set is fixed before encoding starts.

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::labels::{ClassOrder, LabelVector};

pub struct LabelEncoder<'a> {
    classes: &'a ClassOrder,
}

impl<'a> LabelEncoder<'a> {
    pub fn new(classes: &'a ClassOrder) -> Self {
        Self { classes }
    }

    /// Index of `label` in the class order.
    pub fn index_of(&self, label: &str) -> PrepResult<usize> {
        self.classes
            .index_of(label)
            .ok_or_else(|| PrepError::UnknownLabel {
                label:   label.to_string(),
                classes: self.classes.names().to_vec(),
            })
    }

    pub fn one_hot(&self, index: usize) -> LabelVector {
        let mut v = vec![0.0; self.classes.len()];
        if let Some(slot) = v.get_mut(index) {
            *slot = 1.0;
        }
        v
    }

    /// Encode labels to class indices, failing on the first unknown one.
    pub fn indices<S: AsRef<str>>(&self, labels: &[S]) -> PrepResult<Vec<usize>> {
        labels.iter().map(|l| self.index_of(l.as_ref())).collect()
    }

    pub fn encode<S: AsRef<str>>(&self, labels: &[S]) -> PrepResult<Vec<LabelVector>> {
        Ok(self
            .indices(labels)?
            .into_iter()
            .map(|i| self.one_hot(i))
            .collect())
    }
}

/// Free-function form: encode `labels` against `class_order`.
pub fn encode<S: AsRef<str>>(labels: &[S], class_order: &ClassOrder) -> PrepResult<Vec<LabelVector>> {
    LabelEncoder::new(class_order).encode(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> ClassOrder {
        ClassOrder::new(["positive", "negative"]).unwrap()
    }

    #[test]
    fn test_one_hot_follows_class_order() {
        let v = encode(&["positive", "negative", "negative"], &classes()).unwrap();
        assert_eq!(v, vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_unknown_label_fails() {
        let err = encode(&["positive", "neutral"], &classes()).unwrap_err();
        match err {
            PrepError::UnknownLabel { label, classes } => {
                assert_eq!(label, "neutral");
                assert_eq!(classes, vec!["positive", "negative"]);
            }
            other => panic!("expected UnknownLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_vector_dimension_is_class_count() {
        let order = ClassOrder::new(["a", "b", "c", "d"]).unwrap();
        let v = encode(&["c"], &order).unwrap();
        assert_eq!(v[0].len(), 4);
        assert_eq!(v[0].iter().sum::<f32>(), 1.0);
        assert_eq!(order.decode(&v[0]), Some("c"));
    }

    #[test]
    fn test_empty_labels() {
        let v = encode::<&str>(&[], &classes()).unwrap();
        assert!(v.is_empty());
    }
}
