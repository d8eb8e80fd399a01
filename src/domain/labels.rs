// ============================================================
// Layer 3 - Class Order and Label Vectors
// ============================================================
// The set of classes is fixed BEFORE any label is encoded.
// A ClassOrder is an immutable, ordered, duplicate-free list
// of class names; a label's index is its position in it.
//
// Example:
//   classes = ["positive", "negative"]
//   "positive" → index 0 → [1.0, 0.0]
//   "negative" → index 1 → [0.0, 1.0]

use serde::{Deserialize, Serialize};

use crate::domain::error::{PrepError, PrepResult};

/// A one-hot vector over the classes, dimension = number of classes.
pub type LabelVector = Vec<f32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ClassOrder {
    names: Vec<String>,
}

impl ClassOrder {
    /// Build a class order, rejecting an empty list or repeated names.
    pub fn new<I, S>(names: I) -> PrepResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(PrepError::EmptyClassOrder);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(PrepError::DuplicateClass(name.clone()));
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of `label` in the order, if it is a known class
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.names.iter().position(|n| n == label)
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Map a (possibly soft) label vector back to the class with the
    /// highest score. Ties resolve to the earliest class.
    pub fn decode(&self, vector: &[f32]) -> Option<&str> {
        if vector.len() != self.names.len() {
            return None;
        }
        let mut best = 0usize;
        for (i, &v) in vector.iter().enumerate() {
            if v > vector[best] {
                best = i;
            }
        }
        self.name_of(best)
    }
}

impl TryFrom<Vec<String>> for ClassOrder {
    type Error = PrepError;

    fn try_from(names: Vec<String>) -> PrepResult<Self> {
        Self::new(names)
    }
}

impl From<ClassOrder> for Vec<String> {
    fn from(order: ClassOrder) -> Self {
        order.names
    }
}
