// ============================================================
// Layer 4 - Sequence Vectorizer
// ============================================================
// Every sample fed to the model must have the same length.
// Longer id sequences are truncated, shorter ones padded.
//
// Example with max_length = 5, pad_value = 0:
//
//   ids = [7, 8, 9]
//     Padding::Post → [7, 8, 9, 0, 0]
//     Padding::Pre  → [0, 0, 7, 8, 9]
//
//   ids = [1, 2, 3, 4, 5, 6, 7]
//     Truncate::Post → [1, 2, 3, 4, 5]   keep the prefix
//     Truncate::Pre  → [3, 4, 5, 6, 7]   keep the suffix

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::vocab::PAD_ID;

/// Where padding values are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    Pre,
    #[default]
    Post,
}

/// Which end of an over-long sequence is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truncate {
    /// Drop from the front, keep the suffix
    Pre,
    /// Drop from the back, keep the prefix
    #[default]
    Post,
}

fn parse_side(s: &str) -> Result<bool, String> {
    match s {
        "pre"  => Ok(true),
        "post" => Ok(false),
        other  => Err(format!("expected 'pre' or 'post', got '{other}'")),
    }
}

impl FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_side(s)? { Self::Pre } else { Self::Post })
    }
}

impl FromStr for Truncate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_side(s)? { Self::Pre } else { Self::Post })
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Self::Pre => "pre", Self::Post => "post" })
    }
}

impl fmt::Display for Truncate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Self::Pre => "pre", Self::Post => "post" })
    }
}

/// Fix `ids` to exactly `max_length` entries.
pub fn vectorize(
    ids:        &[u32],
    max_length: usize,
    pad_value:  u32,
    truncate:   Truncate,
    padding:    Padding,
) -> Vec<u32> {
    if ids.len() >= max_length {
        let kept = match truncate {
            Truncate::Post => &ids[..max_length],
            Truncate::Pre  => &ids[ids.len() - max_length..],
        };
        return kept.to_vec();
    }

    let fill = max_length - ids.len();
    let mut out = Vec::with_capacity(max_length);
    match padding {
        Padding::Post => {
            out.extend_from_slice(ids);
            out.resize(max_length, pad_value);
        }
        Padding::Pre => {
            out.resize(fill, pad_value);
            out.extend_from_slice(ids);
        }
    }
    out
}

/// A vectorizer with its length and policies fixed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceVectorizer {
    pub max_length: usize,
    pub pad_value:  u32,
    pub truncate:   Truncate,
    pub padding:    Padding,
}

impl SequenceVectorizer {
    /// Zero padding, post-padding, post-truncation
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            pad_value: PAD_ID,
            truncate:  Truncate::default(),
            padding:   Padding::default(),
        }
    }

    pub fn with_truncate(mut self, truncate: Truncate) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_pad_value(mut self, pad_value: u32) -> Self {
        self.pad_value = pad_value;
        self
    }

    pub fn vectorize(&self, ids: &[u32]) -> Vec<u32> {
        vectorize(ids, self.max_length, self.pad_value, self.truncate, self.padding)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Padding::Post, &[7, 8, 9, 0, 0]; "post padding")]
    #[test_case(Padding::Pre,  &[0, 0, 7, 8, 9]; "pre padding")]
    fn test_padding(padding: Padding, expected: &[u32]) {
        assert_eq!(vectorize(&[7, 8, 9], 5, 0, Truncate::Post, padding), expected);
    }

    #[test_case(Truncate::Post, &[1, 2, 3, 4, 5]; "keep prefix")]
    #[test_case(Truncate::Pre,  &[3, 4, 5, 6, 7]; "keep suffix")]
    fn test_truncation(truncate: Truncate, expected: &[u32]) {
        assert_eq!(vectorize(&[1, 2, 3, 4, 5, 6, 7], 5, 0, truncate, Padding::Post), expected);
    }

    #[test]
    fn test_custom_pad_value() {
        let v = SequenceVectorizer::new(4).with_pad_value(9).with_padding(Padding::Pre);
        assert_eq!(v.vectorize(&[1]), vec![9, 9, 9, 1]);
    }

    #[test]
    fn test_length_always_matches() {
        let modes = [
            (Truncate::Pre, Padding::Pre),
            (Truncate::Pre, Padding::Post),
            (Truncate::Post, Padding::Pre),
            (Truncate::Post, Padding::Post),
        ];
        for max_length in 0..12 {
            for len in 0..15u32 {
                let ids: Vec<u32> = (1..=len).collect();
                for (t, p) in modes {
                    assert_eq!(vectorize(&ids, max_length, 0, t, p).len(), max_length);
                }
            }
        }
    }

    #[test]
    fn test_exact_length_unchanged() {
        let v = SequenceVectorizer::new(3).with_truncate(Truncate::Pre);
        assert_eq!(v.vectorize(&[4, 5, 6]), vec![4, 5, 6]);
    }

    #[test]
    fn test_empty_input_is_all_padding() {
        assert_eq!(SequenceVectorizer::new(3).vectorize(&[]), vec![0, 0, 0]);
    }

    #[test]
    fn test_modes_parse() {
        assert_eq!("pre".parse::<Padding>(), Ok(Padding::Pre));
        assert_eq!("post".parse::<Truncate>(), Ok(Truncate::Post));
        assert!("middle".parse::<Padding>().is_err());
    }
}
