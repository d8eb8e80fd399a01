// ============================================================
// Layer 3 - Record Types
// ============================================================
// A RawRecord is one row of the input table: the text and its
// label exactly as read. A CleanedRecord is the token sequence
// the cleaner derives from it. The pipeline keeps one cleaned
// record per raw record, in the same order.

use serde::{Deserialize, Serialize};

/// One labelled text exactly as it came from the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// The unprocessed text (may contain HTML, URLs, emoji...)
    pub text: String,

    /// The raw label value, matched against the configured classes
    pub label: String,
}

impl RawRecord {
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text:  text.into(),
            label: label.into(),
        }
    }
}

/// Lemmatized lowercase word tokens of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub tokens: Vec<String>,
}

impl CleanedRecord {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the source text had no alphabetic content
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl AsRef<[String]> for CleanedRecord {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_accepts_str_and_string() {
        let a = RawRecord::new("great film", "positive");
        let b = RawRecord::new(String::from("great film"), String::from("positive"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_cleaned_record() {
        let r = CleanedRecord::default();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }
}
