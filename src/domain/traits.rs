// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The two process-boundary side effects of the pipeline sit
// behind traits:
//   - RecordSource  → where labelled records come from
//   - LabelSink     → where the class dictionary is written
//
// The application layer only sees these traits. The CSV loader
// and JSON label file implement them in production; tests pass
// in-memory implementations instead.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PrepResult;
use crate::domain::labels::ClassOrder;
use crate::domain::record::RawRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full labelled corpus.
///
/// Implementations:
///   - CsvLoader → reads a text column and a label column from CSV
///   - Vec<RawRecord> → in-memory corpus
pub trait RecordSource {
    /// Load every record, in file order.
    fn load_all(&self) -> PrepResult<Vec<RawRecord>>;
}

impl RecordSource for Vec<RawRecord> {
    fn load_all(&self) -> PrepResult<Vec<RawRecord>> {
        Ok(self.clone())
    }
}

// ─── LabelSink ────────────────────────────────────────────────────────────────
/// Receives the class-order mapping once the dataset is built, so
/// inference code can turn predicted indices back into labels.
///
/// Implementations:
///   - JsonLabelSink → writes a JSON object to any io::Write
pub trait LabelSink {
    fn write_labels(&mut self, classes: &ClassOrder) -> PrepResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_source_returns_records_in_order() {
        let corpus = vec![RawRecord::new("a", "x"), RawRecord::new("b", "y")];
        let loaded = corpus.load_all().unwrap();
        assert_eq!(loaded, corpus);
    }
}
