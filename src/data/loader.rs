// ============================================================
// Layer 4 - CSV Record Loader
// ============================================================
// Reads the labelled corpus from a CSV file with a header row.
// Only two columns matter, the text column and the label
// column; their names are configurable and every other column
// is ignored.
//
//   review,sentiment,source
//   "Loved it <br />",positive,imdb
//   "Waste of time",negative,imdb
//
// Any problem with the file is fatal: a missing column, an
// unreadable file or a malformed row stops the run. There is
// no partial loading.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use csv::ReaderBuilder;

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::record::RawRecord;
use crate::domain::traits::RecordSource;

/// Loads (text, label) records from a CSV file.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    path:         PathBuf,
    text_column:  String,
    label_column: String,
}

impl CsvLoader {
    pub fn new(
        path:         impl Into<PathBuf>,
        text_column:  impl Into<String>,
        label_column: impl Into<String>,
    ) -> Self {
        Self {
            path:         path.into(),
            text_column:  text_column.into(),
            label_column: label_column.into(),
        }
    }

    /// Parse records from any reader holding CSV with a header row.
    pub fn read_from<R: Read>(&self, reader: R) -> PrepResult<Vec<RawRecord>> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| PrepError::MissingColumn { column: name.to_string() })
        };
        let text_idx  = column(self.text_column.as_str())?;
        let label_idx = column(self.label_column.as_str())?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            // The csv reader rejects ragged rows, so both fields exist
            let text  = row.get(text_idx).unwrap_or_default();
            let label = row.get(label_idx).unwrap_or_default();
            records.push(RawRecord::new(text, label.trim()));
        }

        Ok(records)
    }
}

impl RecordSource for CsvLoader {
    fn load_all(&self) -> PrepResult<Vec<RawRecord>> {
        let file = File::open(&self.path)?;
        let records = self.read_from(BufReader::new(file))?;
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
