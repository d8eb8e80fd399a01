// ============================================================
// Layer 6 - Label Dictionary Store
// ============================================================
// Persists the class order so inference code can turn a
// predicted class index back into a label name.
//
// File format (JSON object, one entry per class):
//   {
//     "0": "positive",
//     "1": "negative"
//   }
//
// Keys are class indices (the position of the 1.0 in a label
// vector), values are the raw label names.
//
// JsonLabelSink writes to any io::Write, so the pipeline can be
// tested against an in-memory buffer; LabelStore wraps it for
// the usual label.json file on disk.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::labels::ClassOrder;
use crate::domain::traits::LabelSink;

fn label_map(classes: &ClassOrder) -> BTreeMap<usize, &str> {
    classes.names().iter().map(String::as_str).enumerate().collect()
}

/// Writes the label dictionary as pretty JSON to a writer.
pub struct JsonLabelSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLabelSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LabelSink for JsonLabelSink<W> {
    fn write_labels(&mut self, classes: &ClassOrder) -> PrepResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, &label_map(classes))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// The label dictionary file on disk.
pub struct LabelStore {
    path: PathBuf,
}

impl LabelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a label dictionary written by `save` back into a ClassOrder.
    pub fn load(&self) -> PrepResult<ClassOrder> {
        let json = fs::read_to_string(&self.path)?;
        let map: BTreeMap<usize, String> = serde_json::from_str(&json)?;

        // Indices must be exactly 0..n
        if map.keys().copied().ne(0..map.len()) {
            return Err(PrepError::InvalidConfig(format!(
                "label file '{}' does not have contiguous indices",
                self.path.display()
            )));
        }
        ClassOrder::new(map.into_values())
    }
}

impl LabelSink for LabelStore {
    fn write_labels(&mut self, classes: &ClassOrder) -> PrepResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(&self.path)?;
        JsonLabelSink::new(BufWriter::new(file)).write_labels(classes)?;

        tracing::debug!("Saved label dictionary to '{}'", self.path.display());
        Ok(())
    }
}
