// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Process-boundary concerns that don't belong in the pipeline
// itself:
//
//   label_store.rs : Label dictionary persistence
//                    Writes the class order as a JSON object
//                    (index → name) for inference code, and
//                    reads it back.
//
// Reference: Rust Book §7 (Modules)

/// Label dictionary JSON sink and file store
pub mod label_store;
