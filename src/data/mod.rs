// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// This layer handles everything from raw CSV rows all the way
// to tensor batches.
//
// The pipeline flows in this order:
//
//   reviews.csv
//       │
//       ▼
//   CsvLoader          → reads the text and label columns
//       │
//       ▼
//   TextCleaner        → strips markup, URLs, symbols; lemmatizes
//       │
//       ▼
//   LabelEncoder       → label → class index → one-hot vector
//       │
//       ▼
//   VocabTokenizer     → fits the vocabulary, words → ids
//       │
//       ▼
//   SequenceVectorizer → pads / truncates to max_length
//       │
//       ▼
//   stratified_split   → train / validation, per-class fractions
//       │
//       ▼
//   buffered_shuffle   → bounded-window shuffle, then batching
//       │
//       ▼
//   TextBatcher        → stacks samples into Burn tensors
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads labelled records from CSV
pub mod loader;

/// Cleans raw text into lemmatized word tokens
pub mod cleaner;

/// Noun lemmatization rules
pub mod lemmatizer;

/// Class index and one-hot label encoding
pub mod label_encoder;

/// Vocabulary fitting and id lookup
pub mod vocab;

/// Fixed-length padding and truncation
pub mod vectorizer;

/// Stratified split and buffered shuffle
pub mod splitter;

/// Samples, Burn Dataset impl and batched splits
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
