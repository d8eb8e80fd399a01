// ============================================================
// Layer 2 - PrepareUseCase
// ============================================================
// Orchestrates the full data-preparation pipeline in order:
//
//   Step 1: Load CSV records            (Layer 4 - data)
//   Step 2: Clean the text              (Layer 4 - data)
//   Step 3: Encode labels               (Layer 4 - data)
//   Step 4: Fit the vocabulary          (Layer 4 - data)
//   Step 5: Vectorize every record      (Layer 4 - data)
//   Step 6: Stratified split            (Layer 4 - data)
//   Step 7: Buffered shuffle + batching (Layer 4 - data)
//   Step 8: Save the label dictionary   (Layer 6 - infra)
//
// Steps 2-8 live in DatasetBuilder, which takes its records and
// its label sink as arguments and never touches the filesystem
// itself. PrepareUseCase adds the CSV source and the label file.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::TextBatcher,
    cleaner::{TextCleaner, UrlPolicy},
    dataset::{PreparedSplit, TextSample},
    label_encoder::LabelEncoder,
    lemmatizer::{IdentityLemmatizer, Lemmatizer, RuleLemmatizer},
    loader::CsvLoader,
    splitter::{buffered_shuffle, stratified_split},
    vectorizer::{Padding, SequenceVectorizer, Truncate},
    vocab::{VocabTokenizer, Vocabulary, DEFAULT_OOV_TOKEN},
};
use crate::domain::{
    error::{PrepError, PrepResult},
    labels::ClassOrder,
    record::RawRecord,
    traits::{LabelSink, RecordSource},
};
use crate::infra::label_store::LabelStore;

type CpuBackend = burn::backend::NdArray;

// ─── Preparation Configuration ───────────────────────────────────────────────
// Every knob of a preparation run. Serialisable so a run's
// settings can be logged as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub data_path:    String,
    pub text_column:  String,
    pub label_column: String,
    pub label_file:   String,
    pub classes:      Vec<String>,
    pub vocab_size:   usize,
    pub max_length:   usize,
    pub test_size:    f64,
    pub buffer_size:  usize,
    pub batch_size:   usize,
    pub seed:         u64,
    pub oov_token:    String,
    pub padding:      Padding,
    pub truncating:   Truncate,
    pub url_policy:   UrlPolicy,
    pub lemmatize:    bool,
    pub parallel:     bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            data_path:    "data/reviews.csv".to_string(),
            text_column:  "review".to_string(),
            label_column: "sentiment".to_string(),
            label_file:   "label.json".to_string(),
            classes:      Vec::new(),
            vocab_size:   10_000,
            max_length:   128,
            test_size:    0.2,
            buffer_size:  128,
            batch_size:   128,
            seed:         42,
            oov_token:    DEFAULT_OOV_TOKEN.to_string(),
            padding:      Padding::Post,
            truncating:   Truncate::Post,
            url_policy:   UrlPolicy::Anywhere,
            lemmatize:    true,
            parallel:     false,
        }
    }
}

impl PrepConfig {
    /// Check every numeric range up front, before any work is done.
    pub fn validate(&self) -> PrepResult<()> {
        let invalid = |msg: String| Err(PrepError::InvalidConfig(msg));

        if self.vocab_size < 2 {
            return invalid(format!("vocab_size must be at least 2 (got {})", self.vocab_size));
        }
        if self.max_length == 0 {
            return invalid("max_length must be at least 1".to_string());
        }
        if self.batch_size == 0 {
            return invalid("batch_size must be at least 1".to_string());
        }
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return invalid(format!("test_size must be between 0 and 1 (got {})", self.test_size));
        }
        if self.oov_token.trim().is_empty() {
            return invalid("oov_token must not be empty".to_string());
        }
        ClassOrder::new(self.classes.iter().cloned())?;
        Ok(())
    }

    pub fn lemmatizer(&self) -> Box<dyn Lemmatizer> {
        if self.lemmatize {
            Box::new(RuleLemmatizer::new())
        } else {
            Box::new(IdentityLemmatizer)
        }
    }
}

// ─── DatasetBuilder ──────────────────────────────────────────────────────────

/// Output of one pipeline run.
pub struct PreparedDataset {
    pub train:      PreparedSplit,
    pub val:        PreparedSplit,
    pub vocabulary: Vocabulary,
    pub classes:    ClassOrder,
}

impl PreparedDataset {
    pub fn into_splits(self) -> (PreparedSplit, PreparedSplit) {
        (self.train, self.val)
    }
}

pub struct DatasetBuilder {
    config:  PrepConfig,
    classes: ClassOrder,
    cleaner: TextCleaner,
}

impl DatasetBuilder {
    pub fn new(config: PrepConfig) -> PrepResult<Self> {
        config.validate()?;
        let classes = ClassOrder::new(config.classes.iter().cloned())?;
        let cleaner = TextCleaner::new(config.url_policy, config.lemmatizer())?;
        Ok(Self { config, classes, cleaner })
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Run steps 2-8 over an in-memory corpus.
    pub fn build(
        &self,
        records: &[RawRecord],
        sink:    &mut dyn LabelSink,
    ) -> PrepResult<PreparedDataset> {
        let cfg = &self.config;

        // ── Step 2: Clean every text ──────────────────────────────────────────
        tracing::info!("Cleaning {} texts", records.len());
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let cleaned = self.cleaner.clean_all(&texts, cfg.parallel);

        let empty = cleaned.iter().filter(|c| c.is_empty()).count();
        if empty > 0 {
            tracing::warn!("{} texts had no alphabetic content after cleaning", empty);
        }

        // ── Step 3: Encode labels against the fixed class order ───────────────
        let encoder = LabelEncoder::new(&self.classes);
        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        let class_indices = encoder.indices(&labels)?;

        // ── Step 4: Fit the vocabulary on the whole cleaned corpus ────────────
        let tokenizer = VocabTokenizer::new(cfg.vocab_size, cfg.oov_token.clone());
        let vocabulary = tokenizer.fit(&cleaned)?;
        if vocabulary.is_empty() {
            tracing::warn!("Empty vocabulary: every sequence will be all padding");
        }

        // ── Step 5: Vectorize to fixed-length id sequences ────────────────────
        let vectorizer = SequenceVectorizer::new(cfg.max_length)
            .with_padding(cfg.padding)
            .with_truncate(cfg.truncating);

        let samples = cleaned
            .iter()
            .zip(class_indices)
            .map(|(record, class_index)| -> PrepResult<TextSample> {
                let ids = tokenizer.transform(&record.tokens, &vocabulary)?;
                Ok(TextSample {
                    ids:   vectorizer.vectorize(&ids),
                    label: encoder.one_hot(class_index),
                    class_index,
                })
            })
            .collect::<PrepResult<Vec<_>>>()?;

        // ── Step 6: Stratified train / validation split ───────────────────────
        let (train, val) = stratified_split(samples, |s| s.class_index, cfg.test_size, cfg.seed)?;
        tracing::info!("Split: {} train, {} validation", train.len(), val.len());

        // ── Step 7: Shuffle through a fixed buffer, then batch ────────────────
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let train = PreparedSplit::new(buffered_shuffle(train, cfg.buffer_size, &mut rng), cfg.batch_size);
        let val   = PreparedSplit::new(buffered_shuffle(val, cfg.buffer_size, &mut rng), cfg.batch_size);

        // ── Step 8: Hand the class order to the label sink ────────────────────
        sink.write_labels(&self.classes)?;

        Ok(PreparedDataset {
            train,
            val,
            vocabulary,
            classes: self.classes.clone(),
        })
    }
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────

/// Figures reported back to the CLI after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepareSummary {
    pub records:       usize,
    pub vocab_entries: usize,
    pub train_samples: usize,
    pub val_samples:   usize,
    pub train_batches: usize,
    pub val_batches:   usize,
}

pub struct PrepareUseCase {
    config: PrepConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareSummary> {
        let cfg = &self.config;
        let builder = DatasetBuilder::new(cfg.clone()).context("Invalid preparation settings")?;
        tracing::debug!("Preparation config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Load the corpus ───────────────────────────────────────────
        let loader = CsvLoader::new(&cfg.data_path, &cfg.text_column, &cfg.label_column);
        let records = loader
            .load_all()
            .with_context(|| format!("Cannot load records from '{}'", cfg.data_path))?;

        let mut label_store = LabelStore::new(&cfg.label_file);
        let prepared = builder
            .build(&records, &mut label_store)
            .context("Dataset preparation failed")?;
        tracing::info!("Label dictionary written to '{}'", label_store.path().display());

        let vocab_entries = prepared.vocabulary.len();
        let (train, val) = prepared.into_splits();

        // Stack every batch of each split into tensors
        let batcher = TextBatcher::<CpuBackend>::new(Default::default());
        for (name, split) in [("train", &train), ("val", &val)] {
            let batches = split.to_tensor_batches(&batcher);
            if let Some(first) = batches.first() {
                tracing::info!(
                    "{} batches: {} x inputs {:?}, targets {:?}",
                    name,
                    batches.len(),
                    first.inputs.dims(),
                    first.targets.dims(),
                );
            }
        }

        Ok(PrepareSummary {
            records:       records.len(),
            vocab_entries,
            train_samples: train.dataset().sample_count(),
            val_samples:   val.dataset().sample_count(),
            train_batches: train.num_batches(),
            val_batches:   val.num_batches(),
        })
    }
}
