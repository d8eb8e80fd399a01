// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `clean`, and all
// their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, Padding, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PrepConfig;
use crate::data::cleaner::UrlPolicy;
use crate::data::vectorizer::{Padding, Truncate};
use crate::data::vocab::DEFAULT_OOV_TOKEN;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build stratified train/validation batches from a labelled CSV
    Prepare(PrepareArgs),

    /// Print the cleaned tokens of a single text
    Clean(CleanArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV file with a header row
    #[arg(long, default_value = "data/reviews.csv")]
    pub data: String,

    /// Column holding the raw text
    #[arg(long, default_value = "review")]
    pub text_column: String,

    /// Column holding the label
    #[arg(long, default_value = "sentiment")]
    pub label_column: String,

    /// Ordered, comma-separated class names, e.g. positive,negative.
    /// A class's position here is its index in the one-hot vector.
    #[arg(long, value_delimiter = ',', required = true)]
    pub classes: Vec<String>,

    /// Where the label dictionary JSON is written
    #[arg(long, default_value = "label.json")]
    pub label_file: String,

    /// Vocabulary cap: the vocab_size - 1 most frequent words are kept
    #[arg(long, default_value_t = 10_000)]
    pub vocab_size: usize,

    /// Length of every id sequence after padding / truncation
    #[arg(long, default_value_t = 128)]
    pub max_length: usize,

    /// Fraction of each class sent to the validation set
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// Shuffle window size
    #[arg(long, default_value_t = 128)]
    pub buffer_size: usize,

    #[arg(long, default_value_t = 128)]
    pub batch_size: usize,

    /// Seed for the split and the shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Placeholder token for out-of-vocabulary words
    #[arg(long, default_value = DEFAULT_OOV_TOKEN)]
    pub oov_token: String,

    /// Where padding goes: pre or post
    #[arg(long, default_value = "post")]
    pub padding: Padding,

    /// Which end of long sequences is cut: pre or post
    #[arg(long, default_value = "post")]
    pub truncating: Truncate,

    /// Which URLs to strip: anywhere or line-start
    #[arg(long, default_value = "anywhere")]
    pub url_policy: UrlPolicy,

    /// Keep words as they are instead of reducing them to base forms
    #[arg(long)]
    pub no_lemmatize: bool,

    /// Clean records on all CPU cores
    #[arg(long)]
    pub parallel: bool,
}

/// Convert CLI PrepareArgs into the application-layer PrepConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepConfig {
            data_path:    a.data,
            text_column:  a.text_column,
            label_column: a.label_column,
            label_file:   a.label_file,
            classes:      a.classes,
            vocab_size:   a.vocab_size,
            max_length:   a.max_length,
            test_size:    a.test_size,
            buffer_size:  a.buffer_size,
            batch_size:   a.batch_size,
            seed:         a.seed,
            oov_token:    a.oov_token,
            padding:      a.padding,
            truncating:   a.truncating,
            url_policy:   a.url_policy,
            lemmatize:    !a.no_lemmatize,
            parallel:     a.parallel,
        }
    }
}

/// All arguments for the `clean` command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// The text to clean
    #[arg(long)]
    pub text: String,

    #[arg(long, default_value = "anywhere")]
    pub url_policy: UrlPolicy,

    #[arg(long)]
    pub no_lemmatize: bool,
}
