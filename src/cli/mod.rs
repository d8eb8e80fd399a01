// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses command line
// arguments with clap and delegates the work to Layer 2.
//
// Two commands are supported:
//   1. `prepare` - runs the full pipeline on a labelled CSV
//   2. `clean`   - shows what the cleaner does to one text
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CleanArgs, Commands, PrepareArgs};

use crate::data::cleaner::TextCleaner;
use crate::data::lemmatizer::{IdentityLemmatizer, Lemmatizer, RuleLemmatizer};

#[derive(Parser, Debug)]
#[command(
    name = "text-dataset-prep",
    version = "0.1.0",
    about = "Clean, tokenize and vectorize a labelled text CSV into training batches."
)]
pub struct Cli {
    /// The subcommand to run (prepare or clean)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch. The CLI layer only routes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Clean(args)   => run_clean(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing dataset from: {}", args.data);
    let label_file = args.label_file.clone();

    let summary = PrepareUseCase::new(args.into()).execute()?;

    println!(
        "Prepared {} records: {} train ({} batches), {} validation ({} batches), \
         vocabulary {} entries. Labels saved to {}.",
        summary.records,
        summary.train_samples,
        summary.train_batches,
        summary.val_samples,
        summary.val_batches,
        summary.vocab_entries,
        label_file,
    );
    Ok(())
}

fn run_clean(args: CleanArgs) -> Result<()> {
    let lemmatizer: Box<dyn Lemmatizer> = if args.no_lemmatize {
        Box::new(IdentityLemmatizer)
    } else {
        Box::new(RuleLemmatizer::new())
    };
    let cleaner = TextCleaner::new(args.url_policy, lemmatizer)?;

    println!("{}", cleaner.clean(&args.text).join(" "));
    Ok(())
}
