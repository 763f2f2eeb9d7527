//! CLI entry-point for snippet generation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp};

/// Args for the `snippets` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Directory of annotated documents in JSONL form.
    #[arg(long)]
    pub input: PathBuf,
    /// Training snippet file (defaults to <outputs>/snippets-train.txt).
    #[arg(long)]
    pub train_out: Option<PathBuf>,
    /// Dev snippet file (defaults to <outputs>/snippets-dev.txt).
    #[arg(long)]
    pub dev_out: Option<PathBuf>,
    /// Hold out every n-th document for the dev split; 0 disables it.
    #[arg(long, default_value_t = 5)]
    pub dev_every: usize,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    nlp::generate_snippets(&settings, args).await
}
