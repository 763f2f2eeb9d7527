//! Command-line interface wiring for relsnip.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod preview;
pub mod snippets;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Relation snippet extraction toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Snippets(args) => snippets::run(args, settings).await,
            Commands::Preview(args) => preview::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate relation snippet training and dev files.
    Snippets(snippets::Args),
    /// Extract one context window from an ad-hoc sentence.
    Preview(preview::Args),
}
