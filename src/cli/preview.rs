//! CLI entry-point for ad-hoc context window inspection.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    nlp::{
        tokenize,
        window::{self, OrderPolicy, Span},
    },
};

/// Args for the `preview` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Sentence to tokenise.
    #[arg(long)]
    pub text: String,
    /// Exact text of the first mention.
    #[arg(long)]
    pub first: String,
    /// Exact text of the second mention.
    #[arg(long)]
    pub second: String,
    /// Override the configured context size.
    #[arg(long)]
    pub context_size: Option<usize>,
    /// Fail instead of warning when the mentions are out of order.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Print the pipe-separated region format instead of markers.
    #[arg(long, default_value_t = false)]
    pub regions: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let tokens = tokenize::tokenize(&args.text);
    let sentence = Span::new(0, args.text.len());
    let span_a = locate(&args.text, &args.first)?;
    let span_b = locate(&args.text, &args.second)?;
    let context_size = args.context_size.unwrap_or(settings.context_size);

    let output = if args.regions {
        window::regions(&tokens, sentence, span_a, span_b, context_size)
    } else {
        let policy = if args.strict {
            OrderPolicy::Strict
        } else {
            OrderPolicy::Permissive
        };
        window::extract(
            &tokens,
            sentence,
            span_a,
            "e1",
            span_b,
            "e2",
            context_size,
            policy,
        )?
    };
    println!("{output}");
    Ok(())
}

fn locate(text: &str, mention: &str) -> Result<Span> {
    let start = text
        .find(mention)
        .with_context(|| format!("mention {mention:?} not found in text"))?;
    Ok(Span::new(start, start + mention.len()))
}
