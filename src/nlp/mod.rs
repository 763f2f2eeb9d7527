//! Natural language processing layer: tokenisation, windows, snippets.

pub mod snippets;
pub mod tokenize;
pub mod window;

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

use crate::{cli::snippets::Args, config::Settings, data};

/// Run end-to-end snippet generation over an annotated corpus.
///
/// Documents are split into train and dev partitions by index remainder;
/// negative down-sampling applies to the train partition only, driven by a
/// seeded RNG so repeated runs produce identical files.
pub async fn generate_snippets(settings: &Settings, args: Args) -> Result<()> {
    let docs = data::docs::load_docs(&args.input)?;
    if docs.is_empty() {
        warn!(input = %args.input.display(), "no annotated documents found");
        return Ok(());
    }

    let train_out = args
        .train_out
        .unwrap_or_else(|| settings.join_output("snippets-train.txt"));
    let dev_out = args
        .dev_out
        .unwrap_or_else(|| settings.join_output("snippets-dev.txt"));
    data::io::create_fresh(&train_out)?;
    data::io::create_fresh(&dev_out)?;

    let mut rng = StdRng::seed_from_u64(settings.downsample_seed);
    let mut train_lines = 0usize;
    let mut dev_lines = 0usize;
    for (idx, doc) in docs.iter().enumerate() {
        let is_dev = args.dev_every > 0 && idx % args.dev_every == 0;
        let opts = snippets::SnippetOptions {
            context_size: settings.context_size,
            downsample: !is_dev,
            negative_keep: settings.negative_keep,
        };
        if is_dev {
            dev_lines += snippets::print_document(doc, &opts, &mut rng, &dev_out)?;
        } else {
            train_lines += snippets::print_document(doc, &opts, &mut rng, &train_out)?;
        }
    }

    info!(
        train = train_lines,
        dev = dev_lines,
        train_out = %train_out.display(),
        dev_out = %dev_out.display(),
        "wrote snippet files"
    );
    Ok(())
}
