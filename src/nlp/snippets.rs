//! Gold relation snippet generation.
//!
//! For every ordered pair of event mentions inside a sentence, emit one
//! `label|context` line suitable for training a relation classifier. The
//! label comes from the gold relation layer; the context is the marked-up
//! token window from [`crate::nlp::window`].

use std::{collections::HashMap, path::Path};

use anyhow::Result;
use rand::Rng;
use tracing::warn;

use crate::{
    data::docs::{AnnotatedDoc, Mention},
    data::io,
    nlp::{
        tokenize,
        window::{self, OrderPolicy, Span},
    },
};

const CONTAINS: &str = "CONTAINS";
const NONE_LABEL: &str = "none";

/// Knobs for one generation pass.
#[derive(Debug, Clone)]
pub struct SnippetOptions {
    /// Tokens of outer context on each side of the pair.
    pub context_size: usize,
    /// Whether negative pairs are down-sampled (training passes only).
    pub downsample: bool,
    /// Probability of keeping a negative pair when down-sampling.
    pub negative_keep: f64,
}

/// Generate snippet lines for every sentence of `doc`, appending each
/// sentence batch to `path`. Returns the number of lines written.
pub fn print_document<R: Rng>(
    doc: &AnnotatedDoc,
    opts: &SnippetOptions,
    rng: &mut R,
    path: &Path,
) -> Result<usize> {
    let tokens = tokenize::tokenize(&doc.text);
    let lookup = relation_lookup(doc);
    let mut written = 0usize;
    for sentence in doc.sentence_spans() {
        let lines = sentence_snippets(doc, &tokens, &lookup, sentence, opts, rng)?;
        written += lines.len();
        io::append_lines(path, &lines)?;
    }
    Ok(written)
}

/// Snippet lines for one sentence: every mention pair in start order.
fn sentence_snippets<R: Rng>(
    doc: &AnnotatedDoc,
    tokens: &[window::Token],
    lookup: &HashMap<(String, String), String>,
    sentence: Span,
    opts: &SnippetOptions,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut mentions: Vec<&Mention> = doc
        .mentions
        .iter()
        .filter(|m| sentence.start <= m.start && m.end <= sentence.end)
        .collect();
    mentions.sort_by_key(|m| (m.start, m.end));

    let mut lines = Vec::new();
    for i in 0..mentions.len() {
        for j in (i + 1)..mentions.len() {
            let first = mentions[i];
            let second = mentions[j];
            let label = pair_label(lookup, first, second);

            // sanity check: sorting should guarantee pair order
            if first.start > second.start {
                warn!(
                    doc_id = %doc.doc_id,
                    first = %first.id,
                    second = %second.id,
                    "mention pair out of order"
                );
            }

            if opts.downsample && label == NONE_LABEL && rng.gen::<f64>() >= opts.negative_keep {
                continue;
            }

            let context = window::extract(
                tokens,
                sentence,
                first.span(),
                "e1",
                second.span(),
                "e2",
                opts.context_size,
                OrderPolicy::Permissive,
            )?;
            lines.push(format!("{label}|{context}").to_lowercase());
        }
    }
    Ok(lines)
}

/// Gold label for an ordered mention pair.
fn pair_label(
    lookup: &HashMap<(String, String), String>,
    first: &Mention,
    second: &Mention,
) -> &'static str {
    let forward = lookup.get(&(first.id.clone(), second.id.clone()));
    let reverse = lookup.get(&(second.id.clone(), first.id.clone()));
    match (forward, reverse) {
        (Some(category), _) if category == CONTAINS => "contains",
        (None, Some(category)) if category == CONTAINS => "contains-1",
        _ => NONE_LABEL,
    }
}

/// Relations cannot be iterated per sentence, so build a lookup from an
/// argument id pair to its category.
fn relation_lookup(doc: &AnnotatedDoc) -> HashMap<(String, String), String> {
    doc.relations
        .iter()
        .map(|r| ((r.arg1.clone(), r.arg2.clone()), r.category.clone()))
        .collect()
}
