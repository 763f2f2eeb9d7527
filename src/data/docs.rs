//! JSONL document model for gold-annotated clinical notes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use walkdir::WalkDir;

use crate::nlp::{tokenize, window::Span};

/// One annotated note: raw text plus gold sentence, mention and relation
/// layers keyed by character offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    pub doc_id: String,
    pub text: String,
    #[serde(default)]
    pub sentences: Vec<Span>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub relations: Vec<RelationAnn>,
}

/// Gold event mention span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mention {
    pub id: String,
    pub start: usize,
    pub end: usize,
}

impl Mention {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Gold binary relation between two mention ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationAnn {
    pub arg1: String,
    pub arg2: String,
    pub category: String,
}

impl AnnotatedDoc {
    /// Gold sentence boundaries, falling back to heuristic splitting when
    /// the corpus ships none.
    pub fn sentence_spans(&self) -> Vec<Span> {
        if self.sentences.is_empty() {
            tokenize::sentences(&self.text)
        } else {
            self.sentences.clone()
        }
    }
}

/// Read every `*.jsonl` file under `dir`, one document per line.
///
/// Files are visited in path order so a fixed corpus always yields the same
/// document sequence.
pub fn load_docs(dir: &Path) -> Result<Vec<AnnotatedDoc>> {
    let mut docs = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("jsonl") {
            continue;
        }
        let contents = std::fs::read_to_string(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        for (lineno, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let doc: AnnotatedDoc = serde_json::from_str(line).with_context(|| {
                format!("parsing {} line {}", entry.path().display(), lineno + 1)
            })?;
            docs.push(doc);
        }
    }
    info!(count = docs.len(), dir = %dir.display(), "loaded annotated documents");
    Ok(docs)
}
