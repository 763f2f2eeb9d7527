//! Offset-preserving tokenisation and coarse sentence splitting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::window::{Span, Token};

/// Split text on whitespace, keeping byte offsets into the source.
///
/// Punctuation stays attached to its word; finer-grained tokenisation is an
/// upstream concern for corpora that ship their own token layer.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token::new(s, idx, &text[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(s, text.len(), &text[s..]));
    }
    tokens
}

/// Coarse sentence boundaries on terminal punctuation followed by whitespace.
pub fn sentences(text: &str) -> Vec<Span> {
    static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

    let mut spans = Vec::new();
    let mut cursor = 0usize;
    for hit in BOUNDARY.find_iter(text) {
        // keep the terminator with its sentence
        let end = hit.start() + 1;
        if end > cursor && !text[cursor..end].trim().is_empty() {
            spans.push(Span::new(cursor, end));
        }
        cursor = hit.end();
    }
    let tail_end = text.trim_end().len();
    if cursor < tail_end {
        spans.push(Span::new(cursor, tail_end));
    }
    spans
}
