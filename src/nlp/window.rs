//! Bounded token windows around a pair of mention spans.
//!
//! The serialised form is what downstream sequence classifiers train on:
//! up to `context_size` tokens of outer context on each side, the two
//! mentions wrapped in `<label>`/`</label>` markers, and every token in
//! between, all joined by single spaces.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Minimal lexical unit with character offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Token {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Contiguous character range, typically a mention or a sentence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `token` lies entirely inside this range.
    pub fn covers(&self, token: &Token) -> bool {
        self.start <= token.start && token.end <= self.end
    }
}

/// What to do when a span pair violates the `a.end <= b.start` precondition.
///
/// The permissive default logs a warning and produces output anyway; strict
/// callers get a typed error instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderPolicy {
    #[default]
    Permissive,
    Strict,
}

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("span {a_start}..{a_end} does not precede span {b_start}..{b_end}")]
    InvalidSpanOrder {
        a_start: usize,
        a_end: usize,
        b_start: usize,
        b_end: usize,
    },
}

/// Serialise the token window around an ordered mention pair.
///
/// `tokens` must be sorted by `start`; `span_a` is expected to end at or
/// before `span_b` begins. Outer context never crosses the `sentence`
/// bounds and is truncated, not padded, when fewer than `context_size`
/// tokens are available. Covered text of each span is the space-join of
/// the tokens it covers. The result carries no `\r` or `\n` characters.
#[allow(clippy::too_many_arguments)]
pub fn extract(
    tokens: &[Token],
    sentence: Span,
    span_a: Span,
    label_a: &str,
    span_b: Span,
    label_b: &str,
    context_size: usize,
    policy: OrderPolicy,
) -> Result<String, WindowError> {
    if span_a.end > span_b.start {
        match policy {
            OrderPolicy::Strict => {
                return Err(WindowError::InvalidSpanOrder {
                    a_start: span_a.start,
                    a_end: span_a.end,
                    b_start: span_b.start,
                    b_end: span_b.end,
                });
            }
            OrderPolicy::Permissive => {
                warn!(
                    a = ?(span_a.start, span_a.end),
                    b = ?(span_b.start, span_b.end),
                    "first span does not precede second; output may be garbled"
                );
            }
        }
    }

    let mut pieces: Vec<&str> = Vec::new();
    for token in preceding(tokens, span_a, context_size) {
        if sentence.start <= token.start {
            pieces.push(&token.text);
        }
    }
    let open_a = format!("<{label_a}>");
    let close_a = format!("</{label_a}>");
    pieces.push(&open_a);
    pieces.extend(covered(tokens, span_a));
    pieces.push(&close_a);
    for token in between(tokens, span_a, span_b) {
        pieces.push(&token.text);
    }
    let open_b = format!("<{label_b}>");
    let close_b = format!("</{label_b}>");
    pieces.push(&open_b);
    pieces.extend(covered(tokens, span_b));
    pieces.push(&close_b);
    for token in following(tokens, span_b, context_size) {
        if token.end <= sentence.end {
            pieces.push(&token.text);
        }
    }

    Ok(normalise(&pieces.join(" ")))
}

/// Pipe-separated variant: `left|between|right`, where the mention tokens
/// are folded into their adjacent context segments instead of marked up.
pub fn regions(
    tokens: &[Token],
    sentence: Span,
    span_a: Span,
    span_b: Span,
    context_size: usize,
) -> String {
    let mut left: Vec<&str> = Vec::new();
    for token in preceding(tokens, span_a, context_size) {
        if sentence.start <= token.start {
            left.push(&token.text);
        }
    }
    left.extend(covered(tokens, span_a));

    let mid: Vec<&str> = between(tokens, span_a, span_b)
        .map(|t| t.text.as_str())
        .collect();

    let mut right: Vec<&str> = covered(tokens, span_b).collect();
    for token in following(tokens, span_b, context_size) {
        if token.end <= sentence.end {
            right.push(&token.text);
        }
    }

    format!(
        "{}|{}|{}",
        normalise(&left.join(" ")),
        normalise(&mid.join(" ")),
        normalise(&right.join(" "))
    )
}

/// Last `n` tokens ending at or before `span` begins, in original order.
fn preceding(tokens: &[Token], span: Span, n: usize) -> impl Iterator<Item = &Token> {
    let before: Vec<&Token> = tokens.iter().filter(|t| t.end <= span.start).collect();
    let skip = before.len().saturating_sub(n);
    before.into_iter().skip(skip)
}

fn covered(tokens: &[Token], span: Span) -> impl Iterator<Item = &str> {
    tokens
        .iter()
        .filter(move |t| span.covers(t))
        .map(|t| t.text.as_str())
}

fn between<'a>(tokens: &'a [Token], a: Span, b: Span) -> impl Iterator<Item = &'a Token> {
    tokens
        .iter()
        .filter(move |t| a.end <= t.start && t.end <= b.start)
}

/// First `n` tokens starting at or after `span` ends.
fn following(tokens: &[Token], span: Span, n: usize) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(move |t| t.start >= span.end).take(n)
}

fn normalise(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
