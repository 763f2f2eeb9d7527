use proptest::prelude::*;
use relsnip::nlp::window::{extract, regions, OrderPolicy, Span, Token, WindowError};

/// Lay words out with sequential offsets, one space apart.
fn toks(words: &[&str]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = 0usize;
    for word in words {
        tokens.push(Token::new(offset, offset + word.len(), *word));
        offset += word.len() + 1;
    }
    tokens
}

fn sentence_of(tokens: &[Token]) -> Span {
    Span::new(tokens[0].start, tokens[tokens.len() - 1].end)
}

#[test]
fn marks_pair_with_single_token_context() {
    let tokens = toks(&["The", "patient", "took", "aspirin", "for", "pain"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[2].start, tokens[2].end);
    let b = Span::new(tokens[3].start, tokens[3].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 1, OrderPolicy::Permissive).unwrap();
    assert_eq!(out, "patient <e1> took </e1> <e2> aspirin </e2> for");
}

#[test]
fn zero_context_omits_outer_tokens() {
    let tokens = toks(&["The", "patient", "took", "aspirin", "for", "pain"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[2].start, tokens[2].end);
    let b = Span::new(tokens[3].start, tokens[3].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 0, OrderPolicy::Permissive).unwrap();
    assert_eq!(out, "<e1> took </e1> <e2> aspirin </e2>");
}

#[test]
fn leading_context_truncates_at_sentence_start() {
    let tokens = toks(&["The", "patient", "took", "aspirin"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[0].start, tokens[0].end);
    let b = Span::new(tokens[2].start, tokens[2].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 2, OrderPolicy::Permissive).unwrap();
    assert_eq!(out, "<e1> The </e1> patient <e2> took </e2> aspirin");
}

#[test]
fn trailing_context_stops_at_sentence_end() {
    // two sentences worth of tokens, boundary after "aspirin"
    let tokens = toks(&["patient", "took", "aspirin", "He", "rested"]);
    let sentence = Span::new(tokens[0].start, tokens[2].end);
    let a = Span::new(tokens[1].start, tokens[1].end);
    let b = Span::new(tokens[2].start, tokens[2].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 2, OrderPolicy::Permissive).unwrap();
    assert_eq!(out, "patient <e1> took </e1> <e2> aspirin </e2>");
}

#[test]
fn context_crossing_previous_sentence_is_dropped() {
    let tokens = toks(&["Earlier", "note", "patient", "took", "aspirin"]);
    let sentence = Span::new(tokens[2].start, tokens[4].end);
    let a = Span::new(tokens[3].start, tokens[3].end);
    let b = Span::new(tokens[4].start, tokens[4].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 3, OrderPolicy::Permissive).unwrap();
    assert_eq!(out, "patient <e1> took </e1> <e2> aspirin </e2>");
}

#[test]
fn multi_token_span_keeps_all_covered_tokens() {
    let tokens = toks(&["He", "developed", "severe", "rash", "after", "dosing"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[2].start, tokens[3].end);
    let b = Span::new(tokens[5].start, tokens[5].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 1, OrderPolicy::Permissive).unwrap();
    assert_eq!(out, "developed <e1> severe rash </e1> after <e2> dosing </e2>");
}

#[test]
fn embedded_newlines_are_normalised() {
    // a token spanning a line break keeps its raw text until serialisation
    let tokens = vec![Token::new(0, 8, "took\r\nit"), Token::new(20, 27, "aspirin")];
    let sentence = Span::new(0, 40);
    let a = Span::new(0, 8);
    let b = Span::new(20, 27);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 0, OrderPolicy::Permissive).unwrap();
    assert!(!out.contains('\n'));
    assert!(!out.contains('\r'));
    assert_eq!(out, "<e1> took  it </e1> <e2> aspirin </e2>");
}

#[test]
fn strict_policy_rejects_out_of_order_spans() {
    let tokens = toks(&["took", "aspirin"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[1].start, tokens[1].end);
    let b = Span::new(tokens[0].start, tokens[0].end);
    let err = extract(&tokens, sentence, a, "e1", b, "e2", 0, OrderPolicy::Strict).unwrap_err();
    assert!(matches!(err, WindowError::InvalidSpanOrder { .. }));
}

#[test]
fn permissive_policy_still_produces_output() {
    let tokens = toks(&["took", "aspirin"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[1].start, tokens[1].end);
    let b = Span::new(tokens[0].start, tokens[0].end);
    let out = extract(&tokens, sentence, a, "e1", b, "e2", 0, OrderPolicy::Permissive).unwrap();
    assert!(out.contains("<e1>"));
    assert!(out.contains("<e2>"));
}

#[test]
fn regions_format_folds_mentions_into_context() {
    let tokens = toks(&["The", "patient", "took", "aspirin", "for", "pain"]);
    let sentence = sentence_of(&tokens);
    let a = Span::new(tokens[2].start, tokens[2].end);
    let b = Span::new(tokens[3].start, tokens[3].end);
    let out = regions(&tokens, sentence, a, b, 1);
    assert_eq!(out, "patient took||aspirin for");
}

fn pair_inputs() -> impl Strategy<Value = (Vec<String>, usize, usize, usize)> {
    prop::collection::vec("[a-z]{1,6}", 4..12)
        .prop_flat_map(|words| {
            let len = words.len();
            (Just(words), 0..len - 1)
        })
        .prop_flat_map(|(words, i)| {
            let len = words.len();
            (Just(words), Just(i), (i + 1)..len, 0usize..4)
        })
}

proptest! {
    #[test]
    fn output_never_contains_raw_newlines_and_is_idempotent(
        (words, i, j, k) in pair_inputs()
    ) {
        let refs: Vec<&str> = words.iter().map(|s| s.as_str()).collect();
        let tokens = toks(&refs);
        let sentence = sentence_of(&tokens);
        let a = Span::new(tokens[i].start, tokens[i].end);
        let b = Span::new(tokens[j].start, tokens[j].end);

        let out = extract(&tokens, sentence, a, "e1", b, "e2", k, OrderPolicy::Permissive).unwrap();
        prop_assert!(!out.contains('\n'));
        prop_assert!(!out.contains('\r'));

        let again = extract(&tokens, sentence, a, "e1", b, "e2", k, OrderPolicy::Permissive).unwrap();
        prop_assert_eq!(&out, &again);

        // exactly j - i - 1 tokens between the marker pairs
        let after_a = out.split("</e1>").nth(1).unwrap();
        let mid = after_a.split("<e2>").next().unwrap();
        prop_assert_eq!(mid.split_whitespace().count(), j - i - 1);
    }
}
