//! End-to-end scenarios through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use quotescan::{
    index_of_any_with_quotes, init_tracing, last_index_of_any_with_quotes, split_key_value,
    split_with_quotes, Delimiter, QuotePair, QuoteSet, ScanError, ScanOptions, SearchResult,
    SplitFlags, Splitter,
};

#[test]
fn csv_like_line() {
    init_tracing();
    let options = ScanOptions::new()
        .with_quotes(QuoteSet::double())
        .with_flags(SplitFlags::TRIM)
        .keep_quotes(false);
    let fields = split_with_quotes(
        "1, \"Smith, John\" , \"\", 42",
        ','.into(),
        &options,
    )
    .unwrap();
    assert_eq!(fields, vec!["1", "Smith, John", "", "42"]);
}

#[test]
fn argument_list_with_nested_calls() {
    let options = ScanOptions::new()
        .with_quotes(QuoteSet::brackets())
        .trim(true);
    let args = split_with_quotes("f(a, b), [1, 2], {k: v}, x", ','.into(), &options).unwrap();
    assert_eq!(args, vec!["f(a, b)", "[1, 2]", "{k: v}", "x"]);
}

#[test]
fn heterogeneous_quote_arrays() {
    let options = ScanOptions::new()
        .with_quote_arrays(&['"', '<'], &['"', '>'])
        .unwrap();
    let parts = split_with_quotes("a|<b|c>|\"d|e\"", '|'.into(), &options).unwrap();
    assert_eq!(parts, vec!["a", "<b|c>", "\"d|e\""]);
}

#[test]
fn mismatched_quote_arrays_are_rejected() {
    assert_eq!(
        ScanOptions::new().with_quote_arrays(&['"', '<'], &['"']),
        Err(ScanError::InvalidConfiguration(
            "left and right quote arrays differ in length"
        ))
    );
}

#[test]
fn two_layer_quotes() {
    let options = ScanOptions::quoted('"', '"')
        .with_secondary([QuotePair::same('\'')])
        .keep_quotes(false);
    let parts = split_with_quotes("cmd \"say 'hi there'\" now", ' '.into(), &options).unwrap();
    assert_eq!(parts, vec!["cmd", "say hi there", "now"]);
}

#[test]
fn lazy_consumption_stops_early() {
    let splitter = Splitter::new("a,b,c,{d", ',', &ScanOptions::quoted('{', '}')).unwrap();
    let first_two: Vec<_> = splitter.tokens().take(2).map(Result::unwrap).collect();
    assert_eq!(first_two, vec![Cow::Borrowed("a"), Cow::Borrowed("b")]);
    assert_eq!(splitter.tokens().filter(Result::is_err).count(), 1);
}

#[test]
fn searches_report_the_matched_operator() {
    let ops = ["<=", "<", "=="];
    let options = ScanOptions::quoted('"', '"');
    let text = "x <= \"a < b\" == y < z";
    assert_eq!(
        index_of_any_with_quotes(text, Delimiter::Strs(&ops), &options),
        Ok(Some(SearchResult {
            position: 2,
            index: Some(0),
            value: "<=",
        }))
    );
    assert_eq!(
        last_index_of_any_with_quotes(text, Delimiter::Strs(&ops), &options),
        Ok(Some(SearchResult {
            position: 18,
            index: Some(1),
            value: "<",
        }))
    );
}

#[test]
fn key_value_header() {
    let options = ScanOptions::new()
        .with_quotes(QuoteSet::double())
        .keep_quotes(false);
    let pairs = split_key_value(
        "text/html; charset=utf-8; name=\"a; b.txt\"",
        ';',
        '=',
        &options,
    )
    .unwrap();
    assert_eq!(
        pairs,
        vec![
            (Cow::Borrowed("text/html"), Cow::Borrowed("")),
            (Cow::Borrowed("charset"), Cow::Borrowed("utf-8")),
            (Cow::Borrowed("name"), Cow::Owned("a; b.txt".to_owned())),
        ]
    );
}

#[test]
fn errors_render_for_humans() {
    let err = split_with_quotes("a,{b", ','.into(), &ScanOptions::quoted('{', '}')).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unterminated quote: `{` at byte 2 has no matching `}`"
    );
}

#[test]
fn tracing_init_is_repeatable() {
    init_tracing();
    init_tracing();
    assert_eq!(
        split_with_quotes("a,b", ','.into(), &ScanOptions::new()).unwrap(),
        vec!["a", "b"]
    );
}
