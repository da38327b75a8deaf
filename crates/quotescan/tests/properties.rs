//! Property-based tests for the split and search engines.
//!
//! Inputs are built from plain runs and quoted groups, so quotes are always
//! balanced. Braces alone exercise stack pairs; a second family mixes brace
//! groups with `"` toggle groups. A naive state machine serves as the
//! oracle for which separators are structural.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use quotescan::{
    index_of_with_quotes, last_index_of_with_quotes, split_with_quotes, split_with_separators,
    ScanOptions,
};

/// Unquoted text, separators included.
fn plain_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab ,;]{0,4}").expect("valid regex")
}

/// A brace group, possibly nested one level.
fn group_strategy() -> impl Strategy<Value = String> {
    (plain_strategy(), plain_strategy(), any::<bool>()).prop_map(|(outer, inner, nest)| {
        if nest {
            format!("{{{outer}{{{inner}}}}}")
        } else {
            format!("{{{outer}}}")
        }
    })
}

/// Balanced input.
fn input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![plain_strategy(), group_strategy()], 0..8)
        .prop_map(|parts| parts.concat())
}

/// Positions of `,` outside braces.
fn structural_commas(text: &str) -> Vec<usize> {
    let mut depth = 0u32;
    let mut out = Vec::new();
    for (pos, c) in text.char_indices() {
        match (depth, c) {
            (0, ',') => out.push(pos),
            (_, '{') => depth += 1,
            (1.., '}') => depth -= 1,
            _ => {}
        }
    }
    out
}

/// A `"` group. Braces inside it are content and need not balance.
fn toggle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab ,;{}]{0,4}")
        .expect("valid regex")
        .prop_map(|inner| format!("\"{inner}\""))
}

/// A brace group that may contain a toggle group, or the reverse nesting
/// through plain text.
fn mixed_group_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        group_strategy(),
        toggle_strategy(),
        (plain_strategy(), plain_strategy(), plain_strategy())
            .prop_map(|(a, b, c)| format!("{{{a}\"{b}\"{c}}}")),
    ]
}

/// Balanced input mixing toggle and stack quotes.
fn mixed_input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![plain_strategy(), mixed_group_strategy()], 0..8)
        .prop_map(|parts| parts.concat())
}

/// Positions of `,` outside `{}` and `"` quotes.
fn structural_commas_mixed(text: &str) -> Vec<usize> {
    let mut open: Option<(char, u32)> = None;
    let mut out = Vec::new();
    for (pos, c) in text.char_indices() {
        open = match (open, c) {
            (None, ',') => {
                out.push(pos);
                None
            }
            (None, '{' | '"') => Some((c, 1)),
            (Some(('"', _)), '"') | (Some(('{', 1)), '}') => None,
            (Some(('{', d)), '{') => Some(('{', d + 1)),
            (Some(('{', d)), '}') => Some(('{', d - 1)),
            (state, _) => state,
        };
    }
    out
}

fn mixed() -> ScanOptions {
    ScanOptions::new()
        .with_quote_arrays(&['"', '{'], &['"', '}'])
        .expect("parallel arrays")
}

fn braces() -> ScanOptions {
    ScanOptions::quoted('{', '}')
}

proptest! {
    #[test]
    fn kept_separators_round_trip(text in input_strategy()) {
        let tokens = split_with_quotes(&text, ','.into(), &braces().keep_separator(true)).unwrap();
        prop_assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn content_plus_separator_round_trips(text in input_strategy()) {
        let tokens = split_with_separators(&text, ','.into(), &braces()).unwrap();
        let joined: String = tokens
            .iter()
            .map(|t| format!("{}{}", t.content, t.separator.unwrap_or("")))
            .collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn quoted_separators_are_never_reported(text in input_strategy()) {
        let tokens = split_with_separators(&text, ','.into(), &braces()).unwrap();
        let reported: Vec<usize> = tokens
            .iter()
            .filter(|t| t.separator.is_some())
            .map(|t| t.span.end)
            .collect();
        prop_assert_eq!(reported, structural_commas(&text));
    }

    #[test]
    fn search_directions_agree(text in input_strategy()) {
        let expected = structural_commas(&text);
        prop_assert_eq!(
            index_of_with_quotes(&text, ',', &braces()).unwrap(),
            expected.first().copied()
        );
        prop_assert_eq!(
            last_index_of_with_quotes(&text, ',', &braces()).unwrap(),
            expected.last().copied()
        );
    }

    #[test]
    fn substring_search_matches_char_search(text in input_strategy()) {
        prop_assert_eq!(
            index_of_with_quotes(&text, ",", &braces()).unwrap(),
            index_of_with_quotes(&text, ',', &braces()).unwrap()
        );
        prop_assert_eq!(
            last_index_of_with_quotes(&text, ",", &braces()).unwrap(),
            last_index_of_with_quotes(&text, ',', &braces()).unwrap()
        );
    }

    #[test]
    fn unbalanced_input_never_panics(text in "[ab,{}]{0,12}") {
        let _ = split_with_quotes(&text, ','.into(), &braces());
        let _ = index_of_with_quotes(&text, ',', &braces());
        let _ = last_index_of_with_quotes(&text, ',', &braces());
    }

    #[test]
    fn mixed_kept_separators_round_trip(text in mixed_input_strategy()) {
        let tokens = split_with_quotes(&text, ','.into(), &mixed().keep_separator(true)).unwrap();
        prop_assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn mixed_quoted_separators_are_never_reported(text in mixed_input_strategy()) {
        let tokens = split_with_separators(&text, ','.into(), &mixed()).unwrap();
        let reported: Vec<usize> = tokens
            .iter()
            .filter(|t| t.separator.is_some())
            .map(|t| t.span.end)
            .collect();
        prop_assert_eq!(reported, structural_commas_mixed(&text));
    }

    #[test]
    fn mixed_search_directions_agree(text in mixed_input_strategy()) {
        let expected = structural_commas_mixed(&text);
        prop_assert_eq!(
            index_of_with_quotes(&text, ',', &mixed()).unwrap(),
            expected.first().copied()
        );
        prop_assert_eq!(
            last_index_of_with_quotes(&text, ',', &mixed()).unwrap(),
            expected.last().copied()
        );
    }

    #[test]
    fn split_and_search_agree_on_quote_bearing_separators(text in "[xa\"]{0,10}") {
        let options = ScanOptions::quoted('"', '"');
        let split = split_with_separators(&text, "a\"".into(), &options);
        let first = index_of_with_quotes(&text, "a\"", &options);
        let last = last_index_of_with_quotes(&text, "a\"", &options);
        match split {
            Ok(tokens) => {
                let reported: Vec<usize> = tokens
                    .iter()
                    .filter(|t| t.separator.is_some())
                    .map(|t| t.span.end)
                    .collect();
                prop_assert_eq!(first.unwrap(), reported.first().copied());
                prop_assert_eq!(last.unwrap(), reported.last().copied());
            }
            Err(_) => prop_assert!(last.is_err()),
        }
    }
}
