use super::*;
use pretty_assertions::assert_eq;

/// Cursor over all of `text`.
fn whole(text: &str) -> Cursor<'_> {
    Cursor::new(text, 0, text.len())
}

fn matcher(delimiter: Delimiter<'_>) -> DelimiterMatcher<'_> {
    match DelimiterMatcher::new(delimiter) {
        Ok(m) => m,
        Err(err) => panic!("valid delimiter rejected: {err}"),
    }
}

fn hit(len: usize, index: Option<usize>) -> Option<DelimiterMatch> {
    Some(DelimiterMatch { len, index })
}

// === Validation ===

#[test]
fn empty_sets_are_rejected() {
    assert_eq!(
        DelimiterMatcher::new(Delimiter::Chars(&[])).map(|_| ()),
        Err(ScanError::InvalidConfiguration("empty delimiter set"))
    );
    assert_eq!(
        DelimiterMatcher::new(Delimiter::Strs(&[])).map(|_| ()),
        Err(ScanError::InvalidConfiguration("empty delimiter set"))
    );
}

#[test]
fn empty_strings_are_rejected() {
    assert_eq!(
        DelimiterMatcher::new(Delimiter::Str("")).map(|_| ()),
        Err(ScanError::InvalidConfiguration("empty delimiter string"))
    );
    assert_eq!(
        DelimiterMatcher::new(Delimiter::Strs(&["::", ""])).map(|_| ()),
        Err(ScanError::InvalidConfiguration("empty delimiter string"))
    );
}

// === Character Delimiters ===

#[test]
fn single_char() {
    let m = matcher(','.into());
    assert_eq!(m.try_match(&whole(",a")), hit(1, Some(0)));
    assert_eq!(m.try_match(&whole("a,")), None);
    assert_eq!(m.try_match(&whole("")), None);
}

#[test]
fn char_set_reports_array_slot() {
    let set = [';', ',', ';'];
    let m = matcher(Delimiter::Chars(&set));
    assert_eq!(m.try_match(&whole(",")), hit(1, Some(1)));
    // Duplicate entries: the first slot wins.
    assert_eq!(m.try_match(&whole(";")), hit(1, Some(0)));
}

#[test]
fn multibyte_char_length() {
    let m = matcher('→'.into());
    assert_eq!(m.try_match(&whole("→x")), hit(3, Some(0)));
}

#[test]
fn predicate_has_no_index() {
    let is_space = |c: char| c.is_whitespace();
    let m = matcher(Delimiter::Predicate(&is_space));
    assert_eq!(m.try_match(&whole("\tx")), hit(1, None));
    assert_eq!(m.try_match(&whole("x")), None);
}

#[test]
fn indexed_predicate_surfaces_index() {
    let classify = |c: char| match c {
        '+' => Some(0),
        '-' => Some(1),
        _ => None,
    };
    let m = matcher(Delimiter::Indexed(&classify));
    assert_eq!(m.try_match(&whole("-")), hit(1, Some(1)));
    assert_eq!(m.try_match(&whole("*")), None);
}

// === Substring Delimiters ===

#[test]
fn substring_match_length() {
    let m = matcher("::".into());
    assert_eq!(m.try_match(&whole("::b")), hit(2, Some(0)));
    assert_eq!(m.try_match(&whole(":b")), None);
}

#[test]
fn substring_must_fit_in_window() {
    let m = matcher("::".into());
    assert_eq!(m.try_match(&Cursor::new("a::", 1, 2)), None);
}

#[test]
fn substring_set_first_listed_wins() {
    let set = ["<", "<="];
    let m = matcher(Delimiter::Strs(&set));
    assert_eq!(m.try_match(&whole("<=")), hit(1, Some(0)));
    let set = ["<=", "<"];
    let m = matcher(Delimiter::Strs(&set));
    assert_eq!(m.try_match(&whole("<=")), hit(2, Some(0)));
    assert_eq!(m.try_match(&whole("<x")), hit(1, Some(1)));
}

#[test]
fn needles_only_for_substrings() {
    assert_eq!(matcher(','.into()).needles(), None);
    let set = ["a", "bc"];
    assert_eq!(
        matcher(Delimiter::Strs(&set)).needles().map(|n| n.to_vec()),
        Some(vec!["a", "bc"])
    );
}

#[test]
fn debug_hides_closures() {
    let f = |_: char| true;
    assert_eq!(format!("{:?}", Delimiter::Predicate(&f)), "Predicate(..)");
    assert_eq!(format!("{:?}", Delimiter::Char('x')), "Char('x')");
}
