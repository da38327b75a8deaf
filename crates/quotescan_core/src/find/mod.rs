//! Multi-needle substring search within a window.
//!
//! `memchr::memmem` does the per-needle work; these helpers combine the
//! per-needle results into the earliest (or latest) hit. Ties at the same
//! position go to the needle listed first.

use memchr::memmem;

/// Earliest occurrence of any needle lying entirely inside `haystack[from..to]`.
///
/// Returns `(position, needle_index)`. Empty needles are ignored.
///
/// # Contract
///
/// `from <= to <= haystack.len()`, both on `char` boundaries. Because the
/// needles are valid UTF-8, every reported position is a `char` boundary.
pub fn find_any(
    haystack: &str,
    needles: &[&str],
    from: usize,
    to: usize,
) -> Option<(usize, usize)> {
    debug_assert!(from <= to && to <= haystack.len());
    let window = &haystack.as_bytes()[from..to];
    let mut best: Option<(usize, usize)> = None;
    for (idx, needle) in needles.iter().enumerate() {
        if needle.is_empty() {
            continue;
        }
        // Only the part of the window before the current best can improve it.
        let limit = match best {
            Some((pos, _)) => (pos - from + needle.len()).min(window.len()),
            None => window.len(),
        };
        if let Some(hit) = memmem::find(&window[..limit], needle.as_bytes()) {
            let pos = from + hit;
            if !matches!(best, Some((b, _)) if b <= pos) {
                best = Some((pos, idx));
            }
        }
    }
    best
}

/// Latest occurrence of any needle lying entirely inside `haystack[from..to]`.
///
/// Returns `(position, needle_index)` where `position` is the start of the
/// match. Empty needles are ignored.
pub fn rfind_any(
    haystack: &str,
    needles: &[&str],
    from: usize,
    to: usize,
) -> Option<(usize, usize)> {
    debug_assert!(from <= to && to <= haystack.len());
    let window = &haystack.as_bytes()[from..to];
    let mut best: Option<(usize, usize)> = None;
    for (idx, needle) in needles.iter().enumerate() {
        if needle.is_empty() {
            continue;
        }
        if let Some(hit) = memmem::rfind(window, needle.as_bytes()) {
            let pos = from + hit;
            if !matches!(best, Some((b, _)) if b >= pos) {
                best = Some((pos, idx));
            }
        }
    }
    best
}
