//! Key/value list parsing on top of the split and search engines.
//!
//! `a=1; b = "x;y" ; c` splits on the pair delimiter first, then each pair
//! on its first out-of-quote key/value delimiter. Keys and values are
//! trimmed; a pair without a key/value delimiter has an empty value.

use std::borrow::Cow;

use crate::{
    index_of_any_with_quotes, Delimiter, ScanError, ScanOptions, SplitFlags, Splitter, Window,
};

/// Parse `text` as a delimited list of key/value pairs.
///
/// Quote handling, window and `KEEP_QUOTES` come from `options`; the other
/// split flags are fixed (pairs are trimmed and empty pairs skipped).
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn split_key_value<'t, 'd>(
    text: &'t str,
    pair_delimiter: impl Into<Delimiter<'d>>,
    kv_delimiter: impl Into<Delimiter<'d>>,
    options: &ScanOptions,
) -> Result<Vec<(Cow<'t, str>, Cow<'t, str>)>, ScanError> {
    let kv_delimiter = kv_delimiter.into();
    let pair_options = options
        .clone()
        .with_flags(SplitFlags::TRIM | SplitFlags::REMOVE_EMPTY | SplitFlags::KEEP_QUOTES);
    let pairs = Splitter::new(text, pair_delimiter, &pair_options)?;

    let mut out = Vec::new();
    for pair in pairs.iter() {
        let span = pair?.span;
        let scope = options.clone().with_window(Window {
            start: span.start,
            end: span.end,
        });
        let entry = match index_of_any_with_quotes(text, kv_delimiter, &scope)? {
            Some(hit) => (
                fragment(text, span.start, hit.position, options)?,
                fragment(text, hit.position + hit.value.len(), span.end, options)?,
            ),
            None => (fragment(text, span.start, span.end, options)?, Cow::Borrowed("")),
        };
        out.push(entry);
    }
    Ok(out)
}

/// `text[start..end]`, trimmed and with quotes stripped per `options`.
fn fragment<'t>(
    text: &'t str,
    start: usize,
    end: usize,
    options: &ScanOptions,
) -> Result<Cow<'t, str>, ScanError> {
    let never = |_: char| false;
    let flags = SplitFlags::TRIM | (options.flags & SplitFlags::KEEP_QUOTES);
    let scope = options
        .clone()
        .with_window(Window { start, end })
        .with_flags(flags);
    let splitter = Splitter::new(text, Delimiter::Predicate(&never), &scope)?;
    let token = splitter.tokens().next().transpose()?;
    Ok(token.unwrap_or_default())
}
