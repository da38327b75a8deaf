//! Quote-aware split engine.
//!
//! [`SplitIter`] is an explicit state machine: it holds the cursor, the quote
//! tracker, where the current token started, and which quote characters in
//! that token are to be stripped. Each call to `next` scans forward until a
//! separator outside every quote ends the current token, or the window end
//! ends the last one.
//!
//! # Precedence
//!
//! At a position outside quotes, an opening quote wins over a delimiter: a
//! character that opens a quote is never tested as a separator. A substring
//! separator may still contain quote characters after its first one; those
//! are fed to the tracker like any other character, so a separator can open
//! or close a quote region exactly as the search engine sees it.
//!
//! # Token Policy
//!
//! 1. Trim (when `TRIM` is set) the raw token range.
//! 2. Strip quote markers (when `KEEP_QUOTES` is clear) inside that range.
//! 3. Drop the token if it is now empty and `REMOVE_EMPTY` is set. A dropped
//!    token takes its separator with it.
//! 4. Append the separator (when `KEEP_SEPARATOR` is set).
//!
//! Trimming before stripping means whitespace protected by quotes survives.

use std::borrow::Cow;
use std::iter::FusedIterator;
use std::ops::Range;

use quotescan_core::{Cursor, QuoteSet, QuoteTracker};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{Delimiter, DelimiterMatcher, ScanError, ScanOptions, SplitFlags, Window};

/// One token produced by the split engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'t> {
    /// Token text after the split policy. Borrowed from the input whenever
    /// it is a contiguous slice of it.
    pub content: Cow<'t, str>,
    /// The separator that ended this token; `None` for the last token.
    pub separator: Option<&'t str>,
    /// Which element of the delimiter set matched.
    pub separator_index: Option<usize>,
    /// Raw byte range of the token in the input, before trimming and
    /// without the separator.
    pub span: Range<usize>,
}

impl Token<'_> {
    /// First character of the separator, for character delimiters.
    pub fn separator_char(&self) -> Option<char> {
        self.separator.and_then(|s| s.chars().next())
    }
}

/// A configured split over one input.
///
/// The splitter itself is immutable; every call to [`iter`](Self::iter)
/// starts an independent scan.
#[derive(Debug)]
pub struct Splitter<'t, 'd> {
    text: &'t str,
    window: Window,
    matcher: DelimiterMatcher<'d>,
    quotes: QuoteSet,
    flags: SplitFlags,
}

impl<'t, 'd> Splitter<'t, 'd> {
    /// Validate the window and delimiter. Nothing is scanned yet.
    pub fn new(
        text: &'t str,
        delimiter: impl Into<Delimiter<'d>>,
        options: &ScanOptions,
    ) -> Result<Self, ScanError> {
        let window = options.window(text)?;
        let matcher = DelimiterMatcher::new(delimiter.into())?;
        Ok(Splitter {
            text,
            window,
            matcher,
            quotes: options.quotes.clone(),
            flags: options.flags,
        })
    }

    /// Lazily produce tokens with separator information.
    pub fn iter(&self) -> SplitIter<'_, 't, 'd> {
        SplitIter {
            splitter: self,
            cursor: self.window.cursor(self.text),
            tracker: QuoteTracker::new(&self.quotes),
            token_start: self.window.start,
            stripped: SmallVec::new(),
            done: false,
        }
    }

    /// Lazily produce token contents only.
    pub fn tokens(&self) -> Tokens<'_, 't, 'd> {
        Tokens { inner: self.iter() }
    }

    pub fn window(&self) -> Window {
        self.window
    }
}

/// Split state machine. Restartable with [`reset`](Self::reset).
#[derive(Debug)]
pub struct SplitIter<'s, 't, 'd> {
    splitter: &'s Splitter<'t, 'd>,
    cursor: Cursor<'t>,
    tracker: QuoteTracker<'s>,
    /// Start of the token being accumulated.
    token_start: usize,
    /// Positions of quote markers in the current token to strip.
    stripped: SmallVec<[usize; 4]>,
    done: bool,
}

impl<'t> SplitIter<'_, 't, '_> {
    /// Rewind to the window start, discarding all scan state.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.tracker.reset();
        self.token_start = self.cursor.start();
        self.stripped.clear();
        self.done = false;
    }

    /// Run the characters of a consumed separator through the tracker.
    ///
    /// Quote markers here belong to the separator, never to token content,
    /// so they are not recorded for stripping.
    fn observe_separator(&mut self, start: usize, end: usize) {
        for (offset, c) in self.splitter.text[start..end].char_indices() {
            let action = self.tracker.observe(c, start + offset);
            if action.is_quote_marker() {
                trace!(pos = start + offset, ?action, "quote in separator");
            }
        }
    }

    /// Close the current token at `end`.
    ///
    /// `separator` is the separator's end offset and index when a separator
    /// ended the token. Returns `None` when the policy drops the token.
    fn cut(
        &mut self,
        end: usize,
        separator: Option<(usize, Option<usize>)>,
    ) -> Option<Token<'t>> {
        let text = self.splitter.text;
        let flags = self.splitter.flags;
        let raw_start = self.token_start;
        let (sep_end, separator_index) = separator.unwrap_or((end, None));
        self.token_start = sep_end;

        let (mut start, mut stop) = (raw_start, end);
        if flags.contains(SplitFlags::TRIM) {
            let body = &text[start..stop];
            start += body.len() - body.trim_start().len();
            stop = start + body.trim().len();
        }

        let content = if self.stripped.iter().any(|p| (start..stop).contains(p)) {
            let mut owned = String::with_capacity(stop - start);
            for (offset, c) in text[start..stop].char_indices() {
                if self.stripped.binary_search(&(start + offset)).is_err() {
                    owned.push(c);
                }
            }
            Cow::Owned(owned)
        } else {
            Cow::Borrowed(&text[start..stop])
        };
        self.stripped.clear();

        if content.is_empty() && flags.contains(SplitFlags::REMOVE_EMPTY) {
            trace!(start = raw_start, end, "dropped empty token");
            return None;
        }

        let separator = separator.map(|_| &text[end..sep_end]);
        let content = match (separator, flags.contains(SplitFlags::KEEP_SEPARATOR)) {
            (Some(sep), true) => match content {
                Cow::Borrowed(_) if stop == end => Cow::Borrowed(&text[start..sep_end]),
                other => Cow::Owned(other.into_owned() + sep),
            },
            _ => content,
        };

        Some(Token {
            content,
            separator,
            separator_index,
            span: raw_start..end,
        })
    }
}

impl<'t> Iterator for SplitIter<'_, 't, '_> {
    type Item = Result<Token<'t>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let keep_quotes = self.splitter.flags.contains(SplitFlags::KEEP_QUOTES);

        while let Some(c) = self.cursor.current() {
            let pos = self.cursor.pos();
            if self.tracker.is_outside() && !self.tracker.would_open(c) {
                if let Some(hit) = self.splitter.matcher.try_match(&self.cursor) {
                    trace!(pos, len = hit.len, index = ?hit.index, "separator");
                    let token = self.cut(pos, Some((pos + hit.len, hit.index)));
                    self.observe_separator(pos, pos + hit.len);
                    self.cursor.advance_n(hit.len);
                    if token.is_some() {
                        return token.map(Ok);
                    }
                    continue;
                }
            }
            let action = self.tracker.observe(c, pos);
            if action.is_quote_marker() {
                trace!(pos, ?action, depth = self.tracker.depth(), "quote");
                if !keep_quotes {
                    self.stripped.push(pos);
                }
            }
            self.cursor.advance();
        }

        self.done = true;
        if let Err(unclosed) = self.tracker.finish() {
            debug!(
                open = unclosed.open,
                left = %unclosed.pair.left,
                end = self.cursor.end(),
                "split scope ended inside a quote"
            );
            return Some(Err(unclosed.into()));
        }
        let end = self.cursor.pos();
        self.cut(end, None).map(Ok)
    }
}

impl FusedIterator for SplitIter<'_, '_, '_> {}

/// Token contents without separator information.
#[derive(Debug)]
pub struct Tokens<'s, 't, 'd> {
    inner: SplitIter<'s, 't, 'd>,
}

impl Tokens<'_, '_, '_> {
    /// Rewind to the window start, discarding all scan state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<'t> Iterator for Tokens<'_, 't, '_> {
    type Item = Result<Cow<'t, str>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|token| token.map(|t| t.content))
    }
}

impl FusedIterator for Tokens<'_, '_, '_> {}

/// Split `text` into token contents.
///
/// Fails without returning any tokens if a quote is left open.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn split_with_quotes<'t>(
    text: &'t str,
    delimiter: Delimiter<'_>,
    options: &ScanOptions,
) -> Result<Vec<Cow<'t, str>>, ScanError> {
    Splitter::new(text, delimiter, options)?.tokens().collect()
}

/// Split `text` into tokens carrying their separators and separator indices.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn split_with_separators<'t>(
    text: &'t str,
    delimiter: Delimiter<'_>,
    options: &ScanOptions,
) -> Result<Vec<Token<'t>>, ScanError> {
    Splitter::new(text, delimiter, options)?.iter().collect()
}
