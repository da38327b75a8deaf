//! Quote-aware point search, forward and backward.
//!
//! Forward search runs the quote tracker alongside the scan. Backward search
//! cannot: whether a position is quoted depends on everything before it. It
//! builds a [`QuoteMap`] for the window with one forward pass, then walks
//! back from the window end, jumping over whole quote regions. Both paths
//! treat a position as structural iff it lies outside every quote region,
//! so they agree on every position of the same window.
//!
//! Substring delimiters take an accelerated path: between quotes, the next
//! candidate is located with [`find_any`] / [`rfind_any`] instead of testing
//! every position.

use quotescan_core::{find_any, rfind_any, Cursor, QuoteMap, QuoteSet, QuoteTracker};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{Delimiter, DelimiterMatch, DelimiterMatcher, ScanError, ScanOptions, Window};

/// A search hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult<'t> {
    /// Byte offset of the match start.
    pub position: usize,
    /// Which element of the delimiter set matched.
    pub index: Option<usize>,
    /// The matched text.
    pub value: &'t str,
}

struct Searcher<'t, 'd, 'o> {
    text: &'t str,
    window: Window,
    matcher: DelimiterMatcher<'d>,
    quotes: &'o QuoteSet,
    /// Substring needles, when the delimiter has them.
    needles: Option<SmallVec<[&'d str; 4]>>,
    /// Longest needle length.
    reach: usize,
}

impl<'t, 'd, 'o> Searcher<'t, 'd, 'o> {
    fn new(
        text: &'t str,
        delimiter: Delimiter<'d>,
        options: &'o ScanOptions,
    ) -> Result<Self, ScanError> {
        let window = options.window(text)?;
        let matcher = DelimiterMatcher::new(delimiter)?;
        let needles = matcher.needles();
        let reach = needles
            .as_ref()
            .and_then(|n| n.iter().map(|s| s.len()).max())
            .unwrap_or(0);
        Ok(Searcher {
            text,
            window,
            matcher,
            quotes: &options.quotes,
            needles,
            reach,
        })
    }

    fn hit(&self, position: usize, m: DelimiterMatch) -> SearchResult<'t> {
        SearchResult {
            position,
            index: m.index,
            value: &self.text[position..position + m.len],
        }
    }

    /// Position of the next primary left quote at or after `pos`.
    fn next_opening(&self, pos: usize) -> Option<usize> {
        if self.quotes.is_empty() {
            return None;
        }
        self.text[pos..self.window.end]
            .char_indices()
            .find(|&(_, c)| self.quotes.primary.find_left(c).is_some())
            .map(|(offset, _)| pos + offset)
    }

    fn forward(&self) -> Result<Option<SearchResult<'t>>, ScanError> {
        let end = self.window.end;
        let mut cursor = self.window.cursor(self.text);
        let mut tracker = QuoteTracker::new(self.quotes);

        while let Some(c) = cursor.current() {
            let pos = cursor.pos();

            if tracker.is_outside() {
                if let Some(needles) = &self.needles {
                    // A match must start before the next opening quote, but
                    // may run into it.
                    let opening = self.next_opening(pos);
                    let limit = opening.map_or(end, |q| (q + self.reach - 1).min(end));
                    if let Some((at, index)) = find_any(self.text, needles, pos, limit)
                        .filter(|&(at, _)| !matches!(opening, Some(q) if at >= q))
                    {
                        trace!(pos = at, index, "substring match");
                        return Ok(Some(SearchResult {
                            position: at,
                            index: Some(index),
                            value: &self.text[at..at + needles[index].len()],
                        }));
                    }
                    let Some(q) = opening else {
                        return Ok(None);
                    };
                    cursor.seek(q);
                    let Some(open) = cursor.current() else {
                        break;
                    };
                    tracker.observe(open, q);
                    trace!(pos = q, "quote open");
                    cursor.advance();
                    continue;
                }

                if !tracker.would_open(c) {
                    if let Some(m) = self.matcher.try_match(&cursor) {
                        trace!(pos, index = ?m.index, "match");
                        return Ok(Some(self.hit(pos, m)));
                    }
                }
            }

            let action = tracker.observe(c, pos);
            if action.is_quote_marker() {
                trace!(pos, ?action, depth = tracker.depth(), "quote");
            }
            cursor.advance();
        }

        if let Err(unclosed) = tracker.finish() {
            debug!(
                open = unclosed.open,
                left = %unclosed.pair.left,
                end,
                "forward search ended inside a quote"
            );
            return Err(unclosed.into());
        }
        Ok(None)
    }

    fn backward(&self) -> Result<Option<SearchResult<'t>>, ScanError> {
        let map = match QuoteMap::build(self.window.cursor(self.text), self.quotes) {
            Ok(map) => map,
            Err(unclosed) => {
                debug!(
                    open = unclosed.open,
                    left = %unclosed.pair.left,
                    end = self.window.end,
                    "backward search window ends inside a quote"
                );
                return Err(unclosed.into());
            }
        };
        trace!(regions = map.regions().len(), "quote map");

        if map.is_empty() {
            if let Some(needles) = &self.needles {
                return Ok(
                    rfind_any(self.text, needles, self.window.start, self.window.end).map(
                        |(at, index)| SearchResult {
                            position: at,
                            index: Some(index),
                            value: &self.text[at..at + needles[index].len()],
                        },
                    ),
                );
            }
        }

        let mut cursor: Cursor<'t> = self.window.cursor(self.text).at_end();
        while !cursor.is_bof() {
            cursor.retreat();
            let pos = cursor.pos();
            if let Some(region) = map.region_at(pos) {
                cursor.seek(region.start);
                continue;
            }
            if let Some(m) = self.matcher.try_match(&cursor) {
                trace!(pos, index = ?m.index, "match");
                return Ok(Some(self.hit(pos, m)));
            }
        }
        Ok(None)
    }
}

/// Byte offset of the first out-of-quote match in the window.
///
/// A quote left open after the match does not make this fail; reaching the
/// window end inside a quote without a match does.
pub fn index_of_with_quotes<'d>(
    text: &str,
    delimiter: impl Into<Delimiter<'d>>,
    options: &ScanOptions,
) -> Result<Option<usize>, ScanError> {
    Ok(Searcher::new(text, delimiter.into(), options)?
        .forward()?
        .map(|hit| hit.position))
}

/// First out-of-quote match in the window, with the matched element.
pub fn index_of_any_with_quotes<'t, 'd>(
    text: &'t str,
    delimiter: impl Into<Delimiter<'d>>,
    options: &ScanOptions,
) -> Result<Option<SearchResult<'t>>, ScanError> {
    Searcher::new(text, delimiter.into(), options)?.forward()
}

/// Byte offset of the last out-of-quote match in the window.
///
/// Fails if any quote in the window is left open, wherever the match is.
pub fn last_index_of_with_quotes<'d>(
    text: &str,
    delimiter: impl Into<Delimiter<'d>>,
    options: &ScanOptions,
) -> Result<Option<usize>, ScanError> {
    Ok(Searcher::new(text, delimiter.into(), options)?
        .backward()?
        .map(|hit| hit.position))
}

/// Last out-of-quote match in the window, with the matched element.
pub fn last_index_of_any_with_quotes<'t, 'd>(
    text: &'t str,
    delimiter: impl Into<Delimiter<'d>>,
    options: &ScanOptions,
) -> Result<Option<SearchResult<'t>>, ScanError> {
    Searcher::new(text, delimiter.into(), options)?.backward()
}

/// Returns `true` if the delimiter occurs outside quotes in the window.
pub fn contains_with_quotes<'d>(
    text: &str,
    delimiter: impl Into<Delimiter<'d>>,
    options: &ScanOptions,
) -> Result<bool, ScanError> {
    Ok(index_of_with_quotes(text, delimiter, options)?.is_some())
}
