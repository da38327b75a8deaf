//! Quote region boundaries for a window.
//!
//! A backward scan cannot know whether its origin sits inside a quote
//! without looking at everything before it. [`QuoteMap::build`] runs the
//! [`QuoteTracker`] forward once over the window and records each top-level
//! primary region as `open..close_end` (the half-open byte range from the
//! opening quote up to and including the closing quote). Backward queries
//! then skip whole regions.
//!
//! A position is *eligible* (structural) iff it lies in no region. This is
//! exactly the forward rule "tracker outside, and the character does not
//! open a quote", so forward and backward scans classify every position of
//! the same window identically.

use std::ops::Range;

use crate::cursor::Cursor;
use crate::quote::QuoteSet;
use crate::tracker::{QuoteAction, QuoteTracker, Unclosed};

/// Sorted, non-overlapping quote regions of one window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteMap {
    regions: Vec<Range<usize>>,
}

impl QuoteMap {
    /// Scan the cursor's window forward and collect quote regions.
    ///
    /// The cursor is consumed from its current position to its end bound.
    /// Fails when a quote is still open at the end bound.
    pub fn build(mut cursor: Cursor<'_>, quotes: &QuoteSet) -> Result<Self, Unclosed> {
        let mut regions = Vec::new();
        if quotes.is_empty() {
            return Ok(QuoteMap { regions });
        }
        let mut tracker = QuoteTracker::new(quotes);
        let mut open = 0;
        while let Some(c) = cursor.current() {
            let pos = cursor.pos();
            match tracker.observe(c, pos) {
                QuoteAction::Open => open = pos,
                QuoteAction::Close => regions.push(open..pos + c.len_utf8()),
                QuoteAction::Content | QuoteAction::SecondaryQuote => {}
            }
            cursor.advance();
        }
        tracker.finish()?;
        Ok(QuoteMap { regions })
    }

    /// The region containing `pos`, if any.
    pub fn region_at(&self, pos: usize) -> Option<Range<usize>> {
        // First region whose end is past `pos`; it contains `pos` iff it
        // also starts at or before it.
        let idx = self.regions.partition_point(|r| r.end <= pos);
        self.regions
            .get(idx)
            .filter(|r| r.start <= pos)
            .cloned()
    }

    /// Returns `true` if `pos` is inside a quote region (opening and closing
    /// quote characters included).
    #[inline]
    pub fn is_quoted(&self, pos: usize) -> bool {
        self.region_at(pos).is_some()
    }

    pub fn regions(&self) -> &[Range<usize>] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
