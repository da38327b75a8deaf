//! Quote-tracking state machine.
//!
//! The tracker consumes characters one at a time and answers "are we inside
//! a quote, and which one". Only one primary region is open at a time:
//! while it is open, left quotes of *other* kinds are plain content, and
//! only the open kind's own characters change depth.
//!
//! # Transitions
//!
//! | State                 | Character                       | Next                 | Action           |
//! |-----------------------|---------------------------------|----------------------|------------------|
//! | `Outside`             | primary left quote              | `Inside(kind, 1)`    | `Open`           |
//! | `Outside`             | anything else                   | `Outside`            | `Content`        |
//! | `Inside(kind, d)`     | `left(kind)`, stack pair        | `Inside(kind, d+1)`  | `Content`        |
//! | `Inside(kind, 1)`     | `right(kind)`                   | `Outside`            | `Close`          |
//! | `Inside(kind, d > 1)` | `right(kind)`                   | `Inside(kind, d-1)`  | `Content`        |
//! | `Inside(..)`          | secondary-layer quote character | unchanged            | `SecondaryQuote` |
//! | `Inside(..)`          | anything else                   | unchanged            | `Content`        |
//!
//! Toggle pairs check the right-quote row first, so they close instead of
//! nesting.

use crate::quote::{QuotePair, QuoteSet};

/// Where the tracker currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteState {
    /// No primary quote open.
    Outside,
    /// Inside a primary quote.
    Inside {
        /// Index of the open pair in the primary table.
        pair: usize,
        /// Nesting depth of the open kind, always `>= 1`.
        depth: u32,
        /// Byte position of the left quote that opened the region.
        open: usize,
    },
}

/// What a single observed character meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteAction {
    /// Ordinary content. Outside a quote the caller may still try to match
    /// it as a delimiter; inside a quote it is escaped.
    Content,
    /// The character opened a primary quote region.
    Open,
    /// The character closed the open primary quote region.
    Close,
    /// A secondary-layer quote character inside a primary region. Content
    /// for structural purposes.
    SecondaryQuote,
}

impl QuoteAction {
    /// Returns `true` for characters that are quote markers rather than
    /// content (the ones `keep_quotes == false` strips).
    #[inline]
    pub fn is_quote_marker(self) -> bool {
        !matches!(self, QuoteAction::Content)
    }
}

/// A primary quote still open when the scan scope ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unclosed {
    /// Byte position of the opening quote.
    pub open: usize,
    /// The quote kind left open.
    pub pair: QuotePair,
    /// Depth at the end of the scope.
    pub depth: u32,
}

/// Quote-tracking state machine over a [`QuoteSet`].
///
/// Not shared between scans: each engine owns one and calls
/// [`reset`](Self::reset) to restart.
#[derive(Clone, Debug)]
pub struct QuoteTracker<'q> {
    quotes: &'q QuoteSet,
    state: QuoteState,
}

impl<'q> QuoteTracker<'q> {
    pub fn new(quotes: &'q QuoteSet) -> Self {
        QuoteTracker {
            quotes,
            state: QuoteState::Outside,
        }
    }

    /// Feed one character at byte position `pos`.
    pub fn observe(&mut self, c: char, pos: usize) -> QuoteAction {
        match self.state {
            QuoteState::Outside => match self.quotes.primary.find_left(c) {
                Some(pair) => {
                    self.state = QuoteState::Inside {
                        pair,
                        depth: 1,
                        open: pos,
                    };
                    QuoteAction::Open
                }
                None => QuoteAction::Content,
            },
            QuoteState::Inside { pair, depth, open } => {
                let quote = self.quotes.primary.pair(pair);
                if c == quote.right {
                    if depth == 1 {
                        self.state = QuoteState::Outside;
                        return QuoteAction::Close;
                    }
                    self.state = QuoteState::Inside {
                        pair,
                        depth: depth - 1,
                        open,
                    };
                    QuoteAction::Content
                } else if c == quote.left {
                    // Only reachable for stack pairs: toggle pairs took the
                    // branch above.
                    self.state = QuoteState::Inside {
                        pair,
                        depth: depth + 1,
                        open,
                    };
                    QuoteAction::Content
                } else if self.quotes.secondary.contains(c) {
                    QuoteAction::SecondaryQuote
                } else {
                    QuoteAction::Content
                }
            }
        }
    }

    /// Returns `true` if no primary quote is open.
    #[inline]
    pub fn is_outside(&self) -> bool {
        matches!(self.state, QuoteState::Outside)
    }

    /// Returns `true` if `c` would open a primary quote right now.
    ///
    /// Engines use this to give quotes precedence over delimiters: an
    /// opening quote is never tested as a separator.
    #[inline]
    pub fn would_open(&self, c: char) -> bool {
        self.is_outside() && self.quotes.primary.find_left(c).is_some()
    }

    /// The currently open quote kind, if any.
    pub fn open_pair(&self) -> Option<QuotePair> {
        match self.state {
            QuoteState::Outside => None,
            QuoteState::Inside { pair, .. } => Some(self.quotes.primary.pair(pair)),
        }
    }

    /// Current nesting depth (`0` when outside).
    pub fn depth(&self) -> u32 {
        match self.state {
            QuoteState::Outside => 0,
            QuoteState::Inside { depth, .. } => depth,
        }
    }

    pub fn state(&self) -> QuoteState {
        self.state
    }

    /// Forget any open quote.
    pub fn reset(&mut self) {
        self.state = QuoteState::Outside;
    }

    /// Check the state at the end of the scan scope.
    ///
    /// Call this only at the true end of the requested scope: an open quote
    /// at an intermediate boundary is not an error.
    pub fn finish(&self) -> Result<(), Unclosed> {
        match self.state {
            QuoteState::Outside => Ok(()),
            QuoteState::Inside { pair, depth, open } => Err(Unclosed {
                open,
                pair: self.quotes.primary.pair(pair),
                depth,
            }),
        }
    }
}
