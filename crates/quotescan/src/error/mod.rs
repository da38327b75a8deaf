//! Scan errors.
//!
//! Every error is a programmer or input error surfaced synchronously to the
//! immediate caller. There is no retry and no partial-result recovery: a
//! scan that fails returns only the error.

use quotescan_core::Unclosed;
use thiserror::Error;

/// Error raised by a split or search.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A quote opened at `open` never closed before the end of the scan
    /// scope. The scope is the requested window, not the whole text.
    #[error("unterminated quote: `{left}` at byte {open} has no matching `{right}`")]
    QuoteMismatch { open: usize, left: char, right: char },

    /// The requested window does not fit inside the text.
    #[error("window {start}+{length} is out of range for text of length {total}")]
    ArgumentRange {
        start: usize,
        length: usize,
        total: usize,
    },

    /// A window bound splits a multi-byte character.
    #[error("byte {index} is not on a char boundary")]
    NotCharBoundary { index: usize },

    /// The delimiter or quote configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl From<Unclosed> for ScanError {
    fn from(unclosed: Unclosed) -> Self {
        ScanError::QuoteMismatch {
            open: unclosed.open,
            left: unclosed.pair.left,
            right: unclosed.pair.right,
        }
    }
}
