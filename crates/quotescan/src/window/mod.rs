//! Scan window validation.
//!
//! Every operation scans a sub-range `start..end` of its input. The window is
//! validated before any scanning begins, so an out-of-range request fails
//! fast with no partial state. The window end is also the scope end for
//! quote-mismatch detection.

use quotescan_core::Cursor;

use crate::ScanError;

/// A validated byte range of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Forward form: `length` bytes starting at `start`.
    pub fn new(start: usize, length: usize, total: usize) -> Result<Self, ScanError> {
        match start.checked_add(length) {
            Some(end) if end <= total => Ok(Window { start, end }),
            _ => Err(ScanError::ArgumentRange {
                start,
                length,
                total,
            }),
        }
    }

    /// Backward form: `length` bytes ending (exclusively) at `end`.
    pub fn ending_at(end: usize, length: usize, total: usize) -> Result<Self, ScanError> {
        match end.checked_sub(length) {
            Some(start) if end <= total => Ok(Window { start, end }),
            _ => Err(ScanError::ArgumentRange {
                start: end.saturating_sub(length),
                length,
                total,
            }),
        }
    }

    /// Validate a window against `text`: in range and on `char` boundaries.
    ///
    /// `length == None` means "to the end of the text".
    pub fn resolve(text: &str, start: usize, length: Option<usize>) -> Result<Self, ScanError> {
        let window = match length {
            Some(length) => Window::new(start, length, text.len())?,
            None => Window::new(start, text.len().saturating_sub(start), text.len())?,
        };
        window.check_boundaries(text)?;
        Ok(window)
    }

    /// Fail if either bound splits a multi-byte character of `text`.
    pub fn check_boundaries(self, text: &str) -> Result<(), ScanError> {
        for index in [self.start, self.end] {
            if !text.is_char_boundary(index) {
                return Err(ScanError::NotCharBoundary { index });
            }
        }
        Ok(())
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// A cursor over this window of `text`.
    ///
    /// # Contract
    ///
    /// The window was validated against `text`.
    pub fn cursor(self, text: &str) -> Cursor<'_> {
        Cursor::new(text, self.start, self.end)
    }
}
