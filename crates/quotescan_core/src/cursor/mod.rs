//! Bounded cursor over a `&str` window.
//!
//! The cursor walks `char` by `char` between an inclusive start bound and an
//! exclusive end bound. Both directions are supported: [`Cursor::advance`]
//! steps over the character at the current position, [`Cursor::retreat`]
//! steps back over the character that ends at the current position.
//!
//! # Bounds
//!
//! All positions are byte offsets into the full text. The window bounds are
//! validated by the caller (the API crate's `Window`); here they are only
//! checked with `debug_assert!`. Reads never look outside the window, so a
//! substring delimiter that would straddle the end bound does not match.

/// Bounded, bidirectional cursor over a `&str`.
///
/// The cursor is [`Copy`], enabling cheap snapshots when a scan needs to
/// look ahead and come back.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Full text. Positions index into this, not into the window.
    text: &'a str,
    /// Inclusive start of the window.
    start: usize,
    /// Exclusive end of the window.
    end: usize,
    /// Current byte position, `start <= pos <= end`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `text[start..end]`, positioned at `start`.
    ///
    /// # Contract
    ///
    /// `start <= end <= text.len()` and both bounds fall on `char`
    /// boundaries.
    pub fn new(text: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "window start {start} exceeds end {end}");
        debug_assert!(
            end <= text.len(),
            "window end {end} exceeds text length {}",
            text.len()
        );
        debug_assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
        Self {
            text,
            start,
            end,
            pos: start,
        }
    }

    /// Create a cursor over the same window, positioned at the end bound.
    ///
    /// Used as the origin of backward scans.
    #[must_use]
    pub fn at_end(mut self) -> Self {
        self.pos = self.end;
        self
    }

    /// Returns the character at the current position, or `None` at the end
    /// bound.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.text[self.pos..self.end].chars().next()
    }

    /// Returns the character immediately before the current position, or
    /// `None` at the start bound.
    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.text[self.start..self.pos].chars().next_back()
    }

    /// Advance past the current character. No-op at the end bound.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance by `n` bytes.
    ///
    /// # Contract
    ///
    /// `pos + n` stays within the window and lands on a `char` boundary.
    /// Callers pass lengths of matches found in [`rest`](Self::rest).
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.end, "advance_n past end bound");
        self.pos += n;
    }

    /// Step back over the previous character. No-op at the start bound.
    #[inline]
    pub fn retreat(&mut self) {
        if let Some(c) = self.previous() {
            self.pos -= c.len_utf8();
        }
    }

    /// Move to an absolute position inside the window.
    ///
    /// # Contract
    ///
    /// `start <= pos <= end` and `pos` is a `char` boundary.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(
            self.start <= pos && pos <= self.end,
            "seek to {pos} outside window {}..{}",
            self.start,
            self.end
        );
        debug_assert!(self.text.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Move back to the start bound.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = self.start;
    }

    /// Returns `true` when the cursor sits on the end bound.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Returns `true` when the cursor sits on the start bound.
    #[inline]
    pub fn is_bof(&self) -> bool {
        self.pos <= self.start
    }

    /// Current byte position in the full text.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Inclusive start bound.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end bound.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The full text the cursor was created over.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Remaining window content, from the current position to the end bound.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..self.end]
    }

    /// Returns `true` if the remaining window content starts with `needle`.
    ///
    /// A needle that would extend past the end bound never matches.
    #[inline]
    pub fn starts_with(&self, needle: &str) -> bool {
        self.rest().starts_with(needle)
    }

    /// Extract `text[start..end]`.
    ///
    /// # Contract
    ///
    /// Both offsets fall on `char` boundaries inside the window.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            self.start <= start && end <= self.end,
            "slice {start}..{end} outside window {}..{}",
            self.start,
            self.end
        );
        &self.text[start..end]
    }

    /// Extract from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
