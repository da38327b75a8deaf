//! Scan configuration.
//!
//! One [`ScanOptions`] value replaces the whole family of default-argument
//! overloads: window, quote layers and split policy live here, and every
//! engine takes it by reference.

use bitflags::bitflags;
use quotescan_core::{QuotePair, QuotePairTable, QuoteSet};

use crate::{ScanError, Window};

bitflags! {
    /// Split policy switches.
    ///
    /// The default keeps quote characters and nothing else.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SplitFlags: u8 {
        /// Drop tokens that are empty (after trimming, when `TRIM` is set).
        const REMOVE_EMPTY = 1 << 0;
        /// Trim leading and trailing whitespace from each token.
        const TRIM = 1 << 1;
        /// Append the matched separator to the token it terminates.
        const KEEP_SEPARATOR = 1 << 2;
        /// Keep quote characters in token content. Cleared: strip them.
        const KEEP_QUOTES = 1 << 3;
    }
}

impl Default for SplitFlags {
    fn default() -> Self {
        SplitFlags::KEEP_QUOTES
    }
}

/// Window, quotes and split policy for one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Byte offset where the window starts.
    pub start: usize,
    /// Window length in bytes; `None` scans to the end of the text.
    pub length: Option<usize>,
    pub quotes: QuoteSet,
    pub flags: SplitFlags,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with a single primary quote pair.
    pub fn quoted(left: char, right: char) -> Self {
        Self::new().with_quotes(QuoteSet::pair(left, right))
    }

    #[must_use]
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Use an already validated window.
    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.start = window.start;
        self.length = Some(window.len());
        self
    }

    /// Window of `length` bytes ending (exclusively) at `end`, validated
    /// against `text` now. The usual origin form for backward searches.
    pub fn ending_at(self, text: &str, end: usize, length: usize) -> Result<Self, ScanError> {
        let window = Window::ending_at(end, length, text.len())?;
        window.check_boundaries(text)?;
        Ok(self.with_window(window))
    }

    #[must_use]
    pub fn with_quotes(mut self, quotes: QuoteSet) -> Self {
        self.quotes = quotes;
        self
    }

    /// Primary quotes from parallel left/right arrays.
    pub fn with_quote_arrays(
        mut self,
        lefts: &[char],
        rights: &[char],
    ) -> Result<Self, ScanError> {
        self.quotes.primary = QuotePairTable::from_parallel(lefts, rights).ok_or(
            ScanError::InvalidConfiguration("left and right quote arrays differ in length"),
        )?;
        Ok(self)
    }

    /// Secondary quote layer, active only inside primary quotes.
    #[must_use]
    pub fn with_secondary(mut self, pairs: impl IntoIterator<Item = QuotePair>) -> Self {
        self.quotes.secondary = QuotePairTable::from_pairs(pairs);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: SplitFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn remove_empty(self, on: bool) -> Self {
        self.set(SplitFlags::REMOVE_EMPTY, on)
    }

    #[must_use]
    pub fn trim(self, on: bool) -> Self {
        self.set(SplitFlags::TRIM, on)
    }

    #[must_use]
    pub fn keep_separator(self, on: bool) -> Self {
        self.set(SplitFlags::KEEP_SEPARATOR, on)
    }

    #[must_use]
    pub fn keep_quotes(self, on: bool) -> Self {
        self.set(SplitFlags::KEEP_QUOTES, on)
    }

    fn set(mut self, flag: SplitFlags, on: bool) -> Self {
        self.flags.set(flag, on);
        self
    }

    /// Validate the window against `text`.
    pub fn window(&self, text: &str) -> Result<Window, ScanError> {
        Window::resolve(text, self.start, self.length)
    }
}
