//! Delimiter matching.
//!
//! A [`Delimiter`] says *what* separates tokens; a [`DelimiterMatcher`] is
//! the validated form the engines drive. The matcher is only consulted while
//! the quote tracker is outside every quote, so it never needs to know about
//! quotes itself.

use std::fmt;

use quotescan_core::Cursor;
use smallvec::SmallVec;

use crate::ScanError;

/// What separates tokens.
///
/// Sets report *which* element matched as the separator index: the slot in
/// the array, not the order in which matches were found. If an array lists
/// the same element twice, the first slot wins.
#[derive(Clone, Copy)]
pub enum Delimiter<'d> {
    /// Exactly one character. Index `0`.
    Char(char),
    /// Any character of the set. Index is the array slot.
    Chars(&'d [char]),
    /// One substring. Index `0`.
    Str(&'d str),
    /// Any substring of the set; at one position the first listed match
    /// wins. Index is the array slot.
    Strs(&'d [&'d str]),
    /// Any character the predicate accepts. No index.
    Predicate(&'d dyn Fn(char) -> bool),
    /// Any character the function maps to `Some(index)`; the index is
    /// surfaced as the separator index.
    Indexed(&'d dyn Fn(char) -> Option<usize>),
}

impl fmt::Debug for Delimiter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Delimiter::Chars(set) => f.debug_tuple("Chars").field(set).finish(),
            Delimiter::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Delimiter::Strs(set) => f.debug_tuple("Strs").field(set).finish(),
            Delimiter::Predicate(_) => f.write_str("Predicate(..)"),
            Delimiter::Indexed(_) => f.write_str("Indexed(..)"),
        }
    }
}

impl From<char> for Delimiter<'_> {
    fn from(c: char) -> Self {
        Delimiter::Char(c)
    }
}

impl<'d> From<&'d [char]> for Delimiter<'d> {
    fn from(set: &'d [char]) -> Self {
        Delimiter::Chars(set)
    }
}

impl<'d> From<&'d str> for Delimiter<'d> {
    fn from(s: &'d str) -> Self {
        Delimiter::Str(s)
    }
}

impl<'d> From<&'d [&'d str]> for Delimiter<'d> {
    fn from(set: &'d [&'d str]) -> Self {
        Delimiter::Strs(set)
    }
}

/// A delimiter hit at the cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelimiterMatch {
    /// Byte length of the matched separator.
    pub len: usize,
    /// Which element of the delimiter set matched, if the delimiter kind
    /// has identities.
    pub index: Option<usize>,
}

/// Validated delimiter, immutable for the duration of a scan.
#[derive(Clone, Copy, Debug)]
pub struct DelimiterMatcher<'d> {
    delimiter: Delimiter<'d>,
}

impl<'d> DelimiterMatcher<'d> {
    /// Validate a delimiter.
    ///
    /// Empty sets and empty substrings are rejected: an empty substring
    /// would match everywhere without advancing.
    pub fn new(delimiter: Delimiter<'d>) -> Result<Self, ScanError> {
        match delimiter {
            Delimiter::Chars([]) | Delimiter::Strs([]) => {
                return Err(ScanError::InvalidConfiguration("empty delimiter set"));
            }
            Delimiter::Str("") => {
                return Err(ScanError::InvalidConfiguration("empty delimiter string"));
            }
            Delimiter::Strs(set) if set.iter().any(|s| s.is_empty()) => {
                return Err(ScanError::InvalidConfiguration("empty delimiter string"));
            }
            _ => {}
        }
        Ok(DelimiterMatcher { delimiter })
    }

    pub fn delimiter(&self) -> Delimiter<'d> {
        self.delimiter
    }

    /// Try to match at the cursor position.
    ///
    /// Only call this while the quote tracker is outside every quote.
    pub fn try_match(&self, cursor: &Cursor<'_>) -> Option<DelimiterMatch> {
        match self.delimiter {
            Delimiter::Str(s) => cursor.starts_with(s).then_some(DelimiterMatch {
                len: s.len(),
                index: Some(0),
            }),
            Delimiter::Strs(set) => set
                .iter()
                .position(|s| cursor.starts_with(s))
                .map(|i| DelimiterMatch {
                    len: set[i].len(),
                    index: Some(i),
                }),
            _ => {
                let c = cursor.current()?;
                let index = self.match_char(c)?;
                Some(DelimiterMatch {
                    len: c.len_utf8(),
                    index,
                })
            }
        }
    }

    /// Match a single character against a character-based delimiter.
    ///
    /// Returns `Some(index)` on a hit (where `index` may itself be `None`
    /// for predicates). Substring delimiters never match here.
    fn match_char(&self, c: char) -> Option<Option<usize>> {
        match self.delimiter {
            Delimiter::Char(d) => (c == d).then_some(Some(0)),
            Delimiter::Chars(set) => set.iter().position(|&d| d == c).map(Some),
            Delimiter::Predicate(f) => f(c).then_some(None),
            Delimiter::Indexed(f) => f(c).map(Some),
            Delimiter::Str(_) | Delimiter::Strs(_) => None,
        }
    }

    /// Substring needles for the accelerated search path, if the delimiter
    /// is substring-based.
    pub fn needles(&self) -> Option<SmallVec<[&'d str; 4]>> {
        match self.delimiter {
            Delimiter::Str(s) => Some(SmallVec::from_slice(&[s])),
            Delimiter::Strs(set) => Some(SmallVec::from_slice(set)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
