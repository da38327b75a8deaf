//! Quote-tracking primitives shared by the quotescan split and search engines.
//!
//! This crate is standalone (no error or logging stack) so that tools which
//! only need to classify positions as quoted or unquoted can depend on it
//! without pulling in the API layer.
//!
//! # Layers
//!
//! - [`Cursor`]: bounded, bidirectional view over a `&str`.
//! - [`QuotePair`], [`QuotePairTable`], [`QuoteSet`]: which characters open
//!   and close quote regions, in a primary and an optional secondary layer.
//! - [`QuoteTracker`]: the state machine that tracks nesting depth of the
//!   currently open primary quote.
//! - [`QuoteMap`]: quote region boundaries for a whole window, used to answer
//!   backward queries with the same classification as a forward scan.
//! - [`find_any`] / [`rfind_any`]: earliest/latest occurrence of any of
//!   several substrings inside a window.
//!
//! Positions are byte offsets into the scanned text and always fall on
//! `char` boundaries.

mod cursor;
mod find;
mod quote;
mod quote_map;
mod tracker;

pub use cursor::Cursor;
pub use find::{find_any, rfind_any};
pub use quote::{QuotePair, QuotePairTable, QuoteSet};
pub use quote_map::QuoteMap;
pub use tracker::{QuoteAction, QuoteState, QuoteTracker, Unclosed};
