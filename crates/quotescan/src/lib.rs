//! Quote-aware splitting and searching over strings.
//!
//! Delimiters inside quoted regions are content, not structure. Quote kinds
//! are configurable pairs: a toggle pair (`"` / `"`) alternates in and out,
//! a stack pair (`{` / `}`) nests and only closes when its depth returns to
//! zero. A secondary layer of quotes is recognized inside primary quotes so
//! that it can be stripped along with them.
//!
//! ```text
//! split_with_quotes("a,{b,c},d", ',', quotes {})  ->  ["a", "{b,c}", "d"]
//! index_of_with_quotes("a{b,c},d", ',', quotes {}) ->  Some(6)
//! ```
//!
//! # Layers
//!
//! - [`quotescan_core`]: cursor, quote tables, the quote tracker and the
//!   quote map. No error or logging stack.
//! - This crate: [`ScanOptions`] and [`Window`] validation, [`Delimiter`]
//!   matching, the split engine ([`Splitter`]) and the search functions,
//!   all reporting [`ScanError`].
//!
//! # Tracing
//!
//! Engines emit `tracing` events: `trace` for quote transitions and
//! delimiter hits, `debug` when a scan ends inside a quote. Call
//! [`init_tracing`] and set `RUST_LOG=quotescan=trace` to see them.

mod delimiter;
mod error;
mod key_value;
mod options;
mod search;
mod split;
mod window;

use std::sync::Once;

pub use delimiter::{Delimiter, DelimiterMatch, DelimiterMatcher};
pub use error::ScanError;
pub use key_value::split_key_value;
pub use options::{ScanOptions, SplitFlags};
pub use quotescan_core::{QuotePair, QuotePairTable, QuoteSet};
pub use search::{
    contains_with_quotes, index_of_any_with_quotes, index_of_with_quotes,
    last_index_of_any_with_quotes, last_index_of_with_quotes, SearchResult,
};
pub use split::{split_with_quotes, split_with_separators, SplitIter, Splitter, Token, Tokens};
pub use window::Window;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once, and
/// leaves an already installed global subscriber alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            if let Err(err) = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
            {
                tracing::debug!(%err, "keeping the existing global subscriber");
            }
        }
    });
}
