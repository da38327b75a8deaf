//! Quote pair definitions.
//!
//! A [`QuotePairTable`] is an ordered list of `(left, right)` pairs for one
//! quote layer. A [`QuoteSet`] bundles the primary layer (structural: it
//! escapes delimiters) with an optional secondary layer that is only
//! meaningful inside an open primary quote.

use smallvec::SmallVec;

/// One quote kind: the character that opens a region and the one that
/// closes it.
///
/// When `left == right` the pair is a *toggle* pair (`"..."`): the first
/// right quote closes the region and nesting is impossible. Otherwise the
/// pair nests by depth (`{ { } }`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuotePair {
    pub left: char,
    pub right: char,
}

impl QuotePair {
    pub const fn new(left: char, right: char) -> Self {
        QuotePair { left, right }
    }

    /// A toggle pair using the same character on both sides.
    pub const fn same(quote: char) -> Self {
        QuotePair {
            left: quote,
            right: quote,
        }
    }

    /// Returns `true` for toggle pairs (`left == right`).
    #[inline]
    pub const fn is_toggle(self) -> bool {
        self.left == self.right
    }
}

/// Ordered quote pairs for one layer.
///
/// Lookups scan in insertion order, so if a left character is listed twice
/// the first pair wins. Tables are tiny in practice, which is why this is a
/// linear scan over inline storage rather than a map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuotePairTable {
    pairs: SmallVec<[QuotePair; 4]>,
}

impl QuotePairTable {
    /// An empty table (no quotes recognized).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pairs, keeping their order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = QuotePair>) -> Self {
        QuotePairTable {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Build a table from parallel left/right arrays.
    ///
    /// Returns `None` when the arrays differ in length.
    pub fn from_parallel(lefts: &[char], rights: &[char]) -> Option<Self> {
        if lefts.len() != rights.len() {
            return None;
        }
        Some(Self::from_pairs(
            lefts
                .iter()
                .zip(rights)
                .map(|(&left, &right)| QuotePair::new(left, right)),
        ))
    }

    /// Index of the first pair whose left character is `c`.
    #[inline]
    pub fn find_left(&self, c: char) -> Option<usize> {
        self.pairs.iter().position(|p| p.left == c)
    }

    /// Returns `true` if `c` is the left or right character of any pair.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.pairs.iter().any(|p| p.left == c || p.right == c)
    }

    /// The pair at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices come from
    /// [`find_left`](Self::find_left) on the same table.
    #[inline]
    pub fn pair(&self, index: usize) -> QuotePair {
        self.pairs[index]
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = QuotePair> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<QuotePair> for QuotePairTable {
    fn from_iter<I: IntoIterator<Item = QuotePair>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Primary and secondary quote layers.
///
/// Secondary quotes are a scope limit, not a second grammar: they are never
/// nested or tracked on their own, and only matter inside an open primary
/// quote (where they are content that `keep_quotes == false` strips).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteSet {
    pub primary: QuotePairTable,
    pub secondary: QuotePairTable,
}

impl QuoteSet {
    /// No quotes at all: every delimiter is structural.
    pub fn none() -> Self {
        Self::default()
    }

    /// A set with only a primary layer.
    pub fn new(primary: QuotePairTable) -> Self {
        QuoteSet {
            primary,
            secondary: QuotePairTable::new(),
        }
    }

    /// A single primary pair.
    pub fn pair(left: char, right: char) -> Self {
        Self::new(QuotePairTable::from_pairs([QuotePair::new(left, right)]))
    }

    /// Double quotes as a toggle pair.
    pub fn double() -> Self {
        Self::pair('"', '"')
    }

    /// The three bracket kinds `()`, `[]` and `{}` as independent stack pairs.
    pub fn brackets() -> Self {
        Self::new(QuotePairTable::from_pairs([
            QuotePair::new('(', ')'),
            QuotePair::new('[', ']'),
            QuotePair::new('{', '}'),
        ]))
    }

    /// Replace the secondary layer.
    #[must_use]
    pub fn with_secondary(mut self, secondary: QuotePairTable) -> Self {
        self.secondary = secondary;
        self
    }

    /// Returns `true` when no primary quotes are defined.
    ///
    /// A secondary layer without a primary one can never activate.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}
