//! Prefix pagination over the ranked cards.

use crate::card::Card;

/// Cards shown per page, and the step `LoadMore` adds.
pub const PAGE_SIZE: usize = 48;

/// The visible prefix of a ranked collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub cards: &'a [Card],
    /// Size of the whole ranked collection.
    pub total: usize,
}

impl Page<'_> {
    /// Number of cards on the page.
    pub fn shown(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if loading more would show more cards.
    pub fn has_more(&self) -> bool {
        self.shown() < self.total
    }
}

/// Takes the first `limit` cards. A limit past the end shows everything.
pub fn paginate(cards: &[Card], limit: usize) -> Page<'_> {
    Page {
        cards: &cards[..limit.min(cards.len())],
        total: cards.len(),
    }
}
