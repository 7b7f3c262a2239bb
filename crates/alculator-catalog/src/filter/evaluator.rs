//! Filter evaluation against price cards.
//!
//! This module provides the [`CardFilter`] for applying the current
//! [`FilterState`] to flattened cards.
//!
//! # Example
//!
//! ```
//! use alculator_catalog_rs::filter::CardFilter;
//! use alculator_catalog_rs::FilterState;
//!
//! let state = FilterState::default();
//! let filter = CardFilter::new(&state);
//! assert!(filter.apply(Vec::new()).is_empty());
//! ```

use crate::card::Card;
use crate::state::FilterState;

use super::ast::SearchQuery;
use super::parser::SearchParser;

/// Applies the fixed predicate chain of a [`FilterState`] to cards.
///
/// Predicates run in this order, each on the survivors of the previous:
///
/// 1. vessel is selected
/// 2. strength category is selected
/// 3. rating category is selected
/// 4. search query matches
/// 5. cost per standard drink is positive
///
/// Package selection and special pricing are handled earlier, by the
/// flattener.
#[derive(Debug)]
pub struct CardFilter<'a> {
    state: &'a FilterState,
    search: SearchQuery,
}

impl<'a> CardFilter<'a> {
    /// Creates a filter, parsing the state's search query once.
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            state,
            search: SearchParser::parse(&state.query),
        }
    }

    /// Returns the parsed search query.
    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    /// Returns true if the card passes every predicate.
    pub fn matches(&self, card: &Card) -> bool {
        self.vessel_selected(card)
            && self.strength_selected(card)
            && self.rating_selected(card)
            && self.search_matches(card)
            && card.has_valid_cost()
    }

    /// Keeps only the cards that pass every predicate, in their original order.
    pub fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.retain(|c| self.vessel_selected(c));
        cards.retain(|c| self.strength_selected(c));
        cards.retain(|c| self.rating_selected(c));
        if !self.search.is_empty() {
            cards.retain(|c| self.search_matches(c));
        }
        cards.retain(Card::has_valid_cost);
        cards
    }

    fn vessel_selected(&self, card: &Card) -> bool {
        self.state.vessels.contains(&card.vessel_key())
    }

    fn strength_selected(&self, card: &Card) -> bool {
        self.state.allows_strength(card.strength)
    }

    fn rating_selected(&self, card: &Card) -> bool {
        self.state.allows_rating(card.rating_category)
    }

    fn search_matches(&self, card: &Card) -> bool {
        self.search.is_empty() || self.search.matches(&card.search_text())
    }
}
