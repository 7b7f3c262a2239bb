//! The catalog: raw products plus filter state, recomputed on demand.

use std::fmt::Display;

use alculator_feed_rs::models::RawProduct;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::card::Card;
use crate::filter::CardFilter;
use crate::flatten::flatten;
use crate::paginate::paginate;
use crate::rank::rank;
use crate::state::{Action, FilterState};

/// Runs flatten, filter and rank over the whole collection.
///
/// The result depends only on the products and the state, not on any
/// earlier result.
pub fn recompute(products: &[RawProduct], state: &FilterState) -> Vec<Card> {
    let cards = flatten(products, state.include_specials, &state.packages);
    let cards = CardFilter::new(state).apply(cards);
    rank(cards)
}

/// The visible page of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    /// Cards on the page, cheapest per standard drink first.
    pub cards: Vec<Card>,
    /// Number of cards that passed every filter.
    pub total: usize,
    pub limit: usize,
    pub has_more: bool,
    pub state: FilterState,
}

/// Identifies one feed load. Only the most recent ticket can apply results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The products replaced the collection.
    Applied { count: usize },
    /// The load failed and the previous collection was kept.
    Failed,
    /// A newer load was started, so the result was discarded.
    Stale,
}

/// Raw products and the current filter state.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<RawProduct>,
    state: FilterState,
    generation: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// Creates an empty catalog with the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with products already loaded.
    pub fn with_products(products: Vec<RawProduct>, state: FilterState) -> Self {
        Self {
            products,
            state,
            generation: 0,
            loaded_at: Some(Utc::now()),
        }
    }

    pub fn products(&self) -> &[RawProduct] {
        &self.products
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replaces the filter state, e.g. after decoding a share link.
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
    }

    /// When the current products were loaded, if ever.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Recomputes the visible page.
    pub fn view(&self) -> CatalogView {
        let ranked = recompute(&self.products, &self.state);
        let page = paginate(&ranked, self.state.display_limit);

        CatalogView {
            cards: page.cards.to_vec(),
            total: page.total,
            limit: self.state.display_limit,
            has_more: page.has_more(),
            state: self.state.clone(),
        }
    }

    /// Applies an action and returns the new view.
    pub fn dispatch(&mut self, action: Action) -> CatalogView {
        tracing::debug!(?action, "dispatching");
        self.state = std::mem::take(&mut self.state).reduce(action);
        self.view()
    }

    /// Shows one more page, unless everything is already shown.
    pub fn load_more(&mut self) -> CatalogView {
        let view = self.view();
        if !view.has_more {
            return view;
        }
        self.dispatch(Action::LoadMore)
    }

    /// Starts a load. Any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Finishes a load started with [`Catalog::begin_load`].
    pub fn finish_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RawProduct>, E>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale load"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.loaded_at = Some(Utc::now());
                tracing::info!(count, "loaded products");
                LoadOutcome::Applied { count }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load products");
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Dimension;
    use alculator_feed_rs::models::{PackageType, PriceEntry, Pricing, Properties};

    fn entry(cost: f64) -> PriceEntry {
        PriceEntry {
            units: Some(1.0),
            total_price: Some(cost * 2.0),
            unit_price: Some(cost * 2.0),
            cost_per_standard: Some(cost),
            tax_cost: None,
            tax_percent: None,
        }
    }

    fn product(code: &str, prices: &[(PackageType, f64)]) -> RawProduct {
        let mut pricing = Pricing::default();
        for (package, cost) in prices {
            pricing.insert(*package, false, entry(*cost));
        }
        RawProduct {
            stockcode: code.to_string(),
            properties: Properties {
                name: format!("Beer {code}"),
                percentage: Some(4.6),
                ..Default::default()
            },
            pricing,
        }
    }

    fn sample() -> Vec<RawProduct> {
        vec![
            product("P1", &[(PackageType::Single, 2.10), (PackageType::Pack, 1.80)]),
            product("P2", &[(PackageType::Single, 3.00)]),
        ]
    }

    fn keys(view: &CatalogView) -> Vec<(String, PackageType)> {
        view.cards
            .iter()
            .map(|c| (c.stockcode.clone(), c.package))
            .collect()
    }

    #[test]
    fn test_view_ranks_flattened_cards() {
        let catalog = Catalog::with_products(sample(), FilterState::default());
        let view = catalog.view();

        assert_eq!(
            keys(&view),
            vec![
                ("P1".to_string(), PackageType::Pack),
                ("P1".to_string(), PackageType::Single),
                ("P2".to_string(), PackageType::Single),
            ]
        );
        assert_eq!(view.total, 3);
        assert!(!view.has_more);
    }

    #[test]
    fn test_view_is_idempotent() {
        let catalog = Catalog::with_products(sample(), FilterState::default());
        assert_eq!(catalog.view(), catalog.view());
    }

    #[test]
    fn test_load_more_extends_page() {
        let state = FilterState {
            display_limit: 1,
            ..Default::default()
        };
        let mut catalog = Catalog::with_products(sample(), state);

        let view = catalog.view();
        assert_eq!(view.cards.len(), 1);
        assert!(view.has_more);

        let view = catalog.load_more();
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.limit, 49);
        assert!(!view.has_more);

        // Nothing left to show.
        let view = catalog.load_more();
        assert_eq!(view.limit, 49);
    }

    #[test]
    fn test_dispatch_recomputes_from_scratch() {
        let mut catalog = Catalog::with_products(sample(), FilterState::default());

        let view = catalog.dispatch(Action::Toggle(Dimension::Package, "pack".into()));
        assert_eq!(keys(&view), vec![("P1".to_string(), PackageType::Pack)]);

        let view = catalog.dispatch(Action::Toggle(Dimension::Package, "pack".into()));
        assert_eq!(view.total, 3);
    }

    #[test]
    fn test_finish_load_applies_current_ticket() {
        let mut catalog = Catalog::new();
        assert!(catalog.loaded_at().is_none());

        let ticket = catalog.begin_load();
        let outcome = catalog.finish_load(ticket, Ok::<_, String>(sample()));

        assert_eq!(outcome, LoadOutcome::Applied { count: 2 });
        assert_eq!(catalog.products().len(), 2);
        assert!(catalog.loaded_at().is_some());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut catalog = Catalog::new();
        let first = catalog.begin_load();
        let second = catalog.begin_load();

        let outcome = catalog.finish_load(second, Ok::<_, String>(sample()));
        assert_eq!(outcome, LoadOutcome::Applied { count: 2 });

        let outcome = catalog.finish_load(first, Ok::<_, String>(Vec::new()));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(catalog.products().len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_products() {
        let mut catalog = Catalog::with_products(sample(), FilterState::default());
        let ticket = catalog.begin_load();

        let outcome = catalog.finish_load(ticket, Err("connection reset"));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(catalog.view().total, 3);
    }

    #[test]
    fn test_empty_catalog_view() {
        let view = Catalog::new().view();
        assert!(view.cards.is_empty());
        assert_eq!(view.total, 0);
        assert!(!view.has_more);
    }
}
