//! Price cards and filtering for the beer feed.
//!
//! This crate turns [`RawProduct`](alculator_feed_rs::models::RawProduct)s into
//! ranked, paginated [`Card`]s:
//!
//! 1. [`flatten`] expands each product into one card per priced package type
//! 2. [`filter::CardFilter`] applies the vessel, strength, rating, search and
//!    validity predicates
//! 3. [`rank`] sorts by cost per standard drink, cheapest first
//! 4. [`paginate`] takes the visible prefix
//!
//! [`Catalog`] ties these together with a [`FilterState`] that changes only
//! through [`Action`]s, and [`share`] encodes that state as URL parameters.
//!
//! # Example
//!
//! ```
//! use alculator_catalog_rs::{Action, Catalog};
//!
//! let mut catalog = Catalog::new();
//! let view = catalog.dispatch(Action::SetQuery("hazy".into()));
//! assert_eq!(view.state.query, "hazy");
//! assert!(view.cards.is_empty());
//! ```

pub mod card;
pub mod catalog;
pub mod classify;
pub mod filter;
pub mod flatten;
pub mod image;
pub mod paginate;
pub mod rank;
pub mod share;
pub mod state;

pub use card::{Card, DEFAULT_VESSEL};
pub use catalog::{recompute, Catalog, CatalogView, LoadOutcome, LoadTicket};
pub use classify::{rating_category, strength_category, Rating, Strength};
pub use flatten::flatten;
pub use image::{ImageSource, PLACEHOLDER_IMAGE};
pub use paginate::{paginate, Page, PAGE_SIZE};
pub use rank::rank;
pub use share::ShareError;
pub use state::{Action, Dimension, FilterState, Selection};
