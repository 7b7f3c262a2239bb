//! Beer pricing feed client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use alculator_feed_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`FeedClient`],
//! error types, the schema adapter, and the product models.
//!
//! [`FeedClient`]: client::FeedClient

pub mod client;
pub mod error;
pub mod ingest;
pub mod models;
pub mod prelude;
