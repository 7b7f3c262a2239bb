//! Prelude module for convenient imports.
//!
//! ```
//! use alculator_feed_rs::prelude::*;
//!
//! let ingested = ingest(serde_json::json!([]), FeedSchema::Nested);
//! assert!(ingested.products.is_empty());
//! ```

// Client types
pub use crate::client::{load_file, FeedClient, FeedClientBuilder, DEFAULT_FEED_URL};

// Error types
pub use crate::error::{Error, FeedError, Result};

// Ingestion
pub use crate::ingest::{ingest, FeedSchema, Ingested};

// Data models
pub use crate::models::{FlatRecord, PackageType, PriceEntry, Pricing, Properties, RawProduct};
