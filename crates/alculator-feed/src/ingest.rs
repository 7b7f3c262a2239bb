//! Feed ingestion: schema resolution and record dropping.
//!
//! [`ingest`] is the only place that knows about the two schema generations.
//! It decodes each array element on its own, drops anything that cannot be
//! flattened, and hands back nested [`RawProduct`]s.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FlatRecord, RawProduct};

/// Which feed schema generation a document uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSchema {
    /// One scalar-priced record per purchasable unit.
    Flat,
    /// `{stockcode, properties, pricing}` records.
    #[default]
    Nested,
}

impl fmt::Display for FeedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSchema::Flat => write!(f, "flat"),
            FeedSchema::Nested => write!(f, "nested"),
        }
    }
}

impl FromStr for FeedSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(FeedSchema::Flat),
            "nested" => Ok(FeedSchema::Nested),
            other => Err(format!("unknown feed schema '{other}' (expected flat or nested)")),
        }
    }
}

/// Result of ingesting a feed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested {
    /// Products that can be flattened, in feed order.
    pub products: Vec<RawProduct>,
    /// Number of records dropped as malformed or unavailable.
    pub dropped: usize,
}

/// Ingests a decoded feed document using the given schema.
///
/// A document that is not a JSON array yields an empty collection.
pub fn ingest(document: Value, schema: FeedSchema) -> Ingested {
    let Value::Array(records) = document else {
        tracing::warn!(%schema, "feed document is not an array, ignoring it");
        return Ingested::default();
    };

    let total = records.len();
    let products: Vec<RawProduct> = records
        .into_iter()
        .filter_map(|record| match schema {
            FeedSchema::Flat => adapt_flat(record),
            FeedSchema::Nested => adapt_nested(record),
        })
        .collect();

    let dropped = total - products.len();
    if dropped > 0 {
        tracing::debug!(%schema, dropped, kept = products.len(), "dropped malformed records");
    }

    Ingested { products, dropped }
}

fn adapt_flat(record: Value) -> Option<RawProduct> {
    let record: FlatRecord = serde_json::from_value(record).ok()?;
    if record.name.is_empty() || record.is_online_only() {
        return None;
    }
    Some(record.into_product())
}

fn adapt_nested(record: Value) -> Option<RawProduct> {
    let product: RawProduct = serde_json::from_value(record).ok()?;
    if product.properties.name.is_empty() {
        return None;
    }
    Some(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PackageType;
    use serde_json::json;

    #[test]
    fn test_feed_schema_from_str() {
        assert_eq!("flat".parse::<FeedSchema>().unwrap(), FeedSchema::Flat);
        assert_eq!("Nested".parse::<FeedSchema>().unwrap(), FeedSchema::Nested);
        assert!("xml".parse::<FeedSchema>().is_err());
    }

    #[test]
    fn test_feed_schema_default_is_nested() {
        assert_eq!(FeedSchema::default(), FeedSchema::Nested);
    }

    #[test]
    fn test_ingest_nested_drops_malformed() {
        let document = json!([
            {"stockcode": "1", "properties": {"name": "Lager A"}, "pricing": {"single": {"cost_per_standard": 2.1}}},
            {"stockcode": "2", "properties": {"name": ""}, "pricing": {}},
            {"stockcode": "3", "properties": {"brand": "No Name"}, "pricing": {}},
            {"stockcode": "4", "properties": {"name": "No Pricing"}},
            {"stockcode": "5", "pricing": {"single": {}}},
            "not a record",
            null
        ]);

        let ingested = ingest(document, FeedSchema::Nested);
        assert_eq!(ingested.products.len(), 1);
        assert_eq!(ingested.products[0].properties.name, "Lager A");
        assert_eq!(ingested.dropped, 6);
    }

    #[test]
    fn test_ingest_flat_adapts_and_drops_online_only() {
        let document = json!([
            {"stockcode": "10", "name": "Pale Ale", "cost_per_standard": 2.0},
            {"stockcode": "11", "name": "Online Stout", "online_only": true},
            {"stockcode": "12", "cost_per_standard": 1.0},
            {"stockcode": "13", "name": "Six Pack", "package": "pack", "cost_per_standard": "1.7"}
        ]);

        let ingested = ingest(document, FeedSchema::Flat);
        assert_eq!(ingested.dropped, 2);
        let names: Vec<&str> = ingested
            .products
            .iter()
            .map(|p| p.properties.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pale Ale", "Six Pack"]);
        assert!(ingested.products[1].pricing.has(PackageType::Pack));
    }

    #[test]
    fn test_ingest_nested_schema_rejects_flat_records() {
        let document = json!([{"stockcode": "10", "name": "Pale Ale", "cost_per_standard": 2.0}]);
        let ingested = ingest(document, FeedSchema::Nested);
        assert!(ingested.products.is_empty());
        assert_eq!(ingested.dropped, 1);
    }

    #[test]
    fn test_ingest_non_array_is_empty() {
        let ingested = ingest(json!({"products": []}), FeedSchema::Nested);
        assert!(ingested.products.is_empty());
        assert_eq!(ingested.dropped, 0);
    }
}
