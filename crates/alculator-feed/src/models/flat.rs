//! Flat product records (the first feed schema generation).
//!
//! Each element of the older feed describes one purchasable unit, with its
//! price fields inline next to the product attributes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{lenient_flag, lenient_number, lenient_string, PackageType};
use super::product::{PriceEntry, Pricing, Properties, RawProduct};

/// A scalar-priced record from the flat feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub stockcode: Option<String>,

    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub clean_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vessel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub standard_drinks: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bitterness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,

    /// Package type token; records without one are treated as singles.
    #[serde(default, deserialize_with = "lenient_string")]
    pub package: Option<String>,

    /// Whether the price is a promotional one.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub special: bool,

    #[serde(default, deserialize_with = "lenient_number")]
    pub units: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cost_per_standard: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub tax_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub tax_percent: Option<f64>,

    /// Products that cannot be bought in store.
    #[serde(default)]
    pub online_only: Option<Value>,
}

impl FlatRecord {
    /// Returns true for records only sold online.
    pub fn is_online_only(&self) -> bool {
        self.online_only == Some(Value::Bool(true))
    }

    /// Converts the record into the nested shape with a single pricing entry.
    pub fn into_product(self) -> RawProduct {
        let package = self
            .package
            .as_deref()
            .and_then(PackageType::from_token)
            .unwrap_or(PackageType::Single);

        let mut pricing = Pricing::default();
        pricing.insert(
            package,
            self.special,
            PriceEntry {
                units: self.units,
                total_price: self.total_price,
                unit_price: self.unit_price,
                cost_per_standard: self.cost_per_standard,
                tax_cost: self.tax_cost,
                tax_percent: self.tax_percent,
            },
        );

        RawProduct {
            stockcode: self.stockcode.unwrap_or_default(),
            properties: Properties {
                name: self.name,
                clean_name: self.clean_name,
                brand: self.brand,
                vessel: self.vessel,
                size: self.size,
                percentage: self.percentage,
                standard_drinks: self.standard_drinks,
                rating: self.rating,
                style: self.style,
                bitterness: self.bitterness,
                image: self.image,
            },
            pricing,
        }
    }
}
