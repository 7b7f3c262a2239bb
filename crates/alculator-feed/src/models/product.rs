//! Nested product records (the current feed schema).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::{lenient_number, lenient_string, PackageType};

/// One product from the feed, with pricing nested per package type.
///
/// A `RawProduct` always carries a name and a pricing map; records missing
/// either are dropped during ingestion and never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    /// Vendor stock code, e.g. `"ER_1000009_CASE"` or `"123456"`.
    #[serde(default, deserialize_with = "stockcode")]
    pub stockcode: String,

    /// Product-level attributes.
    pub properties: Properties,

    /// Prices keyed by package type.
    pub pricing: Pricing,
}

fn stockcode<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Product-level attributes, shared by every package type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Full display name.
    pub name: String,

    /// Name with size and packaging noise removed, when the feed provides one.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub clean_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Vessel type (`"Bottle"`, `"Can"`, ...). Compared lower-cased.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub vessel: Option<String>,

    /// Container size as printed, e.g. `"375mL"`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Alcohol by volume, in percent.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,

    /// Standard drinks per unit.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub standard_drinks: Option<f64>,

    /// Review score on a 0-5 scale.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Bitterness in IBU.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<f64>,

    /// Image reference supplied by the feed, used in preference to the
    /// URL derived from the stock code.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Price for one package type.
///
/// Every field is optional in the feed; consumers decide the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Units in the package (1 for a single, 6 for a six pack...).
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Price divided by standard drinks in the package.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cost_per_standard: Option<f64>,

    /// Excise component of the total price.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub tax_cost: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<f64>,
}

/// Pricing map with base and special entries for each package type.
///
/// Entries that are not JSON objects (`null`, `false`, `""`) are treated as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default, deserialize_with = "entry", skip_serializing_if = "Option::is_none")]
    pub single: Option<PriceEntry>,
    #[serde(default, deserialize_with = "entry", skip_serializing_if = "Option::is_none")]
    pub single_special: Option<PriceEntry>,
    #[serde(default, deserialize_with = "entry", skip_serializing_if = "Option::is_none")]
    pub pack: Option<PriceEntry>,
    #[serde(default, deserialize_with = "entry", skip_serializing_if = "Option::is_none")]
    pub pack_special: Option<PriceEntry>,
    #[serde(default, deserialize_with = "entry", skip_serializing_if = "Option::is_none")]
    pub case: Option<PriceEntry>,
    #[serde(default, deserialize_with = "entry", skip_serializing_if = "Option::is_none")]
    pub case_special: Option<PriceEntry>,
}

fn entry<'de, D>(deserializer: D) -> Result<Option<PriceEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

impl Pricing {
    /// Returns the regular price entry for a package type.
    pub fn base(&self, package: PackageType) -> Option<&PriceEntry> {
        match package {
            PackageType::Single => self.single.as_ref(),
            PackageType::Pack => self.pack.as_ref(),
            PackageType::Case => self.case.as_ref(),
        }
    }

    /// Returns the special (promotional) price entry for a package type.
    pub fn special(&self, package: PackageType) -> Option<&PriceEntry> {
        match package {
            PackageType::Single => self.single_special.as_ref(),
            PackageType::Pack => self.pack_special.as_ref(),
            PackageType::Case => self.case_special.as_ref(),
        }
    }

    /// Returns true if either a base or a special entry exists.
    pub fn has(&self, package: PackageType) -> bool {
        self.base(package).is_some() || self.special(package).is_some()
    }

    /// Stores an entry, replacing any existing one in the same slot.
    pub fn insert(&mut self, package: PackageType, special: bool, entry: PriceEntry) {
        let slot = match (package, special) {
            (PackageType::Single, false) => &mut self.single,
            (PackageType::Single, true) => &mut self.single_special,
            (PackageType::Pack, false) => &mut self.pack,
            (PackageType::Pack, true) => &mut self.pack_special,
            (PackageType::Case, false) => &mut self.case,
            (PackageType::Case, true) => &mut self.case_special,
        };
        *slot = Some(entry);
    }

    /// Returns true if no package type has any price.
    pub fn is_empty(&self) -> bool {
        !PackageType::ALL.iter().any(|p| self.has(*p))
    }
}
