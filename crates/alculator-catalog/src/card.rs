//! Price cards: one purchasable package variant of a product.

use alculator_feed_rs::models::PackageType;
use serde::Serialize;

use crate::classify::{Rating, Strength};

/// Vessel assumed when the feed does not name one.
pub const DEFAULT_VESSEL: &str = "bottle";

/// One concrete purchasable unit derived from a raw product.
///
/// Cards are rebuilt from the raw feed on every recomputation and carry no
/// identity between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub stockcode: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub percentage: f64,
    pub strength: Strength,
    pub standard_drinks: f64,
    /// Vessel as published; see [`Card::vessel_key`] for the filter token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel: Option<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub rating_category: Rating,
    pub package: PackageType,
    pub is_special: bool,
    pub units: u32,
    pub total_price: f64,
    pub unit_price: f64,
    /// `None` when the feed value was missing or unparseable.
    pub cost_per_standard: Option<f64>,
    pub tax_cost: f64,
    pub tax_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitterness: Option<f64>,
}

impl Card {
    /// Lower-cased vessel, defaulting to `"bottle"`.
    pub fn vessel_key(&self) -> String {
        self.vessel
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VESSEL)
            .to_lowercase()
    }

    /// Cost per standard drink used for ordering; missing values sort as 0.
    pub fn rank_cost(&self) -> f64 {
        self.cost_per_standard.unwrap_or(0.0)
    }

    /// Returns true if the card has a usable, positive cost per standard drink.
    pub fn has_valid_cost(&self) -> bool {
        self.cost_per_standard.is_some_and(|c| c > 0.0)
    }

    /// Lower-cased text the search filter matches against.
    ///
    /// Covers name, clean name, brand, vessel, package type, size, units and
    /// style.
    pub fn search_text(&self) -> String {
        let units = self.units.to_string();
        let vessel = self.vessel_key();
        let fields = [
            Some(self.name.as_str()),
            self.clean_name.as_deref(),
            self.brand.as_deref(),
            Some(vessel.as_str()),
            Some(self.package.as_str()),
            self.size.as_deref(),
            Some(units.as_str()),
            self.style.as_deref(),
        ];

        fields
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
