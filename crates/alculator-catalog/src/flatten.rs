//! Flattening raw products into price cards.

use alculator_feed_rs::models::{PackageType, PriceEntry, RawProduct};

use crate::card::Card;
use crate::classify::{rating_category, strength_category};
use crate::image::primary_image_url;
use crate::state::Selection;

/// Expands products into one card per selected, priced package type.
///
/// For each package type (in `single, pack, case` order) that the product
/// prices and the selection includes, the special entry is used when
/// `include_specials` is set and one exists, otherwise the base entry. A
/// package with neither is skipped. Output keeps product order.
pub fn flatten(products: &[RawProduct], include_specials: bool, packages: &Selection) -> Vec<Card> {
    let selected: Vec<PackageType> = PackageType::ALL
        .into_iter()
        .filter(|p| packages.contains(p.as_str()))
        .collect();

    products
        .iter()
        .flat_map(|product| flatten_product(product, include_specials, &selected))
        .collect()
}

fn flatten_product(product: &RawProduct, include_specials: bool, selected: &[PackageType]) -> Vec<Card> {
    let props = &product.properties;
    let percentage = props.percentage.unwrap_or(0.0);
    let strength = strength_category(percentage);
    let rating_category = rating_category(props.rating);
    let image_url = props
        .image
        .clone()
        .or_else(|| primary_image_url(&product.stockcode))
        .unwrap_or_default();

    selected
        .iter()
        .filter_map(|&package| {
            let special = include_specials
                .then(|| product.pricing.special(package))
                .flatten();
            let (entry, is_special) = match special {
                Some(entry) => (entry, true),
                None => (product.pricing.base(package)?, false),
            };
            Some((package, entry, is_special))
        })
        .map(|(package, entry, is_special)| Card {
            stockcode: product.stockcode.clone(),
            name: props.name.clone(),
            clean_name: props.clean_name.clone(),
            brand: props.brand.clone(),
            size: props.size.clone(),
            percentage,
            strength,
            standard_drinks: props.standard_drinks.unwrap_or(0.0),
            vessel: props.vessel.clone(),
            image_url: image_url.clone(),
            rating: props.rating,
            rating_category,
            package,
            is_special,
            units: units(entry),
            total_price: entry.total_price.unwrap_or(0.0),
            unit_price: entry.unit_price.unwrap_or(0.0),
            cost_per_standard: entry.cost_per_standard,
            tax_cost: entry.tax_cost.unwrap_or(0.0),
            tax_percent: entry.tax_percent.unwrap_or(0.0),
            style: props.style.clone(),
            bitterness: props.bitterness,
        })
        .collect()
}

fn units(entry: &PriceEntry) -> u32 {
    entry
        .units
        .map(|u| u.round().max(0.0) as u32)
        .unwrap_or(0)
}
