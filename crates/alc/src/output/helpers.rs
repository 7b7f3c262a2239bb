//! Common helper functions for output formatting.

use alculator_catalog_rs::{Card, Rating};
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a dollar amount with two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Formats the package column, e.g. `pack x6`, with `*` marking a special.
pub fn format_package(card: &Card) -> String {
    let mut label = if card.units > 1 {
        format!("{} x{}", card.package, card.units)
    } else {
        card.package.to_string()
    };
    if card.is_special {
        label.push('*');
    }
    label
}

/// Formats the cost-per-standard-drink column, padded to `width`.
///
/// Padding happens before coloring so escape codes don't skew columns.
pub fn format_cost(card: &Card, width: usize, use_colors: bool) -> String {
    let cost = format!("{:<width$}", format_money(card.rank_cost()));
    if use_colors && card.is_special {
        cost.yellow().bold().to_string()
    } else if use_colors {
        cost.bold().to_string()
    } else {
        cost
    }
}

/// Formats a rating category for display, padded to `width`.
pub fn format_rating(rating: Rating, width: usize, use_colors: bool) -> String {
    let label = format!("{:<width$}", rating.label());

    if use_colors {
        match rating {
            Rating::Legendary => label.magenta().to_string(),
            Rating::Great => label.green().to_string(),
            Rating::Ok => label,
            Rating::Undrinkable => label.red().to_string(),
            Rating::Unknown => label.dimmed().to_string(),
        }
    } else {
        label
    }
}

/// Formats the display name: brand and name, without repeating the brand.
pub fn format_name(card: &Card) -> String {
    let name = card.clean_name.as_deref().unwrap_or(&card.name);
    match card.brand.as_deref() {
        Some(brand) if !brand.is_empty() && !name.to_lowercase().starts_with(&brand.to_lowercase()) => {
            format!("{brand} {name}")
        }
        _ => name.to_string(),
    }
}
