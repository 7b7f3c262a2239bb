//! Price card output formatting.

use alculator_catalog_rs::image::supplier_url;
use alculator_catalog_rs::{Card, CatalogView};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_cost, format_money, format_name, format_package, format_rating, truncate_str};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub cards: Vec<CardOutput<'a>>,
    pub shown: usize,
    pub total: usize,
    pub has_more: bool,
    /// Query string reproducing the filters.
    pub share: &'a str,
}

/// JSON output structure for a single card.
#[derive(Serialize)]
pub struct CardOutput<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub card: &'a Card,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_url: Option<String>,
}

/// Formats a catalog page as JSON.
pub fn format_cards_json(view: &CatalogView, share: &str) -> Result<String, serde_json::Error> {
    let cards = view
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| CardOutput {
            rank: i + 1,
            card,
            supplier_url: supplier_url(&card.stockcode),
        })
        .collect();

    let output = ListOutput {
        cards,
        shown: view.cards.len(),
        total: view.total,
        has_more: view.has_more,
        share,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a catalog page as a table.
pub fn format_cards_table(view: &CatalogView, use_colors: bool) -> String {
    if view.cards.is_empty() {
        return "No beers found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:>4} {:<8} {:<9} {:<12} {:<6} {:<11} {}",
        "#", "$/Std", "Price", "Package", "ABV", "Rating", "Name"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (i, card) in view.cards.iter().enumerate() {
        let line = format!(
            "{:>4} {} {:<9} {:<12} {:<5.1}% {} {}",
            i + 1,
            format_cost(card, 8, use_colors),
            format_money(card.total_price),
            format_package(card),
            card.percentage,
            format_rating(card.rating_category, 11, use_colors),
            truncate_str(&format_name(card), 50),
        );
        output.push_str(&line);
        output.push('\n');
    }

    let footer = format!("Showing {} of {}", view.cards.len(), view.total);
    if view.has_more {
        output.push_str(&format!("\n{footer} (use --pages N for more)\n"));
    } else {
        output.push_str(&format!("\n{footer}\n"));
    }
    if view.cards.iter().any(|c| c.is_special) {
        output.push_str("* special price\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use alculator_catalog_rs::{Catalog, FilterState};
    use alculator_feed_rs::ingest::{ingest, FeedSchema};

    fn view(limit: usize) -> CatalogView {
        let feed = serde_json::json!([
            {"stockcode": "ER_1_SINGLE", "name": "Lager", "brand": "Acme", "package": "pack",
             "units": 6, "total_price": 20.0, "percentage": 4.5, "cost_per_standard": 1.8,
             "special": true},
            {"stockcode": "2", "name": "Stout", "total_price": 5.0, "percentage": 5.0,
             "rating": 4.9, "cost_per_standard": 2.1}
        ]);
        let products = ingest(feed, FeedSchema::Flat).products;
        let state = FilterState {
            display_limit: limit,
            ..Default::default()
        };
        Catalog::with_products(products, state).view()
    }

    #[test]
    fn test_table_rows_in_rank_order() {
        let table = format_cards_table(&view(48), false);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("$/Std"));
        assert!(lines[1].contains("$1.80"));
        assert!(lines[1].contains("pack x6*"));
        assert!(lines[1].contains("Acme Lager"));
        assert!(lines[2].contains("$2.10"));
        assert!(lines[2].contains("Legendary"));
        assert!(table.contains("Showing 2 of 2\n"));
        assert!(table.contains("* special price"));
    }

    #[test]
    fn test_table_mentions_more_pages() {
        let table = format_cards_table(&view(1), false);
        assert!(table.contains("Showing 1 of 2 (use --pages N for more)"));
    }

    #[test]
    fn test_table_empty() {
        let empty = Catalog::new().view();
        assert_eq!(format_cards_table(&empty, false), "No beers found.\n");
    }

    #[test]
    fn test_json_output() {
        let json = format_cards_json(&view(48), "q=lager").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["shown"], 2);
        assert_eq!(value["has_more"], false);
        assert_eq!(value["share"], "q=lager");
        assert_eq!(value["cards"][0]["rank"], 1);
        assert_eq!(value["cards"][0]["stockcode"], "ER_1_SINGLE");
        assert_eq!(value["cards"][0]["package"], "pack");
        assert_eq!(value["cards"][0]["is_special"], true);
        assert_eq!(
            value["cards"][0]["supplier_url"],
            "https://www.danmurphys.com.au/product/ER_1_SINGLE"
        );
        assert_eq!(value["cards"][1]["rating_category"], "legendary");
    }
}
