//! Output formatting utilities for the alc CLI.
//!
//! This module provides functions for formatting catalog pages as tables or JSON:
//!
//! - [`cards`] - Price card output formatting (list)
//! - [`helpers`] - Common formatting utilities (truncation, money, ratings)

mod cards;
pub mod helpers;

pub use cards::{format_cards_json, format_cards_table};
