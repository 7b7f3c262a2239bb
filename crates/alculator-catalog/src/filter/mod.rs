//! Card filtering: the search query language and the predicate chain.
//!
//! # Search Syntax
//!
//! - words separated by whitespace must **all** appear (AND)
//! - terms separated by `,`, `;` or `|` are alternatives (OR)
//! - matching is a case-insensitive substring test against the card's name,
//!   clean name, brand, vessel, package type, size, units and style
//!
//! `"xpa, ipa hazy"` matches cards mentioning "xpa", or both "ipa" and "hazy".
//!
//! # Example
//!
//! ```
//! use alculator_catalog_rs::filter::{SearchParser, SearchTerm};
//!
//! let query = SearchParser::parse("lager | pale ale");
//! assert_eq!(query.terms[1], SearchTerm { words: vec!["pale".into(), "ale".into()] });
//! ```

mod ast;
mod evaluator;
mod parser;

pub use ast::{SearchQuery, SearchTerm};
pub use evaluator::CardFilter;
pub use parser::{SearchParser, TERM_SEPARATORS};
