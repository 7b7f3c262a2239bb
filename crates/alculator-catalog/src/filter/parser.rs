//! Parser for free-text search queries.

use super::ast::{SearchQuery, SearchTerm};

/// Characters separating OR-terms.
pub const TERM_SEPARATORS: [char; 3] = [',', ';', '|'];

/// Parser for search queries.
///
/// # Grammar
///
/// ```text
/// query ::= term (("," | ";" | "|") term)*
/// term  ::= word (whitespace word)*
/// ```
///
/// Terms with no words are dropped, so `"xpa,,"` is the same as `"xpa"`.
/// Parsing never fails; a blank query parses to the empty query.
///
/// # Example
///
/// ```
/// use alculator_catalog_rs::filter::SearchParser;
///
/// let query = SearchParser::parse("xpa, ipa hazy");
/// assert_eq!(query.terms.len(), 2);
/// assert!(query.matches("hazy ipa 375ml"));
/// assert!(!query.matches("session ipa"));
/// ```
pub struct SearchParser;

impl SearchParser {
    /// Parses a query string.
    pub fn parse(input: &str) -> SearchQuery {
        let terms = input
            .trim()
            .to_lowercase()
            .split(TERM_SEPARATORS)
            .map(|term| SearchTerm {
                words: term.split_whitespace().map(str::to_string).collect(),
            })
            .filter(|term| !term.words.is_empty())
            .collect();

        SearchQuery { terms }
    }
}
