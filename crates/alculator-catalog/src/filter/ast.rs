//! Parsed form of a search query.

/// A search query: a disjunction of terms, each a conjunction of words.
///
/// An empty query (no terms) matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// OR-terms, in query order.
    pub terms: Vec<SearchTerm>,
}

/// One OR-term: every word must appear in the card text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    /// Lower-cased, non-empty words.
    pub words: Vec<String>,
}

impl SearchTerm {
    /// Returns true if every word is a substring of `haystack`.
    ///
    /// `haystack` must already be lower-cased.
    pub fn matches(&self, haystack: &str) -> bool {
        self.words.iter().all(|word| haystack.contains(word.as_str()))
    }
}

impl SearchQuery {
    /// Returns true if the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if any term matches `haystack` (lower-cased).
    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || self.terms.iter().any(|term| term.matches(haystack))
    }
}
