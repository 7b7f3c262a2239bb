//! Filter state and its transition function.
//!
//! [`FilterState`] is a plain value. Every user action goes through
//! [`FilterState::reduce`], which returns the next state; nothing else
//! mutates it.

use serde::{Serialize, Serializer};
use strsim::levenshtein;

use crate::classify::{Rating, Strength};
use crate::paginate::PAGE_SIZE;

/// Vessel tokens offered as filter choices.
pub const VESSELS: [&str; 3] = ["bottle", "can", "keg"];

const PACKAGES: [&str; 3] = ["single", "pack", "case"];
const STRENGTHS: [&str; 4] = ["light", "mid", "full", "strong"];
const RATINGS: [&str; 5] = ["undrinkable", "ok", "great", "legendary", "unknown"];

/// Maximum Levenshtein distance to consider a token as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A multi-select filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Package,
    Vessel,
    Strength,
    Rating,
}

impl Dimension {
    /// All dimensions, in filter application order for display.
    pub const ALL: [Dimension; 4] = [
        Dimension::Package,
        Dimension::Vessel,
        Dimension::Strength,
        Dimension::Rating,
    ];

    /// The fixed set of tokens this dimension can select.
    pub fn domain(&self) -> &'static [&'static str] {
        match self {
            Dimension::Package => &PACKAGES,
            Dimension::Vessel => &VESSELS,
            Dimension::Strength => &STRENGTHS,
            Dimension::Rating => &RATINGS,
        }
    }

    /// Parameter key used in share links.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Package => "packages",
            Dimension::Vessel => "vessels",
            Dimension::Strength => "strengths",
            Dimension::Rating => "ratings",
        }
    }

    /// Returns the closest domain token to an unrecognised one, if any is near.
    pub fn suggest(&self, token: &str) -> Option<&'static str> {
        let token = token.to_lowercase();
        let (best, distance) = self
            .domain()
            .iter()
            .map(|candidate| (*candidate, levenshtein(&token, candidate)))
            .min_by_key(|(_, d)| *d)?;

        // Only suggest if the distance is within threshold and not an exact match
        (distance > 0 && distance <= MAX_SUGGESTION_DISTANCE).then_some(best)
    }
}

/// A non-empty subset of a dimension's domain.
///
/// Tokens outside the domain are kept as-is (they arrive through share
/// links); they simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    dimension: Dimension,
    items: Vec<String>,
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl Selection {
    /// Every token in the domain selected.
    pub fn all(dimension: Dimension) -> Self {
        Self {
            dimension,
            items: dimension.domain().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Exactly one token selected.
    pub fn only(dimension: Dimension, item: &str) -> Self {
        Self {
            dimension,
            items: vec![item.to_string()],
        }
    }

    /// Builds a selection from tokens verbatim, dropping duplicates.
    ///
    /// An empty token list selects everything.
    pub fn from_tokens<I, S>(dimension: Dimension, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.into();
            if !items.contains(&token) {
                items.push(token);
            }
        }
        if items.is_empty() {
            return Self::all(dimension);
        }
        Self { dimension, items }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Selected tokens in selection order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Returns true if the selection equals the whole domain, in any order.
    pub fn is_all(&self) -> bool {
        let domain = self.dimension.domain();
        self.items.len() == domain.len() && domain.iter().all(|d| self.contains(d))
    }

    /// Applies a user click on `item`.
    ///
    /// - all selected: drill down to just `item`
    /// - only `item` selected: back to all
    /// - `item` selected: deselect it (an emptied selection becomes all)
    /// - otherwise: add `item`
    pub fn toggled(mut self, item: &str) -> Self {
        if self.is_all() {
            return Self::only(self.dimension, item);
        }
        if self.items.len() == 1 && self.items[0] == item {
            return Self::all(self.dimension);
        }
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                if self.items.is_empty() {
                    return Self::all(self.dimension);
                }
            }
            None => self.items.push(item.to_string()),
        }
        self
    }

    /// Comma-joined tokens, as used in share links.
    pub fn joined(&self) -> String {
        self.items.join(",")
    }
}

/// A user action on the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search text.
    SetQuery(String),
    /// Flip whether special prices are preferred.
    ToggleSpecials,
    SetSpecials(bool),
    /// Click on one option of a multi-select dimension.
    Toggle(Dimension, String),
    /// Show one more page.
    LoadMore,
    /// Return to the first page.
    ResetLimit,
    /// Return to the default state.
    Reset,
}

/// Every user-adjustable predicate plus the pagination cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub query: String,
    pub include_specials: bool,
    pub packages: Selection,
    pub vessels: Selection,
    pub strengths: Selection,
    pub ratings: Selection,
    pub display_limit: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            include_specials: true,
            packages: Selection::all(Dimension::Package),
            vessels: Selection::all(Dimension::Vessel),
            strengths: Selection::all(Dimension::Strength),
            ratings: Selection::all(Dimension::Rating),
            display_limit: PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// Returns the selection for a dimension.
    pub fn selection(&self, dimension: Dimension) -> &Selection {
        match dimension {
            Dimension::Package => &self.packages,
            Dimension::Vessel => &self.vessels,
            Dimension::Strength => &self.strengths,
            Dimension::Rating => &self.ratings,
        }
    }

    /// Replaces the selection for its dimension.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        match selection.dimension() {
            Dimension::Package => self.packages = selection,
            Dimension::Vessel => self.vessels = selection,
            Dimension::Strength => self.strengths = selection,
            Dimension::Rating => self.ratings = selection,
        }
        self
    }

    /// Returns true if a strength category passes the strength filter.
    pub fn allows_strength(&self, strength: Strength) -> bool {
        self.strengths.contains(strength.as_str())
    }

    /// Returns true if a rating category passes the rating filter.
    pub fn allows_rating(&self, rating: Rating) -> bool {
        self.ratings.contains(rating.as_str())
    }

    /// Computes the next state.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => Self { query, ..self },
            Action::ToggleSpecials => Self {
                include_specials: !self.include_specials,
                ..self
            },
            Action::SetSpecials(include_specials) => Self {
                include_specials,
                ..self
            },
            Action::Toggle(dimension, item) => {
                let selection = self.selection(dimension).clone().toggled(&item);
                self.with_selection(selection)
            }
            Action::LoadMore => Self {
                display_limit: self.display_limit.saturating_add(PAGE_SIZE),
                ..self
            },
            Action::ResetLimit => Self {
                display_limit: PAGE_SIZE,
                ..self
            },
            Action::Reset => Self::default(),
        }
    }
}
