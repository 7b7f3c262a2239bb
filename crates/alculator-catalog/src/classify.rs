//! Category classifiers for product-level attributes.
//!
//! Both classifiers are total: every input maps to a category, with
//! [`Rating::Unknown`] standing in for a missing score.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Alcohol strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// Below 3%.
    Light,
    /// 3% up to and including 4%.
    Mid,
    /// Above 4% up to and including 5.5%.
    Full,
    /// Above 5.5%.
    Strong,
}

impl Strength {
    /// All strengths, lightest first.
    pub const ALL: [Strength; 4] = [Strength::Light, Strength::Mid, Strength::Full, Strength::Strong];

    /// Returns the lower-case token used in filter selections.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Light => "light",
            Strength::Mid => "mid",
            Strength::Full => "full",
            Strength::Strong => "strong",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Light => "Light",
            Strength::Mid => "Mid",
            Strength::Full => "Full",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Strength::ALL
            .into_iter()
            .find(|c| c.as_str() == token)
            .ok_or_else(|| format!("unknown strength '{s}'"))
    }
}

/// Review score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Undrinkable,
    Ok,
    Great,
    Legendary,
    /// No usable score in the feed.
    Unknown,
}

impl Rating {
    /// All ratings, worst first, with `Unknown` last.
    pub const ALL: [Rating; 5] = [
        Rating::Undrinkable,
        Rating::Ok,
        Rating::Great,
        Rating::Legendary,
        Rating::Unknown,
    ];

    /// Returns the lower-case token used in filter selections.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Undrinkable => "undrinkable",
            Rating::Ok => "ok",
            Rating::Great => "great",
            Rating::Legendary => "legendary",
            Rating::Unknown => "unknown",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Undrinkable => "Undrinkable",
            Rating::Ok => "OK",
            Rating::Great => "Great",
            Rating::Legendary => "Legendary",
            Rating::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Rating::ALL
            .into_iter()
            .find(|c| c.as_str() == token)
            .ok_or_else(|| format!("unknown rating '{s}'"))
    }
}

/// Classifies an alcohol percentage. Upper bounds are inclusive.
pub fn strength_category(percentage: f64) -> Strength {
    if percentage < 3.0 {
        Strength::Light
    } else if percentage <= 4.0 {
        Strength::Mid
    } else if percentage <= 5.5 {
        Strength::Full
    } else {
        Strength::Strong
    }
}

/// Classifies a review score.
pub fn rating_category(rating: Option<f64>) -> Rating {
    let Some(score) = rating.filter(|r| !r.is_nan()) else {
        return Rating::Unknown;
    };

    if score < 3.5 {
        Rating::Undrinkable
    } else if score < 4.5 {
        // 3.5-4.0 and 4.0-4.5 are separate bands upstream; both read as OK.
        Rating::Ok
    } else if score <= 4.8 {
        Rating::Great
    } else {
        Rating::Legendary
    }
}
