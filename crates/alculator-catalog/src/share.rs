//! Shareable filter state.
//!
//! A [`FilterState`] is encoded as a flat list of key/value parameters:
//!
//! | key | value |
//! |-----|-------|
//! | `q` | search text, omitted when empty |
//! | `specials` | `true`/`false`, omitted when `true` |
//! | `packages`, `vessels`, `strengths`, `ratings` | comma-joined tokens, omitted when all are selected |
//!
//! Decoding overwrites selections verbatim, without checking tokens against
//! the known domain. The display limit is never shared.

use thiserror::Error;

use crate::state::{Dimension, FilterState, Selection};

pub const KEY_QUERY: &str = "q";
pub const KEY_SPECIALS: &str = "specials";

/// Errors converting share parameters to or from a query string.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to encode share parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("failed to decode share parameters: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),
}

/// Encodes the shareable parts of a state.
pub fn encode(state: &FilterState) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if !state.query.is_empty() {
        params.push((KEY_QUERY, state.query.clone()));
    }
    if !state.include_specials {
        params.push((KEY_SPECIALS, "false".to_string()));
    }
    for dimension in Dimension::ALL {
        let selection = state.selection(dimension);
        if !selection.is_all() {
            params.push((dimension.key(), selection.joined()));
        }
    }

    params
}

/// Applies decoded parameters on top of `state`. Unknown keys are ignored.
pub fn apply_params<I, K, V>(mut state: FilterState, params: I) -> FilterState
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in params {
        let (key, value) = (key.as_ref(), value.as_ref());
        match key {
            KEY_QUERY => state.query = value.to_string(),
            KEY_SPECIALS => match value {
                "true" | "1" => state.include_specials = true,
                "false" | "0" => state.include_specials = false,
                other => tracing::debug!(value = other, "ignoring unrecognised specials value"),
            },
            _ => {
                if let Some(dimension) = Dimension::ALL.into_iter().find(|d| d.key() == key) {
                    let selection = Selection::from_tokens(dimension, value.split(','));
                    state = state.with_selection(selection);
                }
            }
        }
    }
    state
}

/// Decodes parameters onto the default state.
pub fn decode<I, K, V>(params: I) -> FilterState
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    apply_params(FilterState::default(), params)
}

/// Encodes a state as a URL query string (without the leading `?`).
pub fn to_query_string(state: &FilterState) -> Result<String, ShareError> {
    Ok(serde_urlencoded::to_string(encode(state))?)
}

/// Parses a URL query string into parameters. A leading `?` is accepted.
pub fn parse_query_string(query: &str) -> Result<Vec<(String, String)>, ShareError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    Ok(serde_urlencoded::from_str(query)?)
}

/// Decodes a URL query string onto the default state.
pub fn from_query_string(query: &str) -> Result<FilterState, ShareError> {
    Ok(decode(parse_query_string(query)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    fn custom_state() -> FilterState {
        FilterState::default()
            .reduce(Action::SetQuery("hazy ipa, xpa".into()))
            .reduce(Action::ToggleSpecials)
            .reduce(Action::Toggle(Dimension::Package, "case".into()))
            .reduce(Action::Toggle(Dimension::Package, "pack".into()))
            .reduce(Action::Toggle(Dimension::Rating, "great".into()))
    }

    #[test]
    fn test_default_state_encodes_to_nothing() {
        assert!(encode(&FilterState::default()).is_empty());
        assert_eq!(to_query_string(&FilterState::default()).unwrap(), "");
    }

    #[test]
    fn test_encode_custom_state() {
        let params = encode(&custom_state());
        assert_eq!(
            params,
            vec![
                ("q", "hazy ipa, xpa".to_string()),
                ("specials", "false".to_string()),
                ("packages", "case,pack".to_string()),
                ("ratings", "great".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_selected_in_other_order_is_omitted() {
        let state = FilterState::default().with_selection(Selection::from_tokens(
            Dimension::Strength,
            ["strong", "light", "full", "mid"],
        ));
        assert!(encode(&state).is_empty());
    }

    #[test]
    fn test_decode_overwrites_verbatim() {
        let state = decode([("vessels", "can,tinnie"), ("q", "lager")]);
        assert_eq!(state.vessels.items(), ["can", "tinnie"]);
        assert_eq!(state.query, "lager");
        assert!(state.packages.is_all());
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_limit() {
        let state = decode([("page", "3"), ("limit", "500")]);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_decode_specials_values() {
        assert!(!decode([("specials", "false")]).include_specials);
        assert!(!decode([("specials", "0")]).include_specials);
        assert!(decode([("specials", "true")]).include_specials);
        assert!(decode([("specials", "maybe")]).include_specials);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let first = encode(&custom_state());
        let second = encode(&decode(first.clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_string_round_trip() {
        let query = to_query_string(&custom_state()).unwrap();
        assert!(query.starts_with("q=hazy+ipa%2C+xpa"));

        let decoded = from_query_string(&format!("?{query}")).unwrap();
        assert_eq!(to_query_string(&decoded).unwrap(), query);
    }

    #[test]
    fn test_apply_params_keeps_limit() {
        let state = FilterState::default().reduce(Action::LoadMore);
        let state = apply_params(state, [("strengths", "mid")]);
        assert_eq!(state.display_limit, 96);
        assert_eq!(state.strengths.items(), ["mid"]);
    }
}
