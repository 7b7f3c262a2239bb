//! Building a filter state from command-line flags.

use alculator_catalog_rs::{share, Action, Dimension, FilterState};

use super::config::Config;
use super::Result;
use crate::cli::FilterArgs;

/// Builds the starting filter state for `list` and `share`.
///
/// Layers apply in order: built-in defaults, `defaults.include_specials` from
/// the config, the `--share` query string, `--no-specials`, `--search`, then
/// every `--package`/`--vessel`/`--strength`/`--rating` as a toggle.
pub fn build_state(args: &FilterArgs, config: &Config) -> Result<FilterState> {
    let mut state = FilterState::default();

    if let Some(include) = config.defaults.include_specials {
        state = state.reduce(Action::SetSpecials(include));
    }

    if let Some(ref query) = args.share {
        state = share::apply_params(state, share::parse_query_string(query)?);
    }

    if args.no_specials {
        state = state.reduce(Action::SetSpecials(false));
    }

    if let Some(ref search) = args.search {
        state = state.reduce(Action::SetQuery(search.clone()));
    }

    let toggles = [
        (Dimension::Package, &args.package),
        (Dimension::Vessel, &args.vessel),
        (Dimension::Strength, &args.strength),
        (Dimension::Rating, &args.rating),
    ];
    for (dimension, tokens) in toggles {
        for token in tokens {
            let token = token.trim().to_lowercase();
            warn_if_unknown(dimension, &token);
            state = state.reduce(Action::Toggle(dimension, token));
        }
    }

    Ok(state)
}

/// Logs a warning for tokens outside the dimension's choices.
///
/// Unknown tokens are still toggled; they just match no card.
fn warn_if_unknown(dimension: Dimension, token: &str) {
    if dimension.domain().contains(&token) {
        return;
    }
    match dimension.suggest(token) {
        Some(suggestion) => tracing::warn!(
            "unknown {} '{}', did you mean '{}'?",
            dimension.key(),
            token,
            suggestion
        ),
        None => tracing::warn!(
            "unknown {} '{}' (expected one of: {})",
            dimension.key(),
            token,
            dimension.domain().join(", ")
        ),
    }
}
