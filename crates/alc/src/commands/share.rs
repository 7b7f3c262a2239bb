//! Share command implementation.
//!
//! Prints the query string that reproduces a filter combination.

use alculator_catalog_rs::share;
use serde::Serialize;

use super::config::Config;
use super::state::build_state;
use super::{CommandContext, Result};
use crate::cli::FilterArgs;

/// JSON output structure for the share command.
#[derive(Serialize)]
struct ShareOutput<'a> {
    query: &'a str,
    params: Vec<(&'static str, String)>,
}

/// Executes the share command.
pub fn execute(ctx: &CommandContext, filters: &FilterArgs, config: &Config) -> Result<()> {
    let state = build_state(filters, config)?;
    let query = share::to_query_string(&state)?;

    if ctx.json_output {
        let output = ShareOutput {
            query: &query,
            params: share::encode(&state),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if query.is_empty() {
        if !ctx.quiet {
            eprintln!("(Default filters: nothing to share.)");
        }
    } else {
        println!("?{query}");
    }

    Ok(())
}
