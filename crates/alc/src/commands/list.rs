//! List command implementation.
//!
//! Downloads the feed, applies the filter flags and prints the cheapest
//! cards per standard drink.

use std::path::PathBuf;
use std::time::Duration;

use alculator_catalog_rs::{share, Catalog, CatalogView};
use alculator_feed_rs::client::{load_file, FeedClient, DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};
use alculator_feed_rs::ingest::{FeedSchema, Ingested};
use alculator_feed_rs::models::RawProduct;

use super::config::Config;
use super::state::build_state;
use super::{CommandContext, Result};
use crate::cli::{Cli, FilterArgs};
use crate::output::{format_cards_json, format_cards_table};

/// Where the feed comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

/// Resolved feed settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedOptions {
    pub source: FeedSource,
    pub schema: FeedSchema,
    pub timeout: Duration,
}

impl FeedOptions {
    /// Resolves feed settings with priority: flag > env > config > default.
    ///
    /// `--file` beats any URL. `ALC_FEED_URL` arrives through the `--feed`
    /// flag, so it already ranks above the config.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let source = match (&cli.file, &cli.feed, &config.feed.url) {
            (Some(path), _, _) => FeedSource::File(path.clone()),
            (None, Some(url), _) | (None, None, Some(url)) => FeedSource::Url(url.clone()),
            (None, None, None) => FeedSource::Url(DEFAULT_FEED_URL.to_string()),
        };

        let schema = cli
            .schema
            .map(FeedSchema::from)
            .or(config.feed.schema)
            .unwrap_or_default();

        let timeout = Duration::from_secs(config.feed.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        Self {
            source,
            schema,
            timeout,
        }
    }
}

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Filter flags.
    pub filters: FilterArgs,
    /// Extra pages to show after the first.
    pub pages: u32,
}

/// Downloads or reads the feed.
pub async fn fetch_products(feed: &FeedOptions) -> alculator_feed_rs::error::Result<Ingested> {
    match &feed.source {
        FeedSource::File(path) => load_file(path, feed.schema).await,
        FeedSource::Url(url) => {
            let client = FeedClient::builder()
                .url(url.clone())
                .timeout(feed.timeout)
                .build()?;
            client.fetch(feed.schema).await
        }
    }
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or the share link is invalid.
pub async fn execute(
    ctx: &CommandContext,
    opts: &ListOptions,
    feed: &FeedOptions,
    config: &Config,
) -> Result<()> {
    let state = build_state(&opts.filters, config)?;

    let mut catalog = Catalog::new();
    let ticket = catalog.begin_load();
    match fetch_products(feed).await {
        Ok(ingested) => {
            if ingested.dropped > 0 {
                tracing::debug!(dropped = ingested.dropped, "skipped unusable feed records");
            }
            catalog.finish_load(ticket, Ok::<_, alculator_feed_rs::error::Error>(ingested.products));
        }
        Err(e) => {
            catalog.finish_load(ticket, Err::<Vec<RawProduct>, _>(&e));
            return Err(e.into());
        }
    }

    catalog.set_state(state);
    let view = show_pages(&mut catalog, opts.pages);

    if ctx.json_output {
        let share_query = share::to_query_string(&view.state)?;
        println!("{}", format_cards_json(&view, &share_query)?);
    } else if !ctx.quiet {
        print!("{}", format_cards_table(&view, ctx.use_colors));
    }

    Ok(())
}

/// Loads `pages` extra pages, stopping once everything is shown.
fn show_pages(catalog: &mut Catalog, pages: u32) -> CatalogView {
    let mut view = catalog.view();
    for _ in 0..pages {
        if !view.has_more {
            break;
        }
        view = catalog.load_more();
    }
    view
}
