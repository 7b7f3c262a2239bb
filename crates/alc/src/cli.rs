//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the alc CLI.

use std::path::PathBuf;

use alculator_feed_rs::ingest::FeedSchema;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// alc - Find the cheapest standard drink
#[derive(Parser, Debug)]
#[command(name = "alc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Feed URL (default: from config, then the public feed)
    #[arg(long, global = true, env = "ALC_FEED_URL")]
    pub feed: Option<String>,

    /// Feed record layout
    #[arg(long, global = true, value_enum)]
    pub schema: Option<SchemaArg>,

    /// Read the feed from a local JSON file instead of downloading it
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the cheapest beers per standard drink
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Extra pages to show after the first
        #[arg(long, default_value = "0")]
        pages: u32,
    },

    /// Print a share link query string for a filter combination
    Share {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Filter flags shared by `list` and `share`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Search text; `,` `;` `|` separate alternatives, spaces require all words
    #[arg(short, long)]
    pub search: Option<String>,

    /// Ignore special prices
    #[arg(long)]
    pub no_specials: bool,

    /// Toggle a package type (single, pack, case); repeatable
    #[arg(long, action = clap::ArgAction::Append)]
    pub package: Vec<String>,

    /// Toggle a vessel (bottle, can, keg); repeatable
    #[arg(long, action = clap::ArgAction::Append)]
    pub vessel: Vec<String>,

    /// Toggle a strength (light, mid, full, strong); repeatable
    #[arg(long, action = clap::ArgAction::Append)]
    pub strength: Vec<String>,

    /// Toggle a rating (undrinkable, ok, great, legendary, unknown); repeatable
    #[arg(long, action = clap::ArgAction::Append)]
    pub rating: Vec<String>,

    /// Start from a share link query string (e.g. "q=lager&vessels=can")
    #[arg(long)]
    pub share: Option<String>,
}

/// Feed record layouts
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaArg {
    /// One record per package price
    Flat,
    /// One record per product with a pricing map
    Nested,
}

impl From<SchemaArg> for FeedSchema {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Flat => FeedSchema::Flat,
            SchemaArg::Nested => FeedSchema::Nested,
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. feed.url, output.color)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show config file path
    Path,
}
