//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into those that work offline and those that need the feed.

use crate::cli::{Cli, Commands, ConfigCommands, FilterArgs, Shell};
use crate::commands::config::{Config, ConfigSetOptions};
use crate::commands::list::{FeedOptions, ListOptions};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without downloading the feed.
pub trait OfflineCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()>;
}

/// Trait for commands that read the feed.
#[allow(async_fn_in_trait)]
pub trait FeedCommand {
    /// Execute the command against the resolved feed.
    async fn execute(&self, ctx: &CommandContext, feed: &FeedOptions, config: &Config) -> Result<()>;
}

/// Commands that don't need the feed.
pub enum OfflineDispatch<'a> {
    Share(&'a FilterArgs),
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> OfflineDispatch<'a> {
    /// Try to create an offline dispatch from the CLI command.
    /// Returns None if the command needs the feed.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Share { filters }) => Some(Self::Share(filters)),
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            Some(Commands::List { .. }) => None,
        }
    }
}

impl OfflineCommand for OfflineDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        match self {
            Self::Share(filters) => commands::share::execute(ctx, filters, config),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => commands::completions::execute(shell).map_err(CommandError::Io),
            Self::Help => {
                if !ctx.quiet {
                    println!("alc - cheapest beer per standard drink");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that read the feed.
pub enum FeedDispatch<'a> {
    List { filters: &'a FilterArgs, pages: u32 },
}

impl<'a> FeedDispatch<'a> {
    /// Create a feed dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List { filters, pages }) => Some(Self::List {
                filters,
                pages: *pages,
            }),
            _ => None,
        }
    }
}

impl FeedCommand for FeedDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, feed: &FeedOptions, config: &Config) -> Result<()> {
        match self {
            Self::List { filters, pages } => {
                let opts = ListOptions {
                    filters: (*filters).clone(),
                    pages: *pages,
                };
                commands::list::execute(ctx, &opts, feed, config).await
            }
        }
    }
}
