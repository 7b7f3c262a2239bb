//! Command implementations for the alc CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod list;
pub mod share;
pub mod state;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Feed download or decoding error.
    #[error("feed error: {0}")]
    Feed(#[from] alculator_feed_rs::error::Error),

    /// Share link could not be parsed or built.
    #[error("share link error: {0}")]
    Share(#[from] alculator_catalog_rs::ShareError),

    /// Invalid command-line usage.
    #[error("{0}")]
    Usage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns the error code string for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Feed(_) => "FEED_ERROR",
            CommandError::Config(_) => "CONFIG_ERROR",
            CommandError::Io(_) => "IO_ERROR",
            CommandError::Json(_) => "JSON_ERROR",
            CommandError::Share(_) | CommandError::Usage(_) => "USAGE_ERROR",
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Feed(e) => u8::try_from(e.exit_code()).unwrap_or(1),
            CommandError::Config(_) => 5,
            CommandError::Io(_) => 3,
            CommandError::Share(_) | CommandError::Usage(_) | CommandError::Json(_) => 1,
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// `--no-color` wins over `output.color` in the config.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
