use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::list::FeedOptions;
use commands::{CommandContext, CommandError};
use dispatch::{FeedCommand, FeedDispatch, OfflineCommand, OfflineDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": e.code(),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Default log level for the CLI flags; `RUST_LOG` overrides it.
fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs a stderr fmt subscriber.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose)
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        // Config commands still run so a broken file can be inspected.
        Err(e) if matches!(cli.command, Some(cli::Commands::Config { .. })) => {
            tracing::warn!("{e}");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    let ctx = CommandContext::from_cli(cli, &config);

    if let Some(dispatch) = OfflineDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx, &config);
    }

    if let Some(dispatch) = FeedDispatch::from_cli(cli) {
        let feed = FeedOptions::resolve(cli, &config);
        tracing::debug!(?feed, "resolved feed");
        return dispatch.execute(&ctx, &feed, &config).await;
    }

    Err(CommandError::Usage(format!("unsupported command: {:?}", cli.command)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let cli = Cli::try_parse_from(["alc", "list"]).unwrap();
        assert_eq!(default_log_level(&cli), "warn");

        let cli = Cli::try_parse_from(["alc", "--verbose", "list"]).unwrap();
        assert_eq!(default_log_level(&cli), "debug");

        let cli = Cli::try_parse_from(["alc", "-q", "list"]).unwrap();
        assert_eq!(default_log_level(&cli), "error");
    }
}
