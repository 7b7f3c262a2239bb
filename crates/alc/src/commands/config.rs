//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/alc/config.toml.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use alculator_feed_rs::ingest::FeedSchema;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "ALC_CONFIG";

/// Keys accepted by `alc config set`.
const VALID_KEYS: [&str; 5] = [
    "feed.url",
    "feed.schema",
    "feed.timeout_secs",
    "output.color",
    "defaults.include_specials",
];

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Feed settings.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Initial filter settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            feed: FeedConfig::default(),
            output: OutputConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Feed configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Feed record layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<FeedSchema>,

    /// Request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Starting filter state.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Prefer special prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_specials: Option<bool>,
}

/// Gets the config file path.
///
/// Uses `$ALC_CONFIG` when set, then `$XDG_CONFIG_HOME/alc/config.toml`,
/// then `~/.config/alc/config.toml` on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("alc").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("alc").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk. A missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path()?)
}

fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the only schema so far.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk, creating parent directories.
fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    let config = load_config_from(&path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("[feed]");
            if let Some(ref url) = config.feed.url {
                println!("  url: {}", url);
            }
            if let Some(schema) = config.feed.schema {
                println!("  schema: {}", schema);
            }
            if let Some(timeout) = config.feed.timeout_secs {
                println!("  timeout_secs: {}", timeout);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[defaults]");
            if let Some(include) = config.defaults.include_specials {
                println!("  include_specials: {}", include);
            }
        } else {
            println!("(No config file exists. Run 'alc config set KEY VALUE' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` assignment.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "feed.url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(CommandError::Config(format!(
                    "Invalid feed.url value '{}'. Expected an http:// or https:// URL",
                    value
                )));
            }
            config.feed.url = Some(value.to_string());
        }
        "feed.schema" => {
            let schema = value.parse::<FeedSchema>().map_err(CommandError::Config)?;
            config.feed.schema = Some(schema);
        }
        "feed.timeout_secs" => {
            let secs = value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    CommandError::Config(format!(
                        "Invalid feed.timeout_secs value '{}'. Expected a positive number of seconds",
                        value
                    ))
                })?;
            config.feed.timeout_secs = Some(secs);
        }
        "output.color" => config.output.color = Some(parse_bool(value)?),
        "defaults.include_specials" => config.defaults.include_specials = Some(parse_bool(value)?),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let path = get_config_path()?;
    let mut config = load_config_from(&path)?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config_to(&config, &path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn quiet_ctx() -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
        }
    }

    /// Runs `f` with `ALC_CONFIG` pointing into a fresh temp dir.
    fn with_config_env<F: FnOnce(&Path)>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, &config_path);

        f(&config_path);

        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }
    }

    #[test]
    fn test_parse_bool_values() {
        for value in ["true", "True", "yes", "1", "on"] {
            assert!(parse_bool(value).unwrap());
        }
        for value in ["false", "FALSE", "no", "0", "off"] {
            assert!(!parse_bool(value).unwrap());
        }
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.feed.url.is_none());
        assert!(config.feed.schema.is_none());
        assert!(config.output.color.is_none());
        assert!(config.defaults.include_specials.is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1

[feed]
url = "https://example.com/beer.json"
schema = "flat"
timeout_secs = 10

[output]
color = false

[defaults]
include_specials = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.feed.url.as_deref(), Some("https://example.com/beer.json"));
        assert_eq!(config.feed.schema, Some(FeedSchema::Flat));
        assert_eq!(config.feed.timeout_secs, Some(10));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.defaults.include_specials, Some(false));
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.feed.url.is_none());
    }

    #[test]
    fn test_config_rejects_unknown_schema() {
        let toml_str = r#"
[feed]
schema = "csv"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_config_serialization_skips_unset() {
        let mut config = Config::default();
        config.feed.schema = Some(FeedSchema::Nested);

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("schema = \"nested\""));
        assert!(!toml_str.contains("url"));
    }

    #[test]
    fn test_migrate_config_sets_current_version() {
        let config = Config {
            version: 0,
            ..Default::default()
        };
        assert_eq!(migrate_config(config).unwrap().version, CONFIG_VERSION);
    }

    #[test]
    fn test_apply_setting_validates() {
        let mut config = Config::default();

        apply_setting(&mut config, "feed.schema", "FLAT").unwrap();
        assert_eq!(config.feed.schema, Some(FeedSchema::Flat));

        apply_setting(&mut config, "feed.timeout_secs", "15").unwrap();
        assert_eq!(config.feed.timeout_secs, Some(15));

        assert!(apply_setting(&mut config, "feed.timeout_secs", "0").is_err());
        assert!(apply_setting(&mut config, "feed.url", "ftp://example.com").is_err());
        assert!(apply_setting(&mut config, "feed.schema", "csv").is_err());

        let err = apply_setting(&mut config, "token", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown config key 'token'"));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        with_config_env(|path| {
            assert_eq!(get_config_path().unwrap(), path);
        });
    }

    #[test]
    #[serial]
    fn test_load_missing_config_is_default() {
        with_config_env(|_| {
            let config = load_config().unwrap();
            assert!(config.feed.url.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_set_then_load() {
        with_config_env(|path| {
            let ctx = quiet_ctx();
            for (key, value) in [
                ("feed.url", "https://example.com/beer.json"),
                ("output.color", "off"),
                ("defaults.include_specials", "no"),
            ] {
                let opts = ConfigSetOptions {
                    key: key.to_string(),
                    value: value.to_string(),
                };
                execute_set(&ctx, &opts).unwrap();
            }

            assert!(path.exists());
            let config = load_config().unwrap();
            assert_eq!(config.feed.url.as_deref(), Some("https://example.com/beer.json"));
            assert_eq!(config.output.color, Some(false));
            assert_eq!(config.defaults.include_specials, Some(false));
        });
    }

    #[test]
    #[serial]
    fn test_load_invalid_config_is_config_error() {
        with_config_env(|path| {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "version = \"one\"").unwrap();

            let err = load_config().unwrap_err();
            assert!(matches!(err, CommandError::Config(_)));
            assert_eq!(err.exit_code(), 5);
        });
    }
}
