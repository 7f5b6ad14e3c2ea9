//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cookbook/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading runs before the logger exists (the log file is itself a
//! setting), so messages are collected as [`Notes`] and flushed by `main`
//! once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CookbookConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub collection_path: Option<String>,
    pub api_key: Option<String>,
    pub api_key_header: Option<String>,
    pub accept: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_COLLECTION_PATH: &str = "/api/recipes/";
pub const DEFAULT_API_KEY_HEADER: &str = "API-KEY";
pub const DEFAULT_ACCEPT: &str = "application/vnd.mason+json, application/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "cookbook.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub collection_path: String,
    pub api_key: Option<String>,
    pub api_key_header: String,
    pub accept: String,
    pub timeout: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub notes: Notes,
}

/// A config file as loaded, with what happened along the way.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: CookbookConfig,
    pub notes: Notes,
}

/// Log messages held back until the logger is initialised.
#[derive(Debug, Default, Clone)]
pub struct Notes(Vec<(Level, String)>);

impl Notes {
    fn push(&mut self, level: Level, message: impl Into<String>) {
        self.0.push((level, message.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, &str)> {
        self.0.iter().map(|(level, message)| (*level, message.as_str()))
    }

    /// Emits every held message through `log` and empties the buffer.
    pub fn flush(&mut self) {
        for (level, message) in std::mem::take(&mut self.0) {
            log::log!(level, "{message}");
        }
    }
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cookbook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cookbook").join("config.toml"))
}

/// Load config from `explicit` or, when `None`, from `~/.cookbook/config.toml`.
///
/// A missing default file is generated and defaults are returned. A missing
/// explicit file is an error: the user asked for that file specifically.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let mut notes = Notes::default();
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                notes.push(
                    Level::Warn,
                    "Could not determine home directory, using default config",
                );
                return Ok(LoadedConfig {
                    config: CookbookConfig::default(),
                    notes,
                });
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, &mut notes);
        return Ok(LoadedConfig {
            config: CookbookConfig::default(),
            notes,
        });
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {}", redacted(&config)));
    Ok(LoadedConfig { config, notes })
}

pub fn parse_config(contents: &str) -> Result<CookbookConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Debug view of the config without the credential.
fn redacted(config: &CookbookConfig) -> String {
    format!(
        "server.base_url={:?} collection_path={:?} api_key={} timeout_secs={:?} logging={:?}",
        config.server.base_url,
        config.server.collection_path,
        if config.server.api_key.is_some() { "<set>" } else { "<unset>" },
        config.server.timeout_secs,
        config.logging,
    )
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut Notes) {
    let default_content = r#"# Cookbook Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://localhost:5000"         # Or set COOKBOOK_BASE_URL
# collection_path = "/api/recipes/"
# api_key = "..."                            # Or set COOKBOOK_API_KEY
# api_key_header = "API-KEY"
# accept = "application/vnd.mason+json, application/json"
# timeout_secs = 10

# [logging]
# level = "info"                             # "off", "error", "warn", "info", "debug", "trace"
# file = "cookbook.log"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CookbookConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Like [`resolve`] but with an injectable environment lookup.
pub fn resolve_with(
    config: &CookbookConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("COOKBOOK_BASE_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // API key: CLI → env → config
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| env("COOKBOOK_API_KEY"))
        .or_else(|| config.server.api_key.clone())
        .filter(|k| !k.is_empty());

    let timeout_secs = cli
        .timeout_secs
        .or(config.server.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
        .max(1);

    let mut notes = Notes::default();

    // Log level: env → config → info
    let log_level = env("COOKBOOK_LOG")
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                notes.push(Level::Warn, format!("Unknown log level '{level}', using info"));
                None
            }
        })
        .unwrap_or(LevelFilter::Info);

    ResolvedConfig {
        base_url,
        collection_path: config
            .server
            .collection_path
            .clone()
            .unwrap_or_else(|| DEFAULT_COLLECTION_PATH.to_string()),
        api_key,
        api_key_header: config
            .server
            .api_key_header
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string()),
        accept: config
            .server
            .accept
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCEPT.to_string()),
        timeout: Duration::from_secs(timeout_secs),
        log_level,
        log_file: PathBuf::from(
            config
                .logging
                .file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        ),
        notes,
    }
}
