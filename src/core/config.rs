//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.podshelf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Config is read before the logger exists (the log file and level live in
//! the config), so loading and resolution collect `Notice`s that `main`
//! replays once logging is up.

use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::pagination::DEFAULT_PAGE_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PodshelfConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub endpoint: Option<String>,
    pub page_size: Option<usize>,
    pub genre_catalog: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://podcast-api.netlify.app/";
pub const DEFAULT_LOG_FILE: &str = "podshelf.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub page_size: usize,
    /// `None` means the bundled catalog.
    pub genre_catalog: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Catalog(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Catalog(e) => write!(f, "genre catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Deferred log lines
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

fn note(notices: &mut Vec<Notice>, level: Level, message: String) {
    notices.push(Notice { level, message });
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.podshelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".podshelf").join("config.toml"))
}

/// Load config from `~/.podshelf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PodshelfConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notices: &mut Vec<Notice>) -> Result<PodshelfConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            note(
                notices,
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            return Ok(PodshelfConfig::default());
        }
    };
    load_config_from(&path, notices)
}

pub fn load_config_from(
    path: &Path,
    notices: &mut Vec<Notice>,
) -> Result<PodshelfConfig, ConfigError> {
    if !path.exists() {
        note(
            notices,
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, notices);
        return Ok(PodshelfConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PodshelfConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    note(notices, Level::Info, format!("Loaded config from {}", path.display()));
    note(notices, Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notices: &mut Vec<Notice>) {
    let default_content = r#"# Podshelf Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# endpoint = "https://podcast-api.netlify.app/"   # Or PODSHELF_ENDPOINT / --endpoint
# page_size = 12
# genre_catalog = "genres.json"                   # Path relative to ~/.podshelf/; or PODSHELF_GENRES / --genres
# log_file = "podshelf.log"
# log_level = "debug"                             # "error", "warn", "info", "debug", "trace", "off"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            note(notices, Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        note(notices, Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Overrides taken from the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub genre_catalog: Option<PathBuf>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &PodshelfConfig,
    cli: &CliOverrides,
    notices: &mut Vec<Notice>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var("PODSHELF_ENDPOINT").ok())
        .or_else(|| config.general.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Genre catalog: CLI → env → config (relative to ~/.podshelf/) → bundled
    let genre_catalog = cli
        .genre_catalog
        .clone()
        .or_else(|| std::env::var("PODSHELF_GENRES").ok().map(PathBuf::from))
        .or_else(|| config.general.genre_catalog.as_deref().map(config_relative));

    // Page size is fixed for the process; zero would make every page empty
    let page_size = match config.general.page_size {
        Some(0) => {
            note(
                notices,
                Level::Warn,
                format!("page_size = 0 is not usable, falling back to {DEFAULT_PAGE_SIZE}"),
            );
            DEFAULT_PAGE_SIZE
        }
        Some(n) => n,
        None => DEFAULT_PAGE_SIZE,
    };

    ResolvedConfig {
        endpoint,
        page_size,
        genre_catalog,
        log_file: config
            .general
            .log_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        log_level: config
            .general
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}

/// Relative paths in the config file are anchored at `~/.podshelf/`.
fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(".podshelf").join(path),
        None => path,
    }
}
