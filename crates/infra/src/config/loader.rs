//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the account login is missing there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `COMMITGRID_LOGIN`: account whose activity is fetched (required)
//! - `COMMITGRID_EVENT_LIMIT`: records requested per fetch
//! - `COMMITGRID_TIMEOUT_SECS`: request deadline in seconds
//! - `COMMITGRID_TOKEN`: optional API bearer token
//! - `COMMITGRID_WINDOW_DAYS`: trailing window length
//! - `COMMITGRID_LINES_PER_CONTRIBUTION`: lines-of-code display multiplier
//! - `COMMITGRID_CACHE_TTL_SECS`: snapshot freshness horizon
//! - `COMMITGRID_CACHE_MAX_BYTES`: serialized snapshot size bound
//! - `COMMITGRID_LEVEL_PROFILE`: leveling thresholds, `coarse` or `fine`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./commitgrid.json` or `./commitgrid.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use commitgrid_domain::{CommitGridError, Config, LevelThresholds, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// login is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `CommitGridError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails to parse
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `COMMITGRID_LOGIN` is required; every other variable falls back to the
/// domain default when unset.
///
/// # Errors
/// Returns `CommitGridError::Config` if the login is missing or any set
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.source.login = env_var("COMMITGRID_LOGIN")?;
    if let Some(limit) = env_parse::<usize>("COMMITGRID_EVENT_LIMIT")? {
        config.source.event_limit = limit;
    }
    if let Some(timeout) = env_parse::<u64>("COMMITGRID_TIMEOUT_SECS")? {
        config.source.timeout_secs = timeout;
    }
    config.source.token = std::env::var("COMMITGRID_TOKEN").ok();

    if let Some(days) = env_parse::<u32>("COMMITGRID_WINDOW_DAYS")? {
        config.window.length_days = days;
    }
    if let Some(lines) = env_parse::<u32>("COMMITGRID_LINES_PER_CONTRIBUTION")? {
        config.window.lines_per_contribution = lines;
    }

    if let Some(ttl) = env_parse::<u64>("COMMITGRID_CACHE_TTL_SECS")? {
        config.cache.ttl_secs = ttl;
    }
    if let Some(max_bytes) = env_parse::<usize>("COMMITGRID_CACHE_MAX_BYTES")? {
        config.cache.max_entry_bytes = max_bytes;
    }

    if let Ok(profile) = std::env::var("COMMITGRID_LEVEL_PROFILE") {
        config.levels = LevelThresholds::from_profile_name(&profile)?;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CommitGridError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CommitGridError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CommitGridError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CommitGridError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CommitGridError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CommitGridError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CommitGridError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("commitgrid.json"),
            cwd.join("commitgrid.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("commitgrid.json"),
                exe_dir.join("commitgrid.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CommitGridError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional environment variable
///
/// Returns `Ok(None)` when the variable is unset, an error when it is set
/// but does not parse.
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|e| {
            CommitGridError::Config(format!("Invalid value for {key}: {e}"))
        }),
        Err(_) => Ok(None),
    }
}
