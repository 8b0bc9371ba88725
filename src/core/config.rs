//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bookhive/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The resolved API base URL is threaded explicitly into the catalog client;
//! nothing outside this module reads the environment.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookhiveConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrowseConfig {
    /// Page size for search results.
    pub page_limit: Option<i64>,
    /// Number of books shown in the Popular Books section.
    pub popular_limit: Option<i64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4500/api";
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const DEFAULT_POPULAR_LIMIT: i64 = 12;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub page_limit: i64,
    pub popular_limit: i64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bookhive/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bookhive").join("config.toml"))
}

/// Load config from `~/.bookhive/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BookhiveConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BookhiveConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BookhiveConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BookhiveConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BookhiveConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# BookHive Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:4500/api"   # Or set BOOKHIVE_API_URL env var

# [browse]
# page_limit = 10        # Page size for search results
# popular_limit = 12     # Books shown in the Popular Books section
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_url` is from the `--api-url` flag (None = not specified).
pub fn resolve(config: &BookhiveConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BOOKHIVE_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    ResolvedConfig {
        api_base_url,
        page_limit: config.browse.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        popular_limit: config.browse.popular_limit.unwrap_or(DEFAULT_POPULAR_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = BookhiveConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.browse.page_limit.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = BookhiveConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.page_limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(resolved.popular_limit, DEFAULT_POPULAR_LIMIT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BookhiveConfig {
            api: ApiConfig {
                base_url: Some("https://books.example.com/api".to_string()),
            },
            browse: BrowseConfig {
                page_limit: Some(25),
                popular_limit: Some(8),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_base_url, "https://books.example.com/api");
        assert_eq!(resolved.page_limit, 25);
        assert_eq!(resolved.popular_limit, 8);
    }

    #[test]
    fn test_resolve_cli_url_wins() {
        let config = BookhiveConfig {
            api: ApiConfig {
                base_url: Some("https://from-file.example.com".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://127.0.0.1:9000/api"));
        assert_eq!(resolved.api_base_url, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[browse]
page_limit = 5
"#;
        let config: BookhiveConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.browse.page_limit, Some(5));
        assert!(config.browse.popular_limit.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://localhost:4500/api"

[browse]
page_limit = 10
popular_limit = 12
"#;
        let config: BookhiveConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:4500/api")
        );
        assert_eq!(config.browse.popular_limit, Some(12));
    }
}
