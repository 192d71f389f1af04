//! Configuration for the transfer feed CLI
//!
//! Precedence, lowest first: built-in defaults, `config.toml`, environment,
//! command-line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use zeb_core::FeedConfig;

/// Configuration loaded from config.toml
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub feed: FeedConfig,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Incorrect data types (strings vs numbers)\n\
             - Keys outside the [feed] table"
        })
    }
}

/// Command-line (and environment) overrides for the feed
#[derive(Debug, Default, Clone)]
pub struct FeedOverrides {
    pub api_base: Option<String>,
    pub contract_address: Option<String>,
    pub api_key: Option<String>,
    pub refresh_interval_secs: Option<u64>,
}

/// Merge file config with overrides and validate the result
pub fn resolve(file: FileConfig, overrides: FeedOverrides) -> Result<FeedConfig> {
    let mut config = file.feed;

    if let Some(api_base) = overrides.api_base {
        config.api_base = api_base;
    }
    if let Some(contract) = overrides.contract_address {
        config.contract_address = contract;
    }
    if let Some(key) = overrides.api_key {
        config.api_key = key;
    }
    if let Some(secs) = overrides.refresh_interval_secs {
        config.refresh_interval_secs = secs;
    }

    config.validate().context("Invalid feed configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeb_core::config::{DEFAULT_API_KEY, DEFAULT_CONTRACT_ADDRESS};

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = FileConfig::parse("").unwrap();
        assert_eq!(file.feed, FeedConfig::default());
    }

    #[test]
    fn test_partial_feed_table() {
        let file = FileConfig::parse(
            r#"
            [feed]
            api_key = "from-file"
            refresh_interval_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(file.feed.api_key, "from-file");
        assert_eq!(file.feed.refresh_interval_secs, 60);
        assert_eq!(file.feed.contract_address, DEFAULT_CONTRACT_ADDRESS);
        assert_eq!(file.feed.page_size, 15);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(FileConfig::parse("[feed\napi_key = ").is_err());
        assert!(FileConfig::parse("[feed]\npage_size = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let file = FileConfig::load_or_default(Path::new("/nonexistent/zeb/config.toml")).unwrap();
        assert_eq!(file.feed.api_key, DEFAULT_API_KEY);
    }

    #[test]
    fn test_overrides_win() {
        let file = FileConfig::parse("[feed]\napi_key = \"from-file\"").unwrap();
        let overrides = FeedOverrides {
            api_key: Some("from-cli".to_string()),
            refresh_interval_secs: Some(5),
            ..Default::default()
        };
        let config = resolve(file, overrides).unwrap();
        assert_eq!(config.api_key, "from-cli");
        assert_eq!(config.refresh_interval_secs, 5);
    }

    #[test]
    fn test_resolve_validates() {
        let overrides = FeedOverrides {
            refresh_interval_secs: Some(0),
            ..Default::default()
        };
        assert!(resolve(FileConfig::default(), overrides).is_err());
    }
}
