//! Build-time configuration for the browser build
//!
//! The explorer key and contract can be supplied when compiling:
//! `ZEB_EXPLORER_API_KEY=... trunk build --release`

use zeb_core::FeedConfig;

/// Feed configuration with any build-time overrides applied
pub fn feed_config() -> FeedConfig {
    with_overrides(
        option_env!("ZEB_EXPLORER_API_KEY"),
        option_env!("ZEB_CONTRACT_ADDRESS"),
        option_env!("ZEB_EXPLORER_API_BASE"),
    )
}

fn with_overrides(api_key: Option<&str>, contract: Option<&str>, api_base: Option<&str>) -> FeedConfig {
    let mut config = FeedConfig::default();
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        config.api_key = key.to_string();
    }
    if let Some(contract) = contract.filter(|c| !c.is_empty()) {
        config.contract_address = contract.to_string();
    }
    if let Some(base) = api_base.filter(|b| !b.is_empty()) {
        config.api_base = base.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let config = with_overrides(Some("KEY"), None, Some("https://api-testnet.bscscan.com/api"));
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.api_base, "https://api-testnet.bscscan.com/api");
        assert_eq!(config.contract_address, FeedConfig::default().contract_address);
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        assert_eq!(with_overrides(Some(""), Some(""), None), FeedConfig::default());
    }
}
