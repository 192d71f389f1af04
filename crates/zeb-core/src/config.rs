//! Site content and explorer feed configuration

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Feed Configuration
// =============================================================================

/// BscScan API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.bscscan.com/api";

/// BscScan web UI (token and transaction pages)
pub const DEFAULT_EXPLORER_BASE: &str = "https://bscscan.com";

/// ZCN token contract on BSC
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x32Aa387310D7410Dbe3FE63b18aeD42065E520a0";

/// BscScan's documented placeholder key (heavily rate limited)
pub const DEFAULT_API_KEY: &str = "YourApiKeyToken";

/// Number of transfers requested per fetch
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Seconds between feed refreshes
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page_size must be between 1 and 10000, got {0}")]
    PageSize(u32),
    #[error("refresh_interval_secs must be at least 1")]
    RefreshInterval,
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Injected configuration for the live transfer feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Explorer API endpoint (the `?module=...` query is appended)
    pub api_base: String,
    /// Explorer web UI, used for outbound links
    pub explorer_base: String,
    /// Token contract whose transfers are listed
    pub contract_address: String,
    pub api_key: String,
    /// Transfers per fetch
    pub page_size: u32,
    pub refresh_interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            explorer_base: DEFAULT_EXPLORER_BASE.to_string(),
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl FeedConfig {
    /// Reject values the explorer or the poller cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Empty("api_base"));
        }
        if self.contract_address.trim().is_empty() {
            return Err(ConfigError::Empty("contract_address"));
        }
        // BscScan caps page * offset at 10000
        if self.page_size == 0 || self.page_size > 10_000 {
            return Err(ConfigError::PageSize(self.page_size));
        }
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::RefreshInterval);
        }
        Ok(())
    }

    /// Link to a transaction on the explorer
    pub fn tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_base.trim_end_matches('/'), hash)
    }

    /// Link to the token's overview page on the explorer
    pub fn token_url(&self) -> String {
        format!("{}/token/{}", self.explorer_base.trim_end_matches('/'), self.contract_address)
    }
}

/// Mask API keys in URLs for safe logging
/// Converts "https://example.com/?apikey=SECRET" to "https://example.com/?apikey=****"
pub fn mask_api_key(url: &str) -> String {
    if let Some(idx) = url.find("apikey=") {
        let prefix = &url[..idx + 7];
        let rest = &url[idx + 7..];
        match rest.find('&') {
            Some(end) => format!("{}****{}", prefix, &rest[end..]),
            None => format!("{}****", prefix),
        }
    } else {
        url.to_string()
    }
}

// =============================================================================
// Static Site Content
// =============================================================================

/// Static site configuration
pub struct SiteConfig {
    pub name: &'static str,
    pub symbol: &'static str,
    pub tagline: &'static str,
    pub chain: &'static str,
    pub token_standard: &'static str,

    /// Launch countdown target, RFC 3339. Pinned to UTC so every visitor
    /// and the CLI count down to the same instant.
    pub launch_at: &'static str,

    pub tokenomics: Tokenomics,
    pub links: Links,
}

pub struct Tokenomics {
    pub total_supply: u64,
    pub ido_price_usd: f64,
    pub allocations: &'static [Allocation],
}

/// One slice of the token distribution
pub struct Allocation {
    pub name: &'static str,
    pub percent: u8,
    pub description: &'static str,
}

impl Allocation {
    /// Number of tokens this slice represents
    pub fn tokens(&self, total_supply: u64) -> u64 {
        total_supply / 100 * u64::from(self.percent)
    }
}

pub struct Links {
    pub dex: &'static str,
    pub twitter: &'static str,
    pub telegram: &'static str,
    pub instagram: &'static str,
}

pub static SITE: SiteConfig = SiteConfig {
    name: "ZEBCOIN",
    symbol: "ZCN",
    tagline: "Be Live In Crypto With AI",
    chain: "BNB Smart Chain",
    token_standard: "BEP20",

    launch_at: "2026-01-08T00:00:00Z",

    tokenomics: Tokenomics {
        total_supply: 10_000_000,
        ido_price_usd: 0.30,
        allocations: &[
            Allocation {
                name: "Team & Investors",
                percent: 20,
                description: "Vested over 24 months",
            },
            Allocation {
                name: "IDO Launchpad",
                percent: 80,
                description: "Initial DEX offering",
            },
        ],
    },

    links: Links {
        dex: "https://pancakeswap.finance/swap?outputCurrency=0x32Aa387310D7410Dbe3FE63b18aeD42065E520a0",
        twitter: "https://x.com/zeb_coin",
        telegram: "https://t.me/zebcoin_official",
        instagram: "https://www.instagram.com/zebcoin_official",
    },
};
