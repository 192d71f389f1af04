//! Core logic for the ZEBCOIN site
//!
//! Everything here is host-agnostic: the web crate drives it from the browser
//! event loop and the CLI drives it from a tokio runtime.

pub mod config;
pub mod countdown;
pub mod explorer;
pub mod feed;
pub mod format;
pub mod staking;
pub mod ticker;

pub use config::{ConfigError, FeedConfig, SITE, SiteConfig};
pub use explorer::{ExplorerError, TokenTransferRecord};
pub use feed::{FeedSource, FeedState, FetchTicket, TransferFeed};
pub use staking::{STAKING_TIERS, StakingQuote, StakingTier, estimate};
