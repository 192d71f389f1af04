//! ZEBCOIN terminal front-end
//!
//! Staking quotes, the tier table, the launch countdown and a live view of
//! on-chain ZCN transfers, all driven by `zeb-core`.

mod client;
mod config;
mod poller;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use zeb_core::countdown::{pad2, parse_target, time_left};
use zeb_core::format::{format_address, format_relative_time_at, format_token_amount};
use zeb_core::staking::{DEFAULT_TIER_INDEX, format_quantity, tier_for_days, try_parse_principal};
use zeb_core::{FeedSource, SITE, STAKING_TIERS, TransferFeed, estimate};

use client::ExplorerClient;
use config::{FeedOverrides, FileConfig};

#[derive(Parser, Debug)]
#[command(name = "zeb-feed")]
#[command(about = "ZEBCOIN staking quotes and live token transfers")]
struct Args {
    /// Path to config.toml (optional)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate staking rewards
    Quote {
        /// Amount of ZCN to stake (unparseable input counts as 0)
        #[arg(short, long)]
        amount: String,

        /// Lock period in days (30, 90, 180 or 365)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// List the available staking tiers
    Tiers,

    /// Show recent token transfers, refreshing periodically
    Watch {
        /// Fetch once and exit
        #[arg(long)]
        once: bool,

        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Time left until launch
    Countdown,
}

#[derive(ClapArgs, Debug)]
struct FeedArgs {
    /// Explorer API key
    #[arg(long, env = "ZEB_EXPLORER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Explorer API endpoint
    #[arg(long)]
    api_base: Option<String>,

    /// Token contract address
    #[arg(long)]
    contract: Option<String>,

    /// Seconds between refreshes
    #[arg(long)]
    interval: Option<u64>,
}

impl From<FeedArgs> for FeedOverrides {
    fn from(args: FeedArgs) -> Self {
        Self {
            api_base: args.api_base,
            contract_address: args.contract,
            api_key: args.api_key,
            refresh_interval_secs: args.interval,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Quote { amount, days } => handle_quote(&amount, days),
        Command::Tiers => {
            print_tiers();
            Ok(())
        }
        Command::Watch { once, feed } => handle_watch(&args.config, once, feed.into()).await,
        Command::Countdown => handle_countdown(),
    }
}

/// Print a staking estimate
fn handle_quote(amount: &str, days: Option<u32>) -> Result<()> {
    let tier = match days {
        Some(days) => tier_for_days(days).with_context(|| {
            let options: Vec<String> = STAKING_TIERS.iter().map(|t| t.lock_days.to_string()).collect();
            format!("No staking tier for {} days. Available: {}", days, options.join(", "))
        })?,
        None => &STAKING_TIERS[DEFAULT_TIER_INDEX],
    };

    let principal = try_parse_principal(amount).unwrap_or_else(|| {
        tracing::warn!("Could not read {:?} as an amount, quoting 0", amount);
        0.0
    });

    let quote = estimate(principal, tier);

    println!(
        "Staking {} {} for {} days at {:.0}% APY",
        format_quantity(principal),
        SITE.symbol,
        quote.lock_days,
        tier.apy_percent()
    );
    println!("  Reward: +{} {}", format_quantity(quote.reward), SITE.symbol);
    println!("  Total:  {} {}", format_quantity(quote.total), SITE.symbol);
    Ok(())
}

fn print_tiers() {
    println!("{:<10} {:>6}", "LOCK", "APY");
    for tier in &STAKING_TIERS {
        println!("{:<10} {:>5.0}%", tier.label, tier.apy_percent());
    }
}

fn handle_countdown() -> Result<()> {
    let target = parse_target(SITE.launch_at).with_context(|| format!("Invalid launch date: {}", SITE.launch_at))?;
    let left = time_left(target, Utc::now());

    if left.is_zero() {
        println!("{} has launched.", SITE.name);
        return Ok(());
    }

    let parts: Vec<String> = left
        .units()
        .iter()
        .map(|(label, value)| format!("{} {}", pad2(*value), label))
        .collect();
    println!("{} launches in {}", SITE.name, parts.join(" : "));
    Ok(())
}

/// Fetch and print transfers, once or until Ctrl-C
async fn handle_watch(config_path: &std::path::Path, once: bool, overrides: FeedOverrides) -> Result<()> {
    let file_config = FileConfig::load_or_default(config_path)?;
    let config = config::resolve(file_config, overrides)?;
    let client = ExplorerClient::new(&config).context("Failed to build HTTP client")?;

    println!("Token: {}\n", config.token_url());

    if once {
        let mut feed = TransferFeed::new();
        poller::refresh_once(&client, &mut feed).await;
        print_feed(&feed);
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    poller::run(&client, &config, shutdown_rx, print_feed).await;
    Ok(())
}

fn print_feed(feed: &TransferFeed) {
    let now = Utc::now().timestamp();

    match feed.source() {
        Some(FeedSource::Live) => println!("=== LIVE ({} transfers) ===", feed.transfers().len()),
        Some(FeedSource::Sample(reason)) => println!("=== SAMPLE DATA ({}) ===", reason),
        None => return,
    }

    for t in feed.transfers() {
        println!(
            "{:>10} {}  {} -> {}  {:>8}",
            format_token_amount(&t.raw_value, &t.token_decimals),
            SITE.symbol,
            format_address(&t.from),
            format_address(&t.to),
            format_relative_time_at(&t.timestamp, now),
        );
    }
    println!();
}
