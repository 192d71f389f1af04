//! Block-explorer adapter
//!
//! Converts the BscScan-style `tokentx` response into `TokenTransferRecord`s.
//! This is the only place that knows the upstream schema.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::FeedConfig;

/// Message the explorer returns alongside status "0" for an empty history
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response schema: {0}")]
    Schema(String),
    #[error("explorer returned no transactions")]
    NoData,
    #[error("explorer error: {0}")]
    Api(String),
}

/// One token transfer, normalized from the explorer response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransferRecord {
    pub block_number: u64,
    pub from: String,
    pub to: String,
    pub hash: String,
    /// Integer amount in the token's smallest unit
    pub raw_value: String,
    /// Decimals as reported (may be malformed, formatting falls back to 18)
    pub token_decimals: String,
    /// Unix seconds as reported
    pub timestamp: String,
}

/// Raw response envelope
#[derive(Debug, Deserialize)]
struct TokenTxResponse {
    status: String,
    #[serde(default)]
    message: String,
    /// Array of records on success, an error string otherwise
    #[serde(default)]
    result: Value,
}

/// Raw record; every field is a string upstream
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransfer {
    block_number: String,
    from: String,
    to: String,
    hash: String,
    value: String,
    #[serde(default)]
    token_decimal: String,
    time_stamp: String,
}

/// Build the `tokentx` request URL for the configured contract
pub fn tokentx_url(config: &FeedConfig) -> String {
    format!(
        "{}?module=account&action=tokentx&contractaddress={}&page=1&offset={}&sort=desc&apikey={}",
        config.api_base, config.contract_address, config.page_size, config.api_key
    )
}

/// Parse a response body into transfer records
pub fn parse_transfers(body: &str) -> Result<Vec<TokenTransferRecord>, ExplorerError> {
    let response: TokenTxResponse =
        serde_json::from_str(body).map_err(|e| ExplorerError::Schema(e.to_string()))?;

    if response.status != "1" {
        if response.message == NO_TRANSACTIONS_MESSAGE {
            return Err(ExplorerError::NoData);
        }
        let detail = match &response.result {
            Value::String(s) if !s.is_empty() => format!("{} ({})", response.message, s),
            _ => response.message,
        };
        return Err(ExplorerError::Api(detail));
    }

    let raw: Vec<RawTransfer> =
        serde_json::from_value(response.result).map_err(|e| ExplorerError::Schema(e.to_string()))?;

    if raw.is_empty() {
        return Err(ExplorerError::NoData);
    }

    raw.into_iter().map(normalize).collect()
}

fn normalize(raw: RawTransfer) -> Result<TokenTransferRecord, ExplorerError> {
    let block_number = raw
        .block_number
        .parse::<u64>()
        .map_err(|_| ExplorerError::Schema(format!("invalid blockNumber {:?}", raw.block_number)))?;

    if !raw.value.chars().all(|c| c.is_ascii_digit()) || raw.value.is_empty() {
        return Err(ExplorerError::Schema(format!("invalid value {:?}", raw.value)));
    }
    if raw.time_stamp.parse::<i64>().is_err() {
        return Err(ExplorerError::Schema(format!("invalid timeStamp {:?}", raw.time_stamp)));
    }

    Ok(TokenTransferRecord {
        block_number,
        from: raw.from,
        to: raw.to,
        hash: raw.hash,
        raw_value: raw.value,
        token_decimals: raw.token_decimal,
        timestamp: raw.time_stamp,
    })
}

// =============================================================================
// Sample Data
// =============================================================================

const SAMPLE_ADDRESSES: [(&str, &str); 8] = [
    (
        "0x1234567890abcdef1234567890abcdef12345678",
        "0xabcdef1234567890abcdef1234567890abcdef12",
    ),
    (
        "0x2345678901bcdef12345678901bcdef123456789",
        "0xbcdef12345678901bcdef12345678901bcdef1234",
    ),
    (
        "0x3456789012cdef123456789012cdef1234567890",
        "0xcdef123456789012cdef123456789012cdef12345",
    ),
    (
        "0x456789012def1234567890123def12345678901",
        "0xdef1234567890123def1234567890123def123456",
    ),
    (
        "0x56789012ef12345678901234ef123456789012",
        "0xef12345678901234ef12345678901234ef1234567",
    ),
    (
        "0x6789012f123456789012345f1234567890123",
        "0xf123456789012345f123456789012345f12345678",
    ),
    (
        "0x789012a1234567890123456a12345678901234",
        "0xa1234567890123456a1234567890123456a1234567",
    ),
    (
        "0x89012b12345678901234567b123456789012345",
        "0xb12345678901234567b12345678901234567b123456",
    ),
];

/// Whole-token amounts for the sample transfers
const SAMPLE_AMOUNTS: [u64; 8] = [50_000, 125_000, 75_000, 200_000, 30_000, 85_000, 150_000, 42_000];

/// Deterministic stand-in shown whenever live data is unavailable.
/// Records are spaced ten minutes apart ending ten minutes before `now`.
pub fn sample_transfers(now: i64) -> Vec<TokenTransferRecord> {
    SAMPLE_ADDRESSES
        .iter()
        .zip(SAMPLE_AMOUNTS)
        .enumerate()
        .map(|(i, ((from, to), amount))| {
            let i = i as u64;
            TokenTransferRecord {
                block_number: 35_000_000 - i * 10,
                from: from.to_string(),
                to: to.to_string(),
                hash: format!("0x{}abc123def456789abc123def456789abc123def456789abc123def456789abc", i),
                raw_value: format!("{}{}", amount, "0".repeat(18)),
                token_decimals: "18".to_string(),
                timestamp: (now - (i as i64 + 1) * 600).to_string(),
            }
        })
        .collect()
}
