//! Explorer HTTP client
//!
//! Transport failures are retried with exponential backoff. Whatever comes
//! back is handed to the core adapter for normalization.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use zeb_core::FeedConfig;
use zeb_core::config::mask_api_key;
use zeb_core::explorer::{ExplorerError, TokenTransferRecord, parse_transfers, tokentx_url};

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Attempts per fetch, including the first
const MAX_RETRIES: u32 = 3;

/// Anything that can produce the latest transfers
pub trait TransferSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<TokenTransferRecord>, ExplorerError>>;
}

/// Fetches transfers from a BscScan-compatible API
pub struct ExplorerClient {
    http: reqwest::Client,
    url: String,
}

impl ExplorerClient {
    pub fn new(config: &FeedConfig) -> Result<Self, ExplorerError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ExplorerError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            url: tokentx_url(config),
        })
    }

    /// Fetch the raw response body, retrying transport failures
    async fn fetch_body(&self) -> Result<String, ExplorerError> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                sleep(backoff_delay(attempt)).await;
            }

            match self.http.get(&self.url).header("Accept", "application/json").send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.text().await.map_err(|e| ExplorerError::Transport(e.to_string()));
                    }
                    if status.as_u16() == 429 {
                        // Rate limited - always retry
                        last_error = Some(ExplorerError::Transport("rate limited (429)".to_string()));
                        continue;
                    }
                    if status.is_client_error() {
                        // Retrying won't fix a bad request
                        return Err(ExplorerError::Transport(format!("explorer returned status {}", status)));
                    }
                    last_error = Some(ExplorerError::Transport(format!("explorer returned status {}", status)));
                }
                Err(e) => {
                    last_error = Some(ExplorerError::Transport(format!("request failed: {}", e)));
                }
            }

            tracing::debug!("Attempt {}/{} failed for {}", attempt + 1, MAX_RETRIES, mask_api_key(&self.url));
        }

        Err(last_error
            .unwrap_or_else(|| ExplorerError::Transport(format!("failed after {} retries", MAX_RETRIES))))
    }
}

impl TransferSource for ExplorerClient {
    async fn fetch(&self) -> Result<Vec<TokenTransferRecord>, ExplorerError> {
        tracing::debug!("GET {}", mask_api_key(&self.url));
        let body = self.fetch_body().await?;
        parse_transfers(&body)
    }
}

/// Delay before retry `attempt` (1-based): 2s, 4s, 8s...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt))
}
