use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use zeb_core::FeedConfig;
use zeb_core::explorer::{ExplorerError, TokenTransferRecord, parse_transfers, tokentx_url};

/// Give up on the explorer after this long
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Fetch the latest transfers for the configured contract
pub async fn fetch_transfers(config: &FeedConfig) -> Result<Vec<TokenTransferRecord>, ExplorerError> {
    let url = tokentx_url(config);

    let send = Box::pin(Request::get(&url).header("Accept", "application/json").send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ExplorerError::Transport(e.to_string())),
        Either::Right(_) => Err(ExplorerError::Transport("request timed out".to_string())),
    };

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch transfers: {}", e).into());
            return Err(e);
        }
    };

    if !response.ok() {
        web_sys::console::error_1(&format!("Explorer API error: {}", response.status()).into());
        return Err(ExplorerError::Transport(format!("explorer returned status {}", response.status())));
    }

    let text = response.text().await.map_err(|e| ExplorerError::Transport(e.to_string()))?;
    parse_transfers(&text).inspect_err(|e| {
        if *e != ExplorerError::NoData {
            web_sys::console::warn_1(&format!("Explorer response rejected: {}", e).into());
        }
    })
}
