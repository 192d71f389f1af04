//! Live transfer feed state machine
//!
//! Idle -> Fetching -> Ready, re-entering Fetching on every refresh tick until
//! the feed is torn down. The feed never shows an error: any failed or empty
//! fetch is replaced by the sample dataset, and `FeedSource` records why.

use crate::explorer::{ExplorerError, TokenTransferRecord, sample_transfers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Fetching,
    Ready,
    TornDown,
}

/// Where the currently displayed transfers came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Live,
    /// Sample data substituted because the fetch failed or came back empty
    Sample(ExplorerError),
}

/// Handle for one fetch; only the newest ticket may update the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
pub struct TransferFeed {
    state: FeedState,
    transfers: Vec<TokenTransferRecord>,
    source: Option<FeedSource>,
    latest_ticket: u64,
    /// Unix seconds of the last applied fetch
    updated_at: Option<i64>,
}

impl Default for TransferFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Idle,
            transfers: Vec::new(),
            source: None,
            latest_ticket: 0,
            updated_at: None,
        }
    }

    /// Start a fetch. Returns `None` once the feed has been torn down.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.state == FeedState::TornDown {
            return None;
        }
        self.latest_ticket += 1;
        self.state = FeedState::Fetching;
        Some(FetchTicket(self.latest_ticket))
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` if the result was discarded, either because a newer
    /// fetch has started since or because the feed was torn down.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<TokenTransferRecord>, ExplorerError>,
        now: i64,
    ) -> bool {
        if self.state == FeedState::TornDown {
            tracing::debug!("Ignoring fetch #{} after teardown", ticket.0);
            return false;
        }
        if ticket.0 != self.latest_ticket {
            tracing::debug!("Ignoring stale fetch #{} (latest is #{})", ticket.0, self.latest_ticket);
            return false;
        }

        match result {
            Ok(transfers) if !transfers.is_empty() => {
                tracing::debug!("Fetched {} transfers", transfers.len());
                self.transfers = transfers;
                self.source = Some(FeedSource::Live);
            }
            other => {
                let reason = other.err().unwrap_or(ExplorerError::NoData);
                if reason == ExplorerError::NoData {
                    tracing::info!("No transfers on record, showing sample data");
                } else {
                    tracing::warn!("Failed to fetch transfers: {}. Showing sample data", reason);
                }
                self.transfers = sample_transfers(now);
                self.source = Some(FeedSource::Sample(reason));
            }
        }

        self.updated_at = Some(now);
        self.state = FeedState::Ready;
        true
    }

    /// Stop the feed for good; later completions are ignored
    pub fn teardown(&mut self) {
        self.state = FeedState::TornDown;
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn transfers(&self) -> &[TokenTransferRecord] {
        &self.transfers
    }

    pub fn source(&self) -> Option<&FeedSource> {
        self.source.as_ref()
    }

    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    /// True while a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.state == FeedState::Fetching
    }

    /// True when the displayed list is sample data
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, Some(FeedSource::Sample(_)))
    }
}
