//! Periodic refresh loop for the transfer feed

use chrono::Utc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use zeb_core::{FeedConfig, TransferFeed};

use crate::client::TransferSource;

/// Fetch once and apply the result
pub async fn refresh_once<S: TransferSource>(source: &S, feed: &mut TransferFeed) -> bool {
    let Some(ticket) = feed.begin_fetch() else {
        return false;
    };
    let result = source.fetch().await;
    feed.complete(ticket, result, Utc::now().timestamp())
}

/// Poll `source` every `refresh_interval_secs` until `shutdown` flips to true
/// (or its sender is dropped). `on_update` runs after every applied fetch.
///
/// Returns the torn-down feed with the last list it displayed.
pub async fn run<S, F>(source: &S, config: &FeedConfig, mut shutdown: watch::Receiver<bool>, mut on_update: F) -> TransferFeed
where
    S: TransferSource,
    F: FnMut(&TransferFeed),
{
    let mut feed = TransferFeed::new();
    let mut ticker = interval(Duration::from_secs(config.refresh_interval_secs));
    // A slow fetch pushes the next one back instead of firing a burst
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!("Polling transfers every {}s", config.refresh_interval_secs);

    while !*shutdown.borrow() {
        tokio::select! {
            biased;
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                let Some(ticket) = feed.begin_fetch() else {
                    break;
                };
                let result = tokio::select! {
                    biased;
                    _ = shutdown.changed() => break,
                    result = source.fetch() => result,
                };
                if feed.complete(ticket, result, Utc::now().timestamp()) {
                    on_update(&feed);
                }
            }
        }
    }

    feed.teardown();
    tracing::info!("Transfer feed stopped");
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use zeb_core::explorer::{ExplorerError, TokenTransferRecord};
    use zeb_core::{FeedSource, FeedState};

    /// Source that replays a fixed script of results
    struct ScriptedSource {
        script: RefCell<VecDeque<Result<Vec<TokenTransferRecord>, ExplorerError>>>,
        calls: Cell<usize>,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<Vec<TokenTransferRecord>, ExplorerError>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl TransferSource for ScriptedSource {
        async fn fetch(&self) -> Result<Vec<TokenTransferRecord>, ExplorerError> {
            self.calls.set(self.calls.get() + 1);
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ExplorerError::Transport("script exhausted".to_string())))
        }
    }

    fn record(hash: &str) -> TokenTransferRecord {
        TokenTransferRecord {
            block_number: 1,
            from: "0x1111111111111111111111111111111111111111".to_string(),
            to: "0x2222222222222222222222222222222222222222".to_string(),
            hash: hash.to_string(),
            raw_value: "5000000000000000000000".to_string(),
            token_decimals: "18".to_string(),
            timestamp: "1767225600".to_string(),
        }
    }

    #[tokio::test]
    async fn test_refresh_once_network_error_uses_sample() {
        let source = ScriptedSource::new(vec![Err(ExplorerError::Transport("offline".to_string()))]);
        let mut feed = TransferFeed::new();

        assert!(refresh_once(&source, &mut feed).await);
        assert!(!feed.transfers().is_empty());
        assert!(feed.is_degraded());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_polls_until_shutdown() {
        let source = ScriptedSource::new(vec![
            Err(ExplorerError::Transport("offline".to_string())),
            Ok(vec![record("0xa")]),
            Ok(vec![record("0xb"), record("0xc")]),
        ]);
        let config = FeedConfig::default();
        let (tx, rx) = watch::channel(false);

        let mut seen = Vec::new();
        let feed = run(&source, &config, rx, |feed| {
            seen.push((feed.transfers().len(), feed.is_degraded()));
            if seen.len() == 3 {
                let _ = tx.send(true);
            }
        })
        .await;

        assert_eq!(source.calls.get(), 3);
        assert!(seen[0].1);
        assert_eq!(seen[1], (1, false));
        assert_eq!(seen[2], (2, false));
        assert_eq!(feed.state(), FeedState::TornDown);
        assert_eq!(feed.source(), Some(&FeedSource::Live));
        assert_eq!(feed.transfers()[0].hash, "0xb");
    }

    /// Source that records when each fetch happened
    #[derive(Default)]
    struct TimedSource {
        fetched_at: RefCell<Vec<tokio::time::Instant>>,
    }

    impl TransferSource for TimedSource {
        async fn fetch(&self) -> Result<Vec<TokenTransferRecord>, ExplorerError> {
            self.fetched_at.borrow_mut().push(tokio::time::Instant::now());
            Ok(vec![record("0xa")])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_refetches_every_interval() {
        let source = TimedSource::default();
        let config = FeedConfig::default();
        let (tx, rx) = watch::channel(false);

        let mut updates = 0;
        run(&source, &config, rx, |_| {
            updates += 1;
            if updates == 3 {
                let _ = tx.send(true);
            }
        })
        .await;

        let fetched_at = source.fetched_at.borrow();
        assert_eq!(fetched_at.len(), 3);
        for pair in fetched_at.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::from_secs(config.refresh_interval_secs));
        }
        assert_eq!(config.refresh_interval_secs, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fetch_after_shutdown() {
        let source = ScriptedSource::new(vec![Ok(vec![record("0xa")])]);
        let config = FeedConfig::default();
        let (tx, rx) = watch::channel(true);

        let feed = run(&source, &config, rx, |_| {}).await;
        drop(tx);

        tokio::time::advance(Duration::from_secs(120)).await;
        assert_eq!(source.calls.get(), 0);
        assert!(feed.transfers().is_empty());
        assert_eq!(feed.state(), FeedState::TornDown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_stops_loop() {
        let source = ScriptedSource::new(vec![Ok(vec![record("0xa")])]);
        let config = FeedConfig::default();
        let (tx, rx) = watch::channel(false);

        let mut tx = Some(tx);
        let feed = run(&source, &config, rx, |_| {
            tx.take();
        })
        .await;

        assert_eq!(source.calls.get(), 1);
        assert_eq!(feed.transfers()[0].hash, "0xa");
    }
}
