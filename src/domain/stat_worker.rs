//! Background worker persisting impression/click events.
//!
//! Events arrive over a bounded channel from the serve and click handlers.
//! Each write is retried a bounded number of times on failure before the
//! event is logged and dropped; statistics are best-effort by design and a
//! lost event never affects page rendering.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use crate::domain::repositories::StatsRepository;
use crate::domain::stat_event::{StatEvent, StatKind};

/// Delay between write retries.
const RETRY_INTERVAL: Duration = Duration::from_millis(200);

/// Consumes stat events until the channel closes.
///
/// `max_retries` counts attempts after the first; `max_retries = 2` means at
/// most three writes per event.
pub async fn run_stat_worker(
    mut rx: mpsc::Receiver<StatEvent>,
    repository: Arc<dyn StatsRepository>,
    max_retries: usize,
) {
    tracing::info!("Stat worker started");

    while let Some(event) = rx.recv().await {
        let strategy = FixedInterval::new(RETRY_INTERVAL).take(max_retries);

        let result = Retry::spawn(strategy, || async {
            match event.kind {
                StatKind::Impression => {
                    repository
                        .record_impression(event.banner_id, event.placement_id, event.occurred_on)
                        .await
                }
                StatKind::Click => {
                    repository
                        .record_click(event.banner_id, event.placement_id, event.occurred_on)
                        .await
                }
            }
        })
        .await;

        match (&result, event.kind) {
            (Ok(()), StatKind::Impression) => counter!("stats_impressions_recorded").increment(1),
            (Ok(()), StatKind::Click) => counter!("stats_clicks_recorded").increment(1),
            (Err(e), _) => {
                counter!("stats_events_dropped").increment(1);
                tracing::warn!(
                    banner_id = event.banner_id,
                    placement_id = event.placement_id,
                    "Dropping stat event after retries: {e:?}"
                );
            }
        }
    }

    tracing::info!("Stat worker stopped (channel closed)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStatsRepository;
    use crate::error::AppError;
    use chrono::NaiveDate;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[tokio::test]
    async fn test_worker_records_impressions_and_clicks() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_record_impression()
            .withf(|banner, placement, _| *banner == 1 && *placement == 2)
            .times(1)
            .returning(|_, _, _| Ok(()));
        mock_repo
            .expect_record_click()
            .withf(|banner, placement, _| *banner == 1 && *placement == 2)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let (tx, rx) = mpsc::channel(10);
        tx.send(StatEvent::impression(1, 2, day())).await.unwrap();
        tx.send(StatEvent::click(1, 2, day())).await.unwrap();
        drop(tx);

        run_stat_worker(rx, Arc::new(mock_repo), 0).await;
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failures() {
        let mut mock_repo = MockStatsRepository::new();
        let mut attempts = 0;
        mock_repo
            .expect_record_impression()
            .times(2)
            .returning(move |_, _, _| {
                attempts += 1;
                if attempts == 1 {
                    Err(AppError::internal("Database error", json!({})))
                } else {
                    Ok(())
                }
            });

        let (tx, rx) = mpsc::channel(10);
        tx.send(StatEvent::impression(5, 6, day())).await.unwrap();
        drop(tx);

        run_stat_worker(rx, Arc::new(mock_repo), 2).await;
    }

    #[tokio::test]
    async fn test_worker_drops_event_after_exhausted_retries() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_record_click()
            .times(2)
            .returning(|_, _, _| Err(AppError::internal("Database error", json!({}))));

        let (tx, rx) = mpsc::channel(10);
        tx.send(StatEvent::click(5, 6, day())).await.unwrap();
        drop(tx);

        // Must terminate normally despite the persistent failure.
        run_stat_worker(rx, Arc::new(mock_repo), 1).await;
    }
}
