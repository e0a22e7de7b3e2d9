//! Impression/click statistics service.

use std::sync::Arc;

use crate::domain::entities::DailyStatistic;
use crate::domain::entities::statistic::ctr;
use crate::domain::repositories::{StatsRange, StatsRepository};
use crate::error::AppError;

/// Aggregated statistics over a date range: overall totals plus the per-day
/// rows they were computed from, sorted by date ascending.
#[derive(Debug, Clone)]
pub struct StatsSummary {
    pub total_impressions: i64,
    pub total_clicks: i64,
    pub ctr: f64,
    pub daily: Vec<DailyStatistic>,
}

impl StatsSummary {
    fn from_daily(daily: Vec<DailyStatistic>) -> Self {
        let total_impressions = daily.iter().map(|d| d.impressions).sum();
        let total_clicks = daily.iter().map(|d| d.clicks).sum();
        Self {
            total_impressions,
            total_clicks,
            ctr: ctr(total_clicks, total_impressions),
            daily,
        }
    }
}

/// Service for recording and aggregating daily statistics.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Summary for one banner across all its placements.
    ///
    /// Unknown banner ids produce zero totals and an empty daily list, so
    /// dashboards degrade gracefully for entities with no traffic yet.
    pub async fn banner_summary(
        &self,
        banner_id: i64,
        range: StatsRange,
    ) -> Result<StatsSummary, AppError> {
        let daily = self.repository.daily_for_banner(banner_id, range).await?;
        Ok(StatsSummary::from_daily(daily))
    }

    /// Summary for one placement across all its banners.
    pub async fn placement_summary(
        &self,
        placement_id: i64,
        range: StatsRange,
    ) -> Result<StatsSummary, AppError> {
        let daily = self
            .repository
            .daily_for_placement(placement_id, range)
            .await?;
        Ok(StatsSummary::from_daily(daily))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStatsRepository;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn row(day: u32, impressions: i64, clicks: i64) -> DailyStatistic {
        DailyStatistic {
            stat_date: date(day),
            impressions,
            clicks,
        }
    }

    #[tokio::test]
    async fn test_banner_summary_totals_and_ctr() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_daily_for_banner()
            .withf(|id, _| *id == 1)
            .times(1)
            .returning(|_, _| Ok(vec![row(1, 100, 5), row(2, 300, 15)]));

        let service = StatsService::new(Arc::new(mock_repo));
        let summary = service
            .banner_summary(1, StatsRange::default())
            .await
            .unwrap();

        assert_eq!(summary.total_impressions, 400);
        assert_eq!(summary.total_clicks, 20);
        assert_eq!(summary.ctr, 0.05);
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].stat_date, date(1));
    }

    #[tokio::test]
    async fn test_unknown_banner_yields_zero_totals() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_daily_for_banner()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = StatsService::new(Arc::new(mock_repo));
        let summary = service
            .banner_summary(999, StatsRange::default())
            .await
            .unwrap();

        assert_eq!(summary.total_impressions, 0);
        assert_eq!(summary.total_clicks, 0);
        assert_eq!(summary.ctr, 0.0);
        assert!(summary.daily.is_empty());
    }

    #[tokio::test]
    async fn test_placement_summary_with_zero_impression_day() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_daily_for_placement()
            .times(1)
            .returning(|_, _| Ok(vec![row(3, 0, 0)]));

        let service = StatsService::new(Arc::new(mock_repo));
        let summary = service
            .placement_summary(2, StatsRange::default())
            .await
            .unwrap();

        // No division fault on an all-zero day.
        assert_eq!(summary.ctr, 0.0);
        assert_eq!(summary.daily[0].ctr(), 0.0);
    }
}
