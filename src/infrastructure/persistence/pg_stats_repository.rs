//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DailyStatistic;
use crate::domain::repositories::{StatsRange, StatsRepository};
use crate::error::AppError;

/// Per-day aggregate row produced by the summary queries.
#[derive(sqlx::FromRow)]
struct DailyRow {
    stat_date: NaiveDate,
    impressions: i64,
    clicks: i64,
}

impl From<DailyRow> for DailyStatistic {
    fn from(row: DailyRow) -> Self {
        DailyStatistic {
            stat_date: row.stat_date,
            impressions: row.impressions,
            clicks: row.clicks,
        }
    }
}

/// PostgreSQL repository for daily impression/click counters.
///
/// Increments are single `INSERT ... ON CONFLICT ... DO UPDATE` statements, so
/// concurrent events for the same (banner, placement, day) triple are both
/// reflected; there is no read-modify-write window to race through.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn daily_by(
        &self,
        key_column: &'static str,
        key: i64,
        range: StatsRange,
    ) -> Result<Vec<DailyStatistic>, AppError> {
        let sql = format!(
            "SELECT stat_date, \
                    SUM(impressions)::bigint AS impressions, \
                    SUM(clicks)::bigint AS clicks \
             FROM daily_statistics \
             WHERE {key_column} = $1 \
               AND ($2::date IS NULL OR stat_date >= $2) \
               AND ($3::date IS NULL OR stat_date <= $3) \
             GROUP BY stat_date \
             ORDER BY stat_date ASC"
        );

        let rows: Vec<DailyRow> = sqlx::query_as(&sql)
            .bind(key)
            .bind(range.start_date)
            .bind(range.end_date)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_impression(
        &self,
        banner_id: i64,
        placement_id: i64,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO daily_statistics \
             (banner_id, placement_id, stat_date, impressions, clicks) \
             VALUES ($1, $2, $3, 1, 0) \
             ON CONFLICT (banner_id, placement_id, stat_date) \
             DO UPDATE SET impressions = daily_statistics.impressions + 1",
        )
        .bind(banner_id)
        .bind(placement_id)
        .bind(date)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn record_click(
        &self,
        banner_id: i64,
        placement_id: i64,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO daily_statistics \
             (banner_id, placement_id, stat_date, impressions, clicks) \
             VALUES ($1, $2, $3, 0, 1) \
             ON CONFLICT (banner_id, placement_id, stat_date) \
             DO UPDATE SET clicks = daily_statistics.clicks + 1",
        )
        .bind(banner_id)
        .bind(placement_id)
        .bind(date)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn daily_for_banner(
        &self,
        banner_id: i64,
        range: StatsRange,
    ) -> Result<Vec<DailyStatistic>, AppError> {
        self.daily_by("banner_id", banner_id, range).await
    }

    async fn daily_for_placement(
        &self,
        placement_id: i64,
        range: StatsRange,
    ) -> Result<Vec<DailyStatistic>, AppError> {
        self.daily_by("placement_id", placement_id, range).await
    }
}
