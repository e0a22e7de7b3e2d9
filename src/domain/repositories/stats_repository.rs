//! Repository trait for daily impression/click counters.

use crate::domain::entities::DailyStatistic;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Optional inclusive date range for statistics queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl StatsRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// Repository interface for recording and aggregating daily statistics.
///
/// Increments must be atomic at the storage layer: two concurrent events for
/// the same (banner, placement, date) triple must both be reflected. The
/// PostgreSQL implementation uses a single `INSERT ... ON CONFLICT ... DO UPDATE`
/// statement, never a read-modify-write cycle.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Increments the impression counter for the triple, creating the row on
    /// first use.
    async fn record_impression(
        &self,
        banner_id: i64,
        placement_id: i64,
        date: NaiveDate,
    ) -> Result<(), AppError>;

    /// Increments the click counter for the triple, creating the row on
    /// first use.
    async fn record_click(
        &self,
        banner_id: i64,
        placement_id: i64,
        date: NaiveDate,
    ) -> Result<(), AppError>;

    /// Per-day rows for a banner across all placements, sorted by date
    /// ascending. Unknown banner ids yield an empty list, not an error.
    async fn daily_for_banner(
        &self,
        banner_id: i64,
        range: StatsRange,
    ) -> Result<Vec<DailyStatistic>, AppError>;

    /// Per-day rows for a placement across all banners, sorted by date
    /// ascending. Unknown placement ids yield an empty list, not an error.
    async fn daily_for_placement(
        &self,
        placement_id: i64,
        range: StatsRange,
    ) -> Result<Vec<DailyStatistic>, AppError>;
}
