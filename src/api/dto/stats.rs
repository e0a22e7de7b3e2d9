//! DTOs for statistics endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::application::services::StatsSummary;
use crate::domain::entities::DailyStatistic;

/// Aggregate totals over the requested range.
#[derive(Debug, Serialize)]
pub struct StatsTotals {
    pub impressions: i64,
    pub clicks: i64,
    pub ctr: f64,
}

/// One day of counters.
#[derive(Debug, Serialize)]
pub struct DailyStatRow {
    pub date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
    pub ctr: f64,
}

impl From<DailyStatistic> for DailyStatRow {
    fn from(day: DailyStatistic) -> Self {
        DailyStatRow {
            date: day.stat_date,
            impressions: day.impressions,
            clicks: day.clicks,
            ctr: day.ctr(),
        }
    }
}

/// Statistics detail for one banner across all its placements.
#[derive(Debug, Serialize)]
pub struct BannerStatisticsDetail {
    pub banner_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub totals: StatsTotals,
    pub daily: Vec<DailyStatRow>,
}

/// Statistics detail for one placement across all its banners.
#[derive(Debug, Serialize)]
pub struct PlacementStatisticsDetail {
    pub placement_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub totals: StatsTotals,
    pub daily: Vec<DailyStatRow>,
}

pub fn totals_from_summary(summary: &StatsSummary) -> StatsTotals {
    StatsTotals {
        impressions: summary.total_impressions,
        clicks: summary.total_clicks,
        ctr: summary.ctr,
    }
}

pub fn daily_from_summary(summary: StatsSummary) -> Vec<DailyStatRow> {
    summary.daily.into_iter().map(Into::into).collect()
}
