//! Handlers for statistics endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::DateRangeParams;
use crate::api::dto::stats::{
    BannerStatisticsDetail, PlacementStatisticsDetail, daily_from_summary, totals_from_summary,
};
use crate::domain::repositories::StatsRange;
use crate::error::AppError;
use crate::state::AppState;

/// Returns impression/click totals and a per-day breakdown for a banner,
/// aggregated across all its placements.
///
/// # Endpoint
///
/// `GET /api/statistics/banners/{id}?start_date=&end_date=`
///
/// # Behavior
///
/// A banner with no recorded activity (including an id that never existed)
/// yields zero totals and an empty daily list rather than an error.
pub async fn banner_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<BannerStatisticsDetail>, AppError> {
    params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let range = StatsRange::new(params.start_date, params.end_date);
    let summary = state.stats_service.banner_summary(id, range).await?;

    Ok(Json(BannerStatisticsDetail {
        banner_id: id,
        start_date: params.start_date,
        end_date: params.end_date,
        totals: totals_from_summary(&summary),
        daily: daily_from_summary(summary),
    }))
}

/// Returns impression/click totals and a per-day breakdown for a placement,
/// aggregated across all its banners.
///
/// # Endpoint
///
/// `GET /api/statistics/placements/{id}?start_date=&end_date=`
pub async fn placement_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<PlacementStatisticsDetail>, AppError> {
    params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let range = StatsRange::new(params.start_date, params.end_date);
    let summary = state.stats_service.placement_summary(id, range).await?;

    Ok(Json(PlacementStatisticsDetail {
        placement_id: id,
        start_date: params.start_date,
        end_date: params.end_date,
        totals: totals_from_summary(&summary),
        daily: daily_from_summary(summary),
    }))
}
