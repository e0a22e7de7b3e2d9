//! Handlers for banner management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::banner::{
    BannerListResponse, BannerPayload, BannerResponse, BannerUpdatePayload,
};
use crate::api::dto::pagination::{BannerListParams, PaginationMeta};
use crate::error::AppError;
use crate::state::AppState;

/// Lists banners with pagination, status filter and ordering.
///
/// # Endpoint
///
/// `GET /api/banners`
///
/// # Query Parameters
///
/// - `page` / `per_page` - pagination (defaults: 1 / 20, max per_page 100)
/// - `status` - filter by stored status (`active`, `paused`, `scheduled`)
/// - `orderby` - `id`, `title`, `created_at` or `weight` (default: `id`)
/// - `order` - `asc` or `desc` (default: `asc`)
pub async fn list_banners_handler(
    State(state): State<AppState>,
    Query(params): Query<BannerListParams>,
) -> Result<Json<BannerListResponse>, AppError> {
    let (page, per_page) = params
        .pagination
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (banners, total_items) = state
        .banner_service
        .list_banners(page, per_page, params.filter())
        .await?;

    Ok(Json(BannerListResponse {
        pagination: PaginationMeta::new(page, per_page, total_items),
        items: banners.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a banner.
///
/// # Endpoint
///
/// `POST /api/banners`
///
/// # Errors
///
/// Returns 400 Bad Request for a missing title/desktop_url, an invalid URL
/// or an inverted scheduling window.
pub async fn create_banner_handler(
    State(state): State<AppState>,
    Json(payload): Json<BannerPayload>,
) -> Result<(StatusCode, Json<BannerResponse>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid banner payload", json!({ "errors": e.to_string() })))?;

    let banner = state.banner_service.create_banner(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(banner.into())))
}

/// Retrieves a single banner.
///
/// # Endpoint
///
/// `GET /api/banners/{id}`
pub async fn get_banner_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BannerResponse>, AppError> {
    let banner = state.banner_service.get_banner(id).await?;
    Ok(Json(banner.into()))
}

/// Partially updates a banner; unspecified fields are preserved.
///
/// # Endpoint
///
/// `PATCH /api/banners/{id}`
pub async fn update_banner_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BannerUpdatePayload>,
) -> Result<Json<BannerResponse>, AppError> {
    let banner = state
        .banner_service
        .update_banner(id, payload.into())
        .await?;
    Ok(Json(banner.into()))
}

/// Deletes a banner. Placement associations go with it; historical daily
/// statistics are retained.
///
/// # Endpoint
///
/// `DELETE /api/banners/{id}`
pub async fn delete_banner_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.banner_service.delete_banner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
