//! Handlers for placement management and banner assignment endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::placement::{
    PlacementBannerResponse, PlacementBannersPayload, PlacementListResponse, PlacementPayload,
    PlacementResponse, PlacementUpdatePayload,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists placements with pagination.
///
/// # Endpoint
///
/// `GET /api/placements`
pub async fn list_placements_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PlacementListResponse>, AppError> {
    let (page, per_page) = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (placements, total_items) = state
        .placement_service
        .list_placements(page, per_page)
        .await?;

    Ok(Json(PlacementListResponse {
        pagination: PaginationMeta::new(page, per_page, total_items),
        items: placements.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a placement with a unique slug.
///
/// # Endpoint
///
/// `POST /api/placements`
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid slug and 409 Conflict when the
/// slug is already taken.
pub async fn create_placement_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlacementPayload>,
) -> Result<(StatusCode, Json<PlacementResponse>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid placement payload", json!({ "errors": e.to_string() })))?;

    let placement = state
        .placement_service
        .create_placement(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(placement.into())))
}

/// Retrieves a single placement.
///
/// # Endpoint
///
/// `GET /api/placements/{id}`
pub async fn get_placement_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlacementResponse>, AppError> {
    let placement = state.placement_service.get_placement(id).await?;
    Ok(Json(placement.into()))
}

/// Partially updates a placement.
///
/// # Endpoint
///
/// `PATCH /api/placements/{id}`
pub async fn update_placement_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PlacementUpdatePayload>,
) -> Result<Json<PlacementResponse>, AppError> {
    let placement = state
        .placement_service
        .update_placement(id, payload.into())
        .await?;
    Ok(Json(placement.into()))
}

/// Deletes a placement and its banner assignments.
///
/// # Endpoint
///
/// `DELETE /api/placements/{id}`
pub async fn delete_placement_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.placement_service.delete_placement(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists the banners assigned to a placement in rotation order, with
/// per-placement weight and order overrides.
///
/// # Endpoint
///
/// `GET /api/placements/{id}/banners`
pub async fn placement_banners_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<PlacementBannerResponse>>, AppError> {
    let banners = state.placement_service.list_banners(id).await?;
    Ok(Json(banners.into_iter().map(Into::into).collect()))
}

/// Replaces the full banner assignment list of a placement.
///
/// # Endpoint
///
/// `PUT /api/placements/{id}/banners`
///
/// # Errors
///
/// Returns 400 Bad Request for duplicate banner ids, negative weight
/// overrides or references to unknown banners.
pub async fn set_placement_banners_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PlacementBannersPayload>,
) -> Result<Json<Vec<PlacementBannerResponse>>, AppError> {
    state
        .placement_service
        .set_banners(id, payload.into_assignments())
        .await?;

    let banners = state.placement_service.list_banners(id).await?;
    Ok(Json(banners.into_iter().map(Into::into).collect()))
}
