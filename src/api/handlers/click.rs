//! Public click-through redirect handler.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use tracing::warn;

use crate::domain::stat_event::StatEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::device::is_mobile_request;

/// Query parameters of the click endpoint.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ClickParams {
    #[serde_as(as = "DisplayFromStr")]
    pub banner: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub placement: i64,
}

/// Records a click and redirects to the banner's target URL.
///
/// # Endpoint
///
/// `GET /click?banner={id}&placement={id}`
///
/// # Behavior
///
/// - Responds 302 Found with the device-appropriate target URL.
/// - Responds 404 Not Found for an unknown banner id.
/// - The click is queued for asynchronous recording; a full stats queue
///   never fails the redirect.
pub async fn click_handler(
    State(state): State<AppState>,
    Query(params): Query<ClickParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let banner = state.banner_service.get_banner(params.banner).await?;

    let event = StatEvent::click(params.banner, params.placement, Utc::now().date_naive());
    if state.stat_sender.try_send(event).is_err() {
        warn!(banner_id = params.banner, placement_id = params.placement, "Stat queue full, dropping click");
    }

    let target = banner.target_url(is_mobile_request(&headers)).to_owned();
    Ok((StatusCode::FOUND, [(LOCATION, target)]).into_response())
}
