//! Public banner serving handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::warn;

use crate::domain::stat_event::StatEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::device::is_mobile_request;

/// Template for the embeddable banner snippet.
///
/// Renders `templates/banner.html`: a linked image pointing at the click
/// endpoint, suitable for direct inclusion in a host page.
#[derive(Template, WebTemplate)]
#[template(path = "banner.html")]
pub struct BannerSnippet {
    pub title: String,
    /// Creative image for the requesting device; text link when absent.
    pub image_url: Option<String>,
    pub click_href: String,
}

/// Serves one banner for a placement, selected by the placement's rotation
/// strategy, and records an impression.
///
/// # Endpoint
///
/// `GET /serve/{slug}`
///
/// # Behavior
///
/// - Picks the creative variant from the `User-Agent` header: mobile
///   devices get the mobile image when one is set.
/// - Responds 204 No Content when the placement has no eligible banners.
/// - The impression is queued for asynchronous recording; a full stats
///   queue never fails the request.
pub async fn serve_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let today = Utc::now().date_naive();

    let Some(selection) = state.rotation_service.select_banner(&slug, today).await? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let banner = selection.banner;
    let event = StatEvent::impression(banner.id, selection.placement.id, today);
    if state.stat_sender.try_send(event).is_err() {
        warn!(banner_id = banner.id, placement_id = selection.placement.id, "Stat queue full, dropping impression");
    }

    let mobile = is_mobile_request(&headers);
    let snippet = BannerSnippet {
        image_url: banner.image_url(mobile).map(str::to_owned),
        click_href: format!(
            "/click?banner={}&placement={}",
            banner.id, selection.placement.id
        ),
        title: banner.title,
    };

    Ok(snippet.into_response())
}
