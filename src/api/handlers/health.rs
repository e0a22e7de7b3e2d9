//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse, QueueStatus};
use crate::state::AppState;

/// Returns service health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: database unreachable or stat queue closed
///
/// # Components Checked
///
/// 1. **Database**: runs `SELECT 1` over the pool
/// 2. **Stat queue**: checks the channel is open and reports occupancy
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match sqlx::query("SELECT 1").execute(state.db.as_ref()).await {
        Ok(_) => CheckStatus::Ok,
        Err(_) => CheckStatus::Error,
    };

    let queue_open = !state.stat_sender.is_closed();
    let stat_queue = QueueStatus {
        capacity: state.stat_sender.max_capacity(),
        available: state.stat_sender.capacity(),
    };

    let healthy = database == CheckStatus::Ok && queue_open;
    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        database,
        stat_queue,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
