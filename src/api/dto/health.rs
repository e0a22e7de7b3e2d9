//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service health report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" when every check passes, "degraded" otherwise.
    pub status: &'static str,
    pub database: CheckStatus,
    pub stat_queue: QueueStatus,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

/// Occupancy of the bounded stat-event channel.
#[derive(Debug, Serialize)]
pub struct QueueStatus {
    pub capacity: usize,
    pub available: usize,
}
