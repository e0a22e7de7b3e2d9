//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::{BannerService, PlacementService, RotationService, StatsService};
use crate::domain::stat_event::StatEvent;
use crate::infrastructure::persistence::{
    PgBannerRepository, PgPlacementRepository, PgStatsRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub banner_service: Arc<BannerService<PgBannerRepository>>,
    pub placement_service: Arc<PlacementService<PgPlacementRepository>>,
    pub rotation_service: Arc<RotationService<PgPlacementRepository>>,
    pub stats_service: Arc<StatsService<PgStatsRepository>>,
    /// Bounded channel feeding the background stat worker; full queue means
    /// the event is dropped, never a blocked response.
    pub stat_sender: mpsc::Sender<StatEvent>,
    /// Kept for the health endpoint's connectivity probe.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires all services over one connection pool.
    pub fn new(pool: Arc<PgPool>, stat_sender: mpsc::Sender<StatEvent>) -> Self {
        let banner_repository = Arc::new(PgBannerRepository::new(pool.clone()));
        let placement_repository = Arc::new(PgPlacementRepository::new(pool.clone()));
        let stats_repository = Arc::new(PgStatsRepository::new(pool.clone()));

        Self {
            banner_service: Arc::new(BannerService::new(banner_repository)),
            placement_service: Arc::new(PlacementService::new(placement_repository.clone())),
            rotation_service: Arc::new(RotationService::new(placement_repository)),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            stat_sender,
            db: pool,
        }
    }
}
