//! PostgreSQL repository implementations.

pub mod pg_banner_repository;
pub mod pg_placement_repository;
pub mod pg_stats_repository;

pub use pg_banner_repository::PgBannerRepository;
pub use pg_placement_repository::PgPlacementRepository;
pub use pg_stats_repository::PgStatsRepository;
