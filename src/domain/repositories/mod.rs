//! Repository traits decoupling business logic from storage.

pub mod banner_repository;
pub mod placement_repository;
pub mod stats_repository;

pub use banner_repository::{BannerFilter, BannerOrderBy, BannerRepository, SortOrder};
pub use placement_repository::PlacementRepository;
pub use stats_repository::{StatsRange, StatsRepository};

#[cfg(test)]
pub use banner_repository::MockBannerRepository;
#[cfg(test)]
pub use placement_repository::MockPlacementRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
