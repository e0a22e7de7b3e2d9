//! Application services orchestrating repositories and business rules.

pub mod banner_service;
pub mod placement_service;
pub mod rotation_service;
pub mod stats_service;

pub use banner_service::BannerService;
pub use placement_service::PlacementService;
pub use rotation_service::{RotationService, Selection};
pub use stats_service::{StatsService, StatsSummary};
