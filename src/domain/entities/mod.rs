//! Core business entities.

pub mod banner;
pub mod placement;
pub mod statistic;

pub use banner::{Banner, BannerPatch, BannerStatus, NewBanner, PlacementBanner};
pub use placement::{BannerAssignment, NewPlacement, Placement, PlacementPatch, RotationStrategy};
pub use statistic::DailyStatistic;
