//! Repository trait for placement data access.

use crate::domain::entities::{
    BannerAssignment, NewPlacement, Placement, PlacementBanner, PlacementPatch,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing placements and their banner lists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlacementRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementRepository: Send + Sync {
    /// Creates a new placement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    async fn create(&self, new_placement: NewPlacement) -> Result<Placement, AppError>;

    /// Finds a placement by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Placement>, AppError>;

    /// Finds a placement by its external slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Placement>, AppError>;

    /// Lists placements with pagination. `page` is 1-indexed.
    async fn list(&self, page: i64, per_page: i64) -> Result<Vec<Placement>, AppError>;

    /// Counts all placements.
    async fn count(&self) -> Result<i64, AppError>;

    /// Partially updates a placement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no placement matches `id`.
    /// Returns [`AppError::Conflict`] if a new slug collides.
    async fn update(&self, id: i64, patch: PlacementPatch) -> Result<Placement, AppError>;

    /// Deletes a placement and its banner associations.
    ///
    /// Returns `Ok(true)` if the placement existed, `Ok(false)` otherwise.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Returns the banners attached to a placement together with their
    /// per-association weight and order overrides.
    async fn list_banners(&self, placement_id: i64) -> Result<Vec<PlacementBanner>, AppError>;

    /// Replaces the banner list of a placement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if an assignment references a
    /// non-existent banner.
    async fn set_banners(
        &self,
        placement_id: i64,
        assignments: Vec<BannerAssignment>,
    ) -> Result<(), AppError>;

    /// Atomically advances the ordered-rotation cursor and returns its value
    /// before the increment.
    ///
    /// The returned value is reduced modulo the eligible-set size by the
    /// caller, which keeps it in range even when the set changed since the
    /// last call. Concurrent calls each observe a distinct value; strict
    /// round-robin fairness under concurrency is best-effort, not guaranteed.
    async fn advance_cursor(&self, placement_id: i64) -> Result<i64, AppError>;
}
