//! Repository trait for banner data access.

use crate::domain::entities::{Banner, BannerPatch, BannerStatus, NewBanner};
use crate::error::AppError;
use async_trait::async_trait;

/// Column a banner listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerOrderBy {
    Id,
    Title,
    CreatedAt,
    Weight,
}

impl BannerOrderBy {
    /// SQL column name; values are fixed identifiers, never user input.
    pub fn column(&self) -> &'static str {
        match self {
            BannerOrderBy::Id => "id",
            BannerOrderBy::Title => "title",
            BannerOrderBy::CreatedAt => "created_at",
            BannerOrderBy::Weight => "weight",
        }
    }
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filter and ordering criteria for banner listings.
#[derive(Debug, Clone)]
pub struct BannerFilter {
    pub status: Option<BannerStatus>,
    pub orderby: BannerOrderBy,
    pub order: SortOrder,
}

impl Default for BannerFilter {
    fn default() -> Self {
        Self {
            status: None,
            orderby: BannerOrderBy::Id,
            order: SortOrder::Asc,
        }
    }
}

/// Repository interface for managing banners.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBannerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Creates a new banner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_banner: NewBanner) -> Result<Banner, AppError>;

    /// Finds a banner by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Banner))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Banner>, AppError>;

    /// Lists banners with pagination, filtering and ordering.
    ///
    /// `page` is 1-indexed.
    async fn list(
        &self,
        page: i64,
        per_page: i64,
        filter: BannerFilter,
    ) -> Result<Vec<Banner>, AppError>;

    /// Counts banners matching the status filter.
    async fn count(&self, status: Option<BannerStatus>) -> Result<i64, AppError>;

    /// Partially updates a banner.
    ///
    /// Only fields present in [`BannerPatch`] are modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no banner matches `id`.
    async fn update(&self, id: i64, patch: BannerPatch) -> Result<Banner, AppError>;

    /// Deletes a banner and its placement associations.
    ///
    /// Historical daily statistics are retained for audit. Returns `Ok(true)`
    /// if the banner existed, `Ok(false)` otherwise.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
