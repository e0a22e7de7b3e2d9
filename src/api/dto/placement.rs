//! DTOs for placement CRUD and banner-assignment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::banner::BannerResponse;
use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::{
    BannerAssignment, NewPlacement, Placement, PlacementBanner, PlacementPatch, RotationStrategy,
};

/// Request body for creating a placement.
#[derive(Debug, Deserialize, Validate)]
pub struct PlacementPayload {
    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub rotation_strategy: Option<RotationStrategy>,
}

impl From<PlacementPayload> for NewPlacement {
    fn from(payload: PlacementPayload) -> Self {
        NewPlacement {
            slug: payload.slug,
            name: payload.name,
            rotation_strategy: payload.rotation_strategy.unwrap_or(RotationStrategy::Random),
        }
    }
}

/// Request body for partially updating a placement.
#[derive(Debug, Default, Deserialize)]
pub struct PlacementUpdatePayload {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub rotation_strategy: Option<RotationStrategy>,
}

impl From<PlacementUpdatePayload> for PlacementPatch {
    fn from(payload: PlacementUpdatePayload) -> Self {
        PlacementPatch {
            slug: payload.slug,
            name: payload.name,
            rotation_strategy: payload.rotation_strategy,
        }
    }
}

/// JSON representation of a placement.
///
/// The ordered-rotation cursor is internal bookkeeping and deliberately not
/// exposed.
#[derive(Debug, Serialize)]
pub struct PlacementResponse {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub rotation_strategy: RotationStrategy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Placement> for PlacementResponse {
    fn from(placement: Placement) -> Self {
        PlacementResponse {
            id: placement.id,
            slug: placement.slug,
            name: placement.name,
            rotation_strategy: placement.rotation_strategy,
            created_at: placement.created_at,
            updated_at: placement.updated_at,
        }
    }
}

/// Paginated placement listing.
#[derive(Debug, Serialize)]
pub struct PlacementListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<PlacementResponse>,
}

/// One banner-assignment entry in a `PUT /placements/{id}/banners` body.
#[derive(Debug, Deserialize)]
pub struct AssignmentItem {
    pub banner_id: i64,
    pub weight_override: Option<i32>,
    pub display_order: Option<i32>,
}

/// Request body replacing the banner list of a placement.
#[derive(Debug, Deserialize)]
pub struct PlacementBannersPayload {
    pub banners: Vec<AssignmentItem>,
}

impl PlacementBannersPayload {
    pub fn into_assignments(self) -> Vec<BannerAssignment> {
        self.banners
            .into_iter()
            .map(|item| BannerAssignment {
                banner_id: item.banner_id,
                weight_override: item.weight_override,
                display_order: item.display_order,
            })
            .collect()
    }
}

/// A banner attached to a placement, with its per-association overrides.
#[derive(Debug, Serialize)]
pub struct PlacementBannerResponse {
    #[serde(flatten)]
    pub banner: BannerResponse,
    pub weight_override: Option<i32>,
    pub display_order: Option<i32>,
}

impl From<PlacementBanner> for PlacementBannerResponse {
    fn from(pb: PlacementBanner) -> Self {
        PlacementBannerResponse {
            banner: pb.banner.into(),
            weight_override: pb.weight_override,
            display_order: pb.display_order,
        }
    }
}
