//! DTOs for banner CRUD endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::{Banner, BannerPatch, BannerStatus, NewBanner};

/// Request body for creating a banner.
///
/// `title` and `desktop_url` are required; everything else defaults to an
/// always-on, weight-1 active banner.
#[derive(Debug, Deserialize, Validate)]
pub struct BannerPayload {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub desktop_image_id: Option<i64>,
    pub mobile_image_id: Option<i64>,

    #[validate(url(message = "Invalid URL format"))]
    pub desktop_url: String,

    #[validate(url(message = "Invalid URL format"))]
    pub mobile_url: Option<String>,

    /// Inclusive scheduling window, ISO-8601 dates.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub status: Option<BannerStatus>,
    pub weight: Option<i32>,
}

impl From<BannerPayload> for NewBanner {
    fn from(payload: BannerPayload) -> Self {
        NewBanner {
            title: payload.title,
            desktop_image_id: payload.desktop_image_id,
            mobile_image_id: payload.mobile_image_id,
            desktop_url: payload.desktop_url,
            mobile_url: payload.mobile_url,
            start_date: payload.start_date,
            end_date: payload.end_date,
            status: payload.status.unwrap_or(BannerStatus::Active),
            weight: payload.weight.unwrap_or(1),
        }
    }
}

/// Request body for partially updating a banner.
///
/// Absent fields are left unchanged; explicit `null` clears a nullable
/// field (`double_option` keeps the two cases apart).
#[derive(Debug, Default, Deserialize)]
pub struct BannerUpdatePayload {
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub desktop_image_id: Option<Option<i64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub mobile_image_id: Option<Option<i64>>,

    pub desktop_url: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub mobile_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub end_date: Option<Option<NaiveDate>>,

    pub status: Option<BannerStatus>,
    pub weight: Option<i32>,
}

impl From<BannerUpdatePayload> for BannerPatch {
    fn from(payload: BannerUpdatePayload) -> Self {
        BannerPatch {
            title: payload.title,
            desktop_image_id: payload.desktop_image_id,
            mobile_image_id: payload.mobile_image_id,
            desktop_url: payload.desktop_url,
            mobile_url: payload.mobile_url,
            start_date: payload.start_date,
            end_date: payload.end_date,
            status: payload.status,
            weight: payload.weight,
        }
    }
}

/// JSON representation of a banner.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub id: i64,
    pub title: String,
    pub desktop_image_id: Option<i64>,
    pub mobile_image_id: Option<i64>,
    pub desktop_image_url: Option<String>,
    pub mobile_image_url: Option<String>,
    pub desktop_url: String,
    pub mobile_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: BannerStatus,
    pub weight: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        BannerResponse {
            id: banner.id,
            title: banner.title,
            desktop_image_id: banner.desktop_image_id,
            mobile_image_id: banner.mobile_image_id,
            desktop_image_url: banner.desktop_image_url,
            mobile_image_url: banner.mobile_image_url,
            desktop_url: banner.desktop_url,
            mobile_url: banner.mobile_url,
            start_date: banner.start_date,
            end_date: banner.end_date,
            status: banner.status,
            weight: banner.weight,
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

/// Paginated banner listing.
#[derive(Debug, Serialize)]
pub struct BannerListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<BannerResponse>,
}
