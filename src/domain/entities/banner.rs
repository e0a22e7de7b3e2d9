//! Banner entity and display eligibility rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a banner as stored by the admin UI.
///
/// `Scheduled` is a listing hint meaning "enabled but window not yet open".
/// It may be stale, so eligibility is always recomputed from the date window
/// at selection time; only `Paused` disables a banner unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "banner_status", rename_all = "lowercase")]
pub enum BannerStatus {
    Active,
    Paused,
    Scheduled,
}

impl BannerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerStatus::Active => "active",
            BannerStatus::Paused => "paused",
            BannerStatus::Scheduled => "scheduled",
        }
    }
}

/// An advertising banner with optional scheduling window.
#[derive(Debug, Clone)]
pub struct Banner {
    pub id: i64,
    pub title: String,
    /// Media-store reference for the desktop creative.
    pub desktop_image_id: Option<i64>,
    pub mobile_image_id: Option<i64>,
    /// Image URLs resolved from the media store at read time.
    pub desktop_image_url: Option<String>,
    pub mobile_image_url: Option<String>,
    /// Click-through target for desktop visitors.
    pub desktop_url: String,
    /// Optional click-through target for mobile visitors.
    pub mobile_url: Option<String>,
    /// Inclusive scheduling window; open-ended when `None`.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: BannerStatus,
    /// Draw weight under the weighted strategy; ignored otherwise.
    pub weight: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Returns true if the banner may be shown on `today`.
    ///
    /// A banner is eligible when it is not paused and `today` falls inside
    /// its inclusive scheduling window. The stored status beyond `Paused` is
    /// deliberately not trusted here: a stale `scheduled` flag must not keep
    /// a banner off the page once its window has opened.
    pub fn is_eligible_on(&self, today: NaiveDate) -> bool {
        if self.status == BannerStatus::Paused {
            return false;
        }
        if self.start_date.is_some_and(|start| today < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| today > end) {
            return false;
        }
        true
    }

    /// Returns the creative image URL for the given device class, when one
    /// has been resolved from the media store.
    pub fn image_url(&self, mobile: bool) -> Option<&str> {
        if mobile {
            if let Some(url) = &self.mobile_image_url {
                return Some(url);
            }
        }
        self.desktop_image_url.as_deref()
    }

    /// Returns the click-through target for the given device class.
    pub fn target_url(&self, mobile: bool) -> &str {
        if mobile {
            if let Some(url) = &self.mobile_url {
                return url;
            }
        }
        &self.desktop_url
    }
}

/// Input data for creating a new banner.
#[derive(Debug, Clone)]
pub struct NewBanner {
    pub title: String,
    pub desktop_image_id: Option<i64>,
    pub mobile_image_id: Option<i64>,
    pub desktop_url: String,
    pub mobile_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: BannerStatus,
    pub weight: i32,
}

/// Partial update for an existing banner.
///
/// `None` fields are left unchanged. Double-optional fields distinguish
/// "leave as-is" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct BannerPatch {
    pub title: Option<String>,
    pub desktop_image_id: Option<Option<i64>>,
    pub mobile_image_id: Option<Option<i64>>,
    pub desktop_url: Option<String>,
    pub mobile_url: Option<Option<String>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub status: Option<BannerStatus>,
    pub weight: Option<i32>,
}

/// A banner attached to a placement, carrying per-association overrides.
#[derive(Debug, Clone)]
pub struct PlacementBanner {
    pub banner: Banner,
    /// Overrides the banner's own weight within this placement.
    pub weight_override: Option<i32>,
    /// Explicit position under the ordered strategy; falls back to banner id.
    pub display_order: Option<i32>,
}

impl PlacementBanner {
    /// Draw weight effective within this placement.
    pub fn effective_weight(&self) -> i32 {
        self.weight_override.unwrap_or(self.banner.weight)
    }
}
