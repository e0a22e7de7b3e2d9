//! Pagination, filtering and date-range query parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::BannerStatus;
use crate::domain::repositories::{BannerFilter, BannerOrderBy, SortOrder};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and returns `(page, per_page)`.
    ///
    /// Page is 1-indexed and defaults to 1; `per_page` defaults to 20 and is
    /// capped at 100.
    pub fn validate(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page == 0 {
            return Err("page must be greater than 0".to_string());
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(format!("per_page must be between 1 and {MAX_PER_PAGE}"));
        }

        Ok((i64::from(page), i64::from(per_page)))
    }
}

/// Query parameters for banner listings: pagination plus status filter and
/// ordering, matching the admin UI's list calls.
#[derive(Debug, Default, Deserialize)]
pub struct BannerListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    pub status: Option<BannerStatus>,
    pub orderby: Option<BannerOrderBy>,
    pub order: Option<SortOrder>,
}

impl BannerListParams {
    pub fn filter(&self) -> BannerFilter {
        BannerFilter {
            status: self.status,
            orderby: self.orderby.unwrap_or(BannerOrderBy::Id),
            order: self.order.unwrap_or(SortOrder::Asc),
        }
    }
}

/// Inclusive ISO-8601 date range for statistics endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRangeParams {
    /// Rejects ranges where the end precedes the start.
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err("end_date must not be before start_date".to_string());
        }
        Ok(())
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, per_page: i64, total_items: i64) -> Self {
        Self {
            page,
            per_page,
            total_items,
            total_pages: (total_items + per_page - 1) / per_page,
        }
    }
}
