//! Banner CRUD service with payload validation.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::entities::{Banner, BannerPatch, BannerStatus, NewBanner};
use crate::domain::repositories::{BannerFilter, BannerRepository};
use crate::error::AppError;

pub const MAX_TITLE_LENGTH: usize = 255;

/// Service for creating and maintaining banners.
///
/// Validation happens here, before persistence, so malformed payloads are
/// rejected atomically and never partially applied.
pub struct BannerService<R: BannerRepository> {
    repository: Arc<R>,
}

impl<R: BannerRepository> BannerService<R> {
    /// Creates a new banner service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a banner.
    ///
    /// # Validation
    ///
    /// - `title` non-empty, at most 255 characters
    /// - `desktop_url` a valid http(s) URL
    /// - `mobile_url` a valid http(s) URL when present
    /// - `end_date >= start_date` when both present
    /// - `weight >= 0`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    pub async fn create_banner(&self, new_banner: NewBanner) -> Result<Banner, AppError> {
        validate_title(&new_banner.title)?;
        validate_target_url("desktop_url", &new_banner.desktop_url)?;
        if let Some(mobile_url) = &new_banner.mobile_url {
            validate_target_url("mobile_url", mobile_url)?;
        }
        validate_window(new_banner.start_date, new_banner.end_date)?;
        validate_weight(new_banner.weight)?;

        self.repository.create(new_banner).await
    }

    /// Retrieves a banner by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no banner matches.
    pub async fn get_banner(&self, id: i64) -> Result<Banner, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found("Banner not found", json!({ "id": id }))
        })
    }

    /// Lists banners with pagination and the given filter.
    pub async fn list_banners(
        &self,
        page: i64,
        per_page: i64,
        filter: BannerFilter,
    ) -> Result<(Vec<Banner>, i64), AppError> {
        let status = filter.status;
        let (banners, total) = tokio::try_join!(
            self.repository.list(page, per_page, filter),
            self.repository.count(status)
        )?;
        Ok((banners, total))
    }

    /// Partially updates a banner. Unspecified fields are preserved.
    ///
    /// The scheduling window is validated against the state the update would
    /// produce, so a patch cannot move `end_date` before an existing
    /// `start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no banner matches.
    /// Returns [`AppError::Validation`] if the resulting state is invalid.
    pub async fn update_banner(&self, id: i64, patch: BannerPatch) -> Result<Banner, AppError> {
        let current = self.get_banner(id).await?;

        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(desktop_url) = &patch.desktop_url {
            validate_target_url("desktop_url", desktop_url)?;
        }
        if let Some(Some(mobile_url)) = &patch.mobile_url {
            validate_target_url("mobile_url", mobile_url)?;
        }
        if let Some(weight) = patch.weight {
            validate_weight(weight)?;
        }

        let start = patch.start_date.unwrap_or(current.start_date);
        let end = patch.end_date.unwrap_or(current.end_date);
        validate_window(start, end)?;

        self.repository.update(id, patch).await
    }

    /// Deletes a banner. Placement associations are removed; historical
    /// statistics are retained for audit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no banner matches.
    pub async fn delete_banner(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "Banner not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::bad_request(
            "Title is required",
            json!({ "field": "title" }),
        ));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(AppError::bad_request(
            "Title is too long",
            json!({ "field": "title", "max_length": MAX_TITLE_LENGTH }),
        ));
    }
    Ok(())
}

fn validate_target_url(field: &str, value: &str) -> Result<(), AppError> {
    let parsed = url::Url::parse(value).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "field": field, "reason": e.to_string() }),
        )
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "URL must use http or https",
            json!({ "field": field, "scheme": parsed.scheme() }),
        ));
    }
    Ok(())
}

fn validate_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(AppError::bad_request(
            "end_date must not be before start_date",
            json!({ "start_date": start, "end_date": end }),
        ));
    }
    Ok(())
}

fn validate_weight(weight: i32) -> Result<(), AppError> {
    if weight < 0 {
        return Err(AppError::bad_request(
            "Weight must be non-negative",
            json!({ "field": "weight", "value": weight }),
        ));
    }
    Ok(())
}
