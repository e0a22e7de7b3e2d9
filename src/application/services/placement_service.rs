//! Placement CRUD service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{
    BannerAssignment, NewPlacement, Placement, PlacementBanner, PlacementPatch,
};
use crate::domain::repositories::PlacementRepository;
use crate::error::AppError;
use crate::utils::slug::validate_slug;

/// Service for managing placements and their banner lists.
pub struct PlacementService<R: PlacementRepository> {
    repository: Arc<R>,
}

impl<R: PlacementRepository> PlacementService<R> {
    /// Creates a new placement service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a placement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed slug or empty name.
    /// Returns [`AppError::Conflict`] if the slug is taken.
    pub async fn create_placement(
        &self,
        new_placement: NewPlacement,
    ) -> Result<Placement, AppError> {
        validate_slug(&new_placement.slug).map_err(|e| {
            AppError::bad_request(
                "Invalid slug",
                json!({ "slug": new_placement.slug, "reason": e.to_string() }),
            )
        })?;
        validate_name(&new_placement.name)?;

        if self
            .repository
            .find_by_slug(&new_placement.slug)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Slug already exists",
                json!({ "slug": new_placement.slug }),
            ));
        }

        self.repository.create(new_placement).await
    }

    /// Retrieves a placement by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no placement matches.
    pub async fn get_placement(&self, id: i64) -> Result<Placement, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found("Placement not found", json!({ "id": id }))
        })
    }

    /// Lists placements with pagination.
    pub async fn list_placements(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Placement>, i64), AppError> {
        let (placements, total) = tokio::try_join!(
            self.repository.list(page, per_page),
            self.repository.count()
        )?;
        Ok((placements, total))
    }

    /// Partially updates a placement.
    pub async fn update_placement(
        &self,
        id: i64,
        patch: PlacementPatch,
    ) -> Result<Placement, AppError> {
        if let Some(slug) = &patch.slug {
            validate_slug(slug).map_err(|e| {
                AppError::bad_request(
                    "Invalid slug",
                    json!({ "slug": slug, "reason": e.to_string() }),
                )
            })?;

            if let Some(existing) = self.repository.find_by_slug(slug).await?
                && existing.id != id
            {
                return Err(AppError::conflict(
                    "Slug already exists",
                    json!({ "slug": slug }),
                ));
            }
        }
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }

        self.repository.update(id, patch).await
    }

    /// Deletes a placement and its banner associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no placement matches.
    pub async fn delete_placement(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "Placement not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Returns the banners attached to a placement with their overrides.
    pub async fn list_banners(&self, id: i64) -> Result<Vec<PlacementBanner>, AppError> {
        // Surface NotFound for an unknown placement instead of an empty list.
        self.get_placement(id).await?;
        self.repository.list_banners(id).await
    }

    /// Replaces the banner list of a placement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for negative overrides or duplicate
    /// banner ids; the repository rejects unknown banner ids.
    pub async fn set_banners(
        &self,
        id: i64,
        assignments: Vec<BannerAssignment>,
    ) -> Result<(), AppError> {
        self.get_placement(id).await?;

        let mut seen = std::collections::HashSet::new();
        for assignment in &assignments {
            if !seen.insert(assignment.banner_id) {
                return Err(AppError::bad_request(
                    "Duplicate banner in assignment list",
                    json!({ "banner_id": assignment.banner_id }),
                ));
            }
            if assignment.weight_override.is_some_and(|w| w < 0) {
                return Err(AppError::bad_request(
                    "Weight override must be non-negative",
                    json!({ "banner_id": assignment.banner_id }),
                ));
            }
        }

        self.repository.set_banners(id, assignments).await
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request(
            "Name is required",
            json!({ "field": "name" }),
        ));
    }
    Ok(())
}
