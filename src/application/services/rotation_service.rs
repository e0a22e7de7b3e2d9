//! Banner rotation engine.
//!
//! Selects one eligible banner for a placement request according to the
//! placement's configured strategy. Selection has no side effects on any
//! entity and never records statistics itself; callers enqueue impressions
//! separately so preview/dry-run selection stays invisible to analytics.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;
use serde_json::json;

use crate::domain::entities::{Banner, Placement, PlacementBanner, RotationStrategy};
use crate::domain::repositories::PlacementRepository;
use crate::error::AppError;

/// Result of a successful selection: the resolved placement plus the banner
/// chosen for it. The placement is included so callers can attribute the
/// impression without a second lookup.
#[derive(Debug, Clone)]
pub struct Selection {
    pub placement: Placement,
    pub banner: Banner,
}

/// Service applying rotation strategies over a placement's eligible banners.
pub struct RotationService<P: PlacementRepository> {
    placement_repository: Arc<P>,
}

impl<P: PlacementRepository> RotationService<P> {
    /// Creates a new rotation service.
    pub fn new(placement_repository: Arc<P>) -> Self {
        Self {
            placement_repository,
        }
    }

    /// Selects a banner for the placement identified by `slug`.
    ///
    /// Eligibility is evaluated against `today`, which is injected rather
    /// than read from the wall clock so date-window behavior is testable.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Selection))` with the chosen banner
    /// - `Ok(None)` when no banner is currently eligible; the caller renders
    ///   nothing, this is not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown slug.
    pub async fn select_banner(
        &self,
        slug: &str,
        today: NaiveDate,
    ) -> Result<Option<Selection>, AppError> {
        let placement = self
            .placement_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Placement not found", json!({ "slug": slug }))
            })?;

        let banners = self.placement_repository.list_banners(placement.id).await?;

        let mut eligible: Vec<PlacementBanner> = banners
            .into_iter()
            .filter(|pb| pb.banner.is_eligible_on(today))
            .collect();

        if eligible.is_empty() {
            return Ok(None);
        }

        let index = match placement.rotation_strategy {
            RotationStrategy::Random => pick_uniform(&mut rand::rng(), eligible.len()),
            RotationStrategy::Weighted => pick_weighted(&mut rand::rng(), &eligible),
            RotationStrategy::Ordered => {
                sort_for_rotation(&mut eligible);
                let cursor = self.placement_repository.advance_cursor(placement.id).await?;
                // Modulo keeps the cursor in range even when the eligible
                // set changed size since the previous call.
                cursor.rem_euclid(eligible.len() as i64) as usize
            }
        };

        let banner = eligible.swap_remove(index).banner;
        Ok(Some(Selection { placement, banner }))
    }
}

/// Sorts banners into the stable ordered-rotation sequence: explicit
/// per-placement order first (ascending, unset last), banner id as
/// tie-breaker.
fn sort_for_rotation(banners: &mut [PlacementBanner]) {
    banners.sort_by_key(|pb| {
        (
            pb.display_order.map(i64::from).unwrap_or(i64::MAX),
            pb.banner.id,
        )
    });
}

/// Uniform choice among `len` banners.
fn pick_uniform<R: Rng>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}

/// Weighted choice with probability proportional to effective weight.
///
/// Banners with weight 0 never win the draw. When every eligible banner has
/// weight 0 the draw falls back to uniform random, so a mis-configured
/// placement still serves rather than going dark.
fn pick_weighted<R: Rng>(rng: &mut R, banners: &[PlacementBanner]) -> usize {
    let total: i64 = banners
        .iter()
        .map(|pb| i64::from(pb.effective_weight().max(0)))
        .sum();

    if total == 0 {
        return pick_uniform(rng, banners.len());
    }

    let mut ticket = rng.random_range(0..total);
    for (index, pb) in banners.iter().enumerate() {
        ticket -= i64::from(pb.effective_weight().max(0));
        if ticket < 0 {
            return index;
        }
    }

    // Unreachable with a positive total; kept as a safe fallback.
    banners.len() - 1
}
