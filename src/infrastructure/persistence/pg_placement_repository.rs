//! PostgreSQL implementation of the placement repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder, Row};
use std::sync::Arc;

use crate::domain::entities::{
    BannerAssignment, NewPlacement, Placement, PlacementBanner, PlacementPatch, RotationStrategy,
};
use crate::domain::repositories::PlacementRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::pg_banner_repository::banner_from_pg_row;
use serde_json::json;

const PLACEMENT_COLUMNS: &str =
    "id, slug, name, rotation_strategy, rotation_cursor, created_at, updated_at";

/// Raw placement row as stored in the `placements` table.
#[derive(sqlx::FromRow)]
struct PlacementRow {
    id: i64,
    slug: String,
    name: String,
    rotation_strategy: RotationStrategy,
    rotation_cursor: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PlacementRow> for Placement {
    fn from(row: PlacementRow) -> Self {
        Placement {
            id: row.id,
            slug: row.slug,
            name: row.name,
            rotation_strategy: row.rotation_strategy,
            rotation_cursor: row.rotation_cursor,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for placements and their banner associations.
pub struct PgPlacementRepository {
    pool: Arc<PgPool>,
}

impl PgPlacementRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlacementRepository for PgPlacementRepository {
    async fn create(&self, new_placement: NewPlacement) -> Result<Placement, AppError> {
        let sql = format!(
            "INSERT INTO placements (slug, name, rotation_strategy) \
             VALUES ($1, $2, $3) RETURNING {PLACEMENT_COLUMNS}"
        );

        let row: PlacementRow = sqlx::query_as(&sql)
            .bind(&new_placement.slug)
            .bind(&new_placement.name)
            .bind(new_placement.rotation_strategy)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Placement>, AppError> {
        let sql = format!("SELECT {PLACEMENT_COLUMNS} FROM placements WHERE id = $1");

        let row: Option<PlacementRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Placement>, AppError> {
        let sql = format!("SELECT {PLACEMENT_COLUMNS} FROM placements WHERE slug = $1");

        let row: Option<PlacementRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, page: i64, per_page: i64) -> Result<Vec<Placement>, AppError> {
        let offset = (page - 1) * per_page;
        let sql = format!(
            "SELECT {PLACEMENT_COLUMNS} FROM placements \
             ORDER BY id ASC LIMIT $1 OFFSET $2"
        );

        let rows: Vec<PlacementRow> = sqlx::query_as(&sql)
            .bind(per_page)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM placements")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: PlacementPatch) -> Result<Placement, AppError> {
        let mut qb: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("UPDATE placements SET updated_at = now()");

        if let Some(slug) = patch.slug {
            qb.push(", slug = ").push_bind(slug);
        }
        if let Some(name) = patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(strategy) = patch.rotation_strategy {
            qb.push(", rotation_strategy = ").push_bind(strategy);
        }

        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {PLACEMENT_COLUMNS}"));

        let row: Option<PlacementRow> = qb
            .build_query_as()
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Placement not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM placements WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_banners(&self, placement_id: i64) -> Result<Vec<PlacementBanner>, AppError> {
        // Stable order matches the ordered-rotation sort: explicit
        // display_order first, banner id as tie-breaker.
        let rows = sqlx::query(
            "SELECT b.id, b.title, b.desktop_image_id, b.mobile_image_id, \
                    b.desktop_image_url, b.mobile_image_url, b.desktop_url, b.mobile_url, \
                    b.start_date, b.end_date, b.status, b.weight, b.created_at, b.updated_at, \
                    pb.weight_override, pb.display_order \
             FROM placement_banners pb \
             JOIN banners b ON b.id = pb.banner_id \
             WHERE pb.placement_id = $1 \
             ORDER BY pb.display_order ASC NULLS LAST, b.id ASC",
        )
        .bind(placement_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut banners = Vec::with_capacity(rows.len());
        for row in &rows {
            banners.push(PlacementBanner {
                banner: banner_from_pg_row(row)?,
                weight_override: row.try_get("weight_override")?,
                display_order: row.try_get("display_order")?,
            });
        }

        Ok(banners)
    }

    async fn set_banners(
        &self,
        placement_id: i64,
        assignments: Vec<BannerAssignment>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM placement_banners WHERE placement_id = $1")
            .bind(placement_id)
            .execute(&mut *tx)
            .await?;

        for assignment in &assignments {
            sqlx::query(
                "INSERT INTO placement_banners \
                 (placement_id, banner_id, weight_override, display_order) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(placement_id)
            .bind(assignment.banner_id)
            .bind(assignment.weight_override)
            .bind(assignment.display_order)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                // FK violation means an unknown banner id; reject the whole
                // batch so the list is never partially applied.
                if e.as_database_error()
                    .is_some_and(|db| db.is_foreign_key_violation())
                {
                    AppError::bad_request(
                        "Assignment references unknown banner",
                        json!({ "banner_id": assignment.banner_id }),
                    )
                } else {
                    e.into()
                }
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn advance_cursor(&self, placement_id: i64) -> Result<i64, AppError> {
        // Single-statement increment: concurrent callers each observe a
        // distinct pre-increment value, no read-modify-write race.
        let cursor: Option<i64> = sqlx::query_scalar(
            "UPDATE placements SET rotation_cursor = rotation_cursor + 1 \
             WHERE id = $1 RETURNING rotation_cursor - 1",
        )
        .bind(placement_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        cursor.ok_or_else(|| {
            AppError::not_found("Placement not found", json!({ "id": placement_id }))
        })
    }
}
