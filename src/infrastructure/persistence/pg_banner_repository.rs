//! PostgreSQL implementation of the banner repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, QueryBuilder, Row};
use std::sync::Arc;

use crate::domain::entities::{Banner, BannerPatch, BannerStatus, NewBanner};
use crate::domain::repositories::{BannerFilter, BannerRepository};
use crate::error::AppError;
use serde_json::json;

const BANNER_COLUMNS: &str = "id, title, desktop_image_id, mobile_image_id, \
    desktop_image_url, mobile_image_url, desktop_url, mobile_url, \
    start_date, end_date, status, weight, created_at, updated_at";

/// Raw banner row as stored in the `banners` table.
#[derive(sqlx::FromRow)]
pub(crate) struct BannerRow {
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

impl From<BannerRow> for Banner {
    fn from(row: BannerRow) -> Self {
        Banner {
            id: row.id,
            title: row.title,
            desktop_image_id: row.desktop_image_id,
            mobile_image_id: row.mobile_image_id,
            desktop_image_url: row.desktop_image_url,
            mobile_image_url: row.mobile_image_url,
            desktop_url: row.desktop_url,
            mobile_url: row.mobile_url,
            start_date: row.start_date,
            end_date: row.end_date,
            status: row.status,
            weight: row.weight,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for banner storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection; the only
/// dynamic SQL fragments are fixed identifiers taken from enums.
pub struct PgBannerRepository {
    pool: Arc<PgPool>,
}

impl PgBannerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerRepository for PgBannerRepository {
    async fn create(&self, new_banner: NewBanner) -> Result<Banner, AppError> {
        let sql = format!(
            "INSERT INTO banners (title, desktop_image_id, mobile_image_id, \
             desktop_url, mobile_url, start_date, end_date, status, weight) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {BANNER_COLUMNS}"
        );

        let row: BannerRow = sqlx::query_as(&sql)
            .bind(&new_banner.title)
            .bind(new_banner.desktop_image_id)
            .bind(new_banner.mobile_image_id)
            .bind(&new_banner.desktop_url)
            .bind(&new_banner.mobile_url)
            .bind(new_banner.start_date)
            .bind(new_banner.end_date)
            .bind(new_banner.status)
            .bind(new_banner.weight)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Banner>, AppError> {
        let sql = format!("SELECT {BANNER_COLUMNS} FROM banners WHERE id = $1");

        let row: Option<BannerRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        page: i64,
        per_page: i64,
        filter: BannerFilter,
    ) -> Result<Vec<Banner>, AppError> {
        let offset = (page - 1) * per_page;

        let mut qb: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {BANNER_COLUMNS} FROM banners"));

        if let Some(status) = filter.status {
            qb.push(" WHERE status = ").push_bind(status);
        }

        // Column and direction are fixed identifiers from enums, not input.
        qb.push(" ORDER BY ")
            .push(filter.orderby.column())
            .push(" ")
            .push(filter.order.sql())
            .push(" LIMIT ")
            .push_bind(per_page)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<BannerRow> = qb.build_query_as().fetch_all(self.pool.as_ref()).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, status: Option<BannerStatus>) -> Result<i64, AppError> {
        let count: i64 = if let Some(status) = status {
            sqlx::query_scalar("SELECT COUNT(*) FROM banners WHERE status = $1")
                .bind(status)
                .fetch_one(self.pool.as_ref())
                .await?
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM banners")
                .fetch_one(self.pool.as_ref())
                .await?
        };

        Ok(count)
    }

    async fn update(&self, id: i64, patch: BannerPatch) -> Result<Banner, AppError> {
        let mut qb: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("UPDATE banners SET updated_at = now()");

        if let Some(title) = patch.title {
            qb.push(", title = ").push_bind(title);
        }
        if let Some(desktop_image_id) = patch.desktop_image_id {
            qb.push(", desktop_image_id = ").push_bind(desktop_image_id);
        }
        if let Some(mobile_image_id) = patch.mobile_image_id {
            qb.push(", mobile_image_id = ").push_bind(mobile_image_id);
        }
        if let Some(desktop_url) = patch.desktop_url {
            qb.push(", desktop_url = ").push_bind(desktop_url);
        }
        if let Some(mobile_url) = patch.mobile_url {
            qb.push(", mobile_url = ").push_bind(mobile_url);
        }
        if let Some(start_date) = patch.start_date {
            qb.push(", start_date = ").push_bind(start_date);
        }
        if let Some(end_date) = patch.end_date {
            qb.push(", end_date = ").push_bind(end_date);
        }
        if let Some(status) = patch.status {
            qb.push(", status = ").push_bind(status);
        }
        if let Some(weight) = patch.weight {
            qb.push(", weight = ").push_bind(weight);
        }

        qb.push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {BANNER_COLUMNS}"));

        let row: Option<BannerRow> = qb
            .build_query_as()
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Banner not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // Associations cascade; daily_statistics rows are kept for audit.
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Reads a banner row out of a joined result set, used by the placement
/// repository when loading a placement's banner list.
pub(crate) fn banner_from_pg_row(row: &sqlx::postgres::PgRow) -> Result<Banner, sqlx::Error> {
    Ok(Banner {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        desktop_image_id: row.try_get("desktop_image_id")?,
        mobile_image_id: row.try_get("mobile_image_id")?,
        desktop_image_url: row.try_get("desktop_image_url")?,
        mobile_image_url: row.try_get("mobile_image_url")?,
        desktop_url: row.try_get("desktop_url")?,
        mobile_url: row.try_get("mobile_url")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        status: row.try_get("status")?,
        weight: row.try_get("weight")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
