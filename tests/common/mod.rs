#![allow(dead_code)]

use banner_rotator::domain::stat_event::StatEvent;
use banner_rotator::state::AppState;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<StatEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(Arc::new(pool), tx);
    (state, rx)
}

pub async fn create_test_banner(pool: &PgPool, title: &str, weight: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO banners (title, desktop_url, weight) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(format!("https://example.com/{}", title))
    .bind(weight)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_paused_banner(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO banners (title, desktop_url, status) VALUES ($1, $2, 'paused') RETURNING id",
    )
    .bind(title)
    .bind(format!("https://example.com/{}", title))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_windowed_banner(
    pool: &PgPool,
    title: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO banners (title, desktop_url, start_date, end_date) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(title)
    .bind(format!("https://example.com/{}", title))
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_placement(pool: &PgPool, slug: &str, strategy: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO placements (slug, name, rotation_strategy) \
         VALUES ($1, $2, $3::rotation_strategy) RETURNING id",
    )
    .bind(slug)
    .bind(format!("Placement {}", slug))
    .bind(strategy)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn assign_banner(
    pool: &PgPool,
    placement_id: i64,
    banner_id: i64,
    weight_override: Option<i32>,
    display_order: Option<i32>,
) {
    sqlx::query(
        "INSERT INTO placement_banners (placement_id, banner_id, weight_override, display_order) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(placement_id)
    .bind(banner_id)
    .bind(weight_override)
    .bind(display_order)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_daily_stat(
    pool: &PgPool,
    banner_id: i64,
    placement_id: i64,
    date: NaiveDate,
    impressions: i64,
    clicks: i64,
) {
    sqlx::query(
        "INSERT INTO daily_statistics (banner_id, placement_id, stat_date, impressions, clicks) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(banner_id)
    .bind(placement_id)
    .bind(date)
    .bind(impressions)
    .bind(clicks)
    .execute(pool)
    .await
    .unwrap();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
