mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use banner_rotator::api::handlers::serve_handler;
use banner_rotator::domain::stat_event::StatKind;
use sqlx::PgPool;

fn serve_app(state: banner_rotator::AppState) -> Router {
    Router::new()
        .route("/serve/{slug}", get(serve_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_serve_renders_banner_snippet(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(serve_app(state)).unwrap();

    let banner_id = common::create_test_banner(&pool, "promo", 1).await;
    sqlx::query("UPDATE banners SET desktop_image_url = 'https://cdn.example.com/promo.png' WHERE id = $1")
        .bind(banner_id)
        .execute(&pool)
        .await
        .unwrap();
    let placement_id = common::create_test_placement(&pool, "sidebar", "random").await;
    common::assign_banner(&pool, placement_id, banner_id, None, None).await;

    let response = server.get("/serve/sidebar").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("https://cdn.example.com/promo.png"));
    assert!(body.contains(&format!(
        "/click?banner={}&amp;placement={}",
        banner_id, placement_id
    )));
}

#[sqlx::test]
async fn test_serve_records_impression(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(serve_app(state)).unwrap();

    let banner_id = common::create_test_banner(&pool, "tracked", 1).await;
    let placement_id = common::create_test_placement(&pool, "header", "random").await;
    common::assign_banner(&pool, placement_id, banner_id, None, None).await;

    server.get("/serve/header").await.assert_status_ok();

    let event = rx.try_recv().unwrap();
    assert_eq!(event.kind, StatKind::Impression);
    assert_eq!(event.banner_id, banner_id);
    assert_eq!(event.placement_id, placement_id);
}

#[sqlx::test]
async fn test_serve_empty_placement_returns_no_content(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(serve_app(state)).unwrap();

    common::create_test_placement(&pool, "empty", "random").await;

    let response = server.get("/serve/empty").await;
    assert_eq!(response.status_code(), 204);

    // No impression for an empty response.
    assert!(rx.try_recv().is_err());
}

#[sqlx::test]
async fn test_serve_unknown_slug_returns_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(serve_app(state)).unwrap();

    server.get("/serve/missing").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_serve_skips_ineligible_banners(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(serve_app(state)).unwrap();

    let placement_id = common::create_test_placement(&pool, "strict", "random").await;
    let paused = common::create_paused_banner(&pool, "paused").await;
    let future =
        common::create_windowed_banner(&pool, "future", Some(common::date(2099, 1, 1)), None).await;
    common::assign_banner(&pool, placement_id, paused, None, None).await;
    common::assign_banner(&pool, placement_id, future, None, None).await;

    let response = server.get("/serve/strict").await;
    assert_eq!(response.status_code(), 204);
}

#[sqlx::test]
async fn test_serve_mobile_user_agent_gets_mobile_image(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(serve_app(state)).unwrap();

    let banner_id = common::create_test_banner(&pool, "responsive", 1).await;
    sqlx::query(
        "UPDATE banners SET desktop_image_url = 'https://cdn.example.com/d.png', \
         mobile_image_url = 'https://cdn.example.com/m.png' WHERE id = $1",
    )
    .bind(banner_id)
    .execute(&pool)
    .await
    .unwrap();
    let placement_id = common::create_test_placement(&pool, "mobile", "random").await;
    common::assign_banner(&pool, placement_id, banner_id, None, None).await;

    let response = server
        .get("/serve/mobile")
        .add_header(
            "User-Agent",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148",
        )
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("https://cdn.example.com/m.png"));
}

#[sqlx::test]
async fn test_serve_ordered_placement_cycles(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(serve_app(state)).unwrap();

    let placement_id = common::create_test_placement(&pool, "carousel", "ordered").await;
    let a = common::create_test_banner(&pool, "banner-a", 1).await;
    let b = common::create_test_banner(&pool, "banner-b", 1).await;
    let c = common::create_test_banner(&pool, "banner-c", 1).await;
    common::assign_banner(&pool, placement_id, a, None, Some(1)).await;
    common::assign_banner(&pool, placement_id, b, None, Some(2)).await;
    common::assign_banner(&pool, placement_id, c, None, Some(3)).await;

    let mut served = Vec::new();
    for _ in 0..4 {
        let body = server.get("/serve/carousel").await.text();
        for (id, title) in [(a, "banner-a"), (b, "banner-b"), (c, "banner-c")] {
            if body.contains(&format!("banner={}&", id)) || body.contains(title) {
                served.push(title);
                break;
            }
        }
    }

    assert_eq!(served, vec!["banner-a", "banner-b", "banner-c", "banner-a"]);
}
