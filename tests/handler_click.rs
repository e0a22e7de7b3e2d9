mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use banner_rotator::api::handlers::click_handler;
use banner_rotator::domain::stat_event::StatKind;
use sqlx::PgPool;

fn click_app(state: banner_rotator::AppState) -> Router {
    Router::new()
        .route("/click", get(click_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_click_redirects_to_target(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(click_app(state)).unwrap();

    let banner_id = common::create_test_banner(&pool, "landing", 1).await;
    let placement_id = common::create_test_placement(&pool, "sidebar", "random").await;

    let response = server
        .get("/click")
        .add_query_param("banner", banner_id)
        .add_query_param("placement", placement_id)
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/landing");
}

#[sqlx::test]
async fn test_click_records_event(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(click_app(state)).unwrap();

    let banner_id = common::create_test_banner(&pool, "tracked", 1).await;
    let placement_id = common::create_test_placement(&pool, "header", "random").await;

    server
        .get("/click")
        .add_query_param("banner", banner_id)
        .add_query_param("placement", placement_id)
        .await;

    let event = rx.try_recv().unwrap();
    assert_eq!(event.kind, StatKind::Click);
    assert_eq!(event.banner_id, banner_id);
    assert_eq!(event.placement_id, placement_id);
}

#[sqlx::test]
async fn test_click_unknown_banner_returns_not_found(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(click_app(state)).unwrap();

    let placement_id = common::create_test_placement(&pool, "lonely", "random").await;

    let response = server
        .get("/click")
        .add_query_param("banner", 424242)
        .add_query_param("placement", placement_id)
        .await;

    response.assert_status_not_found();
    assert!(rx.try_recv().is_err());
}

#[sqlx::test]
async fn test_click_mobile_user_agent_gets_mobile_target(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(click_app(state)).unwrap();

    let banner_id = common::create_test_banner(&pool, "device-split", 1).await;
    sqlx::query("UPDATE banners SET mobile_url = 'https://m.example.com/landing' WHERE id = $1")
        .bind(banner_id)
        .execute(&pool)
        .await
        .unwrap();
    let placement_id = common::create_test_placement(&pool, "mobile", "random").await;

    let response = server
        .get("/click")
        .add_query_param("banner", banner_id)
        .add_query_param("placement", placement_id)
        .add_header("User-Agent", "Mozilla/5.0 (Linux; Android 14) Mobile Safari")
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://m.example.com/landing");
}

#[sqlx::test]
async fn test_click_missing_params_is_bad_request(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(click_app(state)).unwrap();

    let response = server.get("/click").await;
    response.assert_status_bad_request();
}
