mod common;

use axum_test::TestServer;
use banner_rotator::api::routes::admin_routes;
use serde_json::{Value, json};
use sqlx::PgPool;

fn api_server(state: banner_rotator::AppState) -> TestServer {
    let app = axum::Router::new()
        .nest("/api", admin_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_create_placement(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = api_server(state);

    let response = server
        .post("/api/placements")
        .json(&json!({
            "slug": "home-hero",
            "name": "Home hero",
            "rotation_strategy": "weighted"
        }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["slug"], "home-hero");
    assert_eq!(body["rotation_strategy"], "weighted");
    // The rotation cursor is internal state.
    assert!(body.get("rotation_cursor").is_none());
}

#[sqlx::test]
async fn test_create_placement_rejects_bad_slug(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = api_server(state);

    let response = server
        .post("/api/placements")
        .json(&json!({"slug": "Home Hero!", "name": "Home hero"}))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_placement_conflicting_slug(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    common::create_test_placement(&pool, "sidebar", "random").await;

    let response = server
        .post("/api/placements")
        .json(&json!({"slug": "sidebar", "name": "Another sidebar"}))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[sqlx::test]
async fn test_update_placement_strategy(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    let placement_id = common::create_test_placement(&pool, "switchable", "random").await;

    let response = server
        .patch(&format!("/api/placements/{}", placement_id))
        .json(&json!({"rotation_strategy": "ordered"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["rotation_strategy"], "ordered");
    assert_eq!(body["slug"], "switchable");
}

#[sqlx::test]
async fn test_delete_placement(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    let placement_id = common::create_test_placement(&pool, "doomed", "random").await;

    let response = server
        .delete(&format!("/api/placements/{}", placement_id))
        .await;
    assert_eq!(response.status_code(), 204);

    server
        .get(&format!("/api/placements/{}", placement_id))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_put_placement_banners_replaces_list(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    let placement_id = common::create_test_placement(&pool, "lineup", "ordered").await;
    let a = common::create_test_banner(&pool, "a", 1).await;
    let b = common::create_test_banner(&pool, "b", 1).await;

    let response = server
        .put(&format!("/api/placements/{}/banners", placement_id))
        .json(&json!({"banners": [
            {"banner_id": b, "display_order": 1, "weight_override": 4},
            {"banner_id": a, "display_order": 2}
        ]}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], b);
    assert_eq!(items[0]["weight_override"], 4);
    assert_eq!(items[1]["id"], a);
}

#[sqlx::test]
async fn test_put_placement_banners_rejects_duplicates(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    let placement_id = common::create_test_placement(&pool, "dupes", "random").await;
    let banner_id = common::create_test_banner(&pool, "twice", 1).await;

    let response = server
        .put(&format!("/api/placements/{}/banners", placement_id))
        .json(&json!({"banners": [
            {"banner_id": banner_id},
            {"banner_id": banner_id}
        ]}))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_put_banners_unknown_placement_returns_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    let banner_id = common::create_test_banner(&pool, "orphan", 1).await;

    let response = server
        .put("/api/placements/424242/banners")
        .json(&json!({"banners": [{"banner_id": banner_id}]}))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_get_placement_banners(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = api_server(state);

    let placement_id = common::create_test_placement(&pool, "filled", "weighted").await;
    let banner_id = common::create_test_banner(&pool, "assigned", 2).await;
    common::assign_banner(&pool, placement_id, banner_id, Some(9), None).await;

    let response = server
        .get(&format!("/api/placements/{}/banners", placement_id))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "assigned");
    assert_eq!(items[0]["weight_override"], 9);
}
