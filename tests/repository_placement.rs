mod common;

use banner_rotator::domain::entities::{BannerAssignment, NewPlacement, RotationStrategy};
use banner_rotator::domain::repositories::PlacementRepository;
use banner_rotator::infrastructure::persistence::PgPlacementRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_placement(slug: &str, strategy: RotationStrategy) -> NewPlacement {
    NewPlacement {
        slug: slug.to_string(),
        name: format!("Placement {}", slug),
        rotation_strategy: strategy,
    }
}

#[sqlx::test]
async fn test_create_and_find_by_slug(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool));

    let created = repo
        .create(new_placement("sidebar", RotationStrategy::Weighted))
        .await
        .unwrap();
    assert_eq!(created.slug, "sidebar");
    assert_eq!(created.rotation_strategy, RotationStrategy::Weighted);
    assert_eq!(created.rotation_cursor, 0);

    let found = repo.find_by_slug("sidebar").await.unwrap();
    assert_eq!(found.unwrap().id, created.id);

    assert!(repo.find_by_slug("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_slug_is_rejected(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool));

    repo.create(new_placement("header", RotationStrategy::Random))
        .await
        .unwrap();

    let result = repo
        .create(new_placement("header", RotationStrategy::Random))
        .await;
    assert!(result.is_err());
}

#[sqlx::test]
async fn test_list_and_count(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool.clone()));

    common::create_test_placement(&pool, "one", "random").await;
    common::create_test_placement(&pool, "two", "ordered").await;

    let placements = repo.list(1, 20).await.unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_set_banners_replaces_assignments(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool.clone()));

    let placement_id = common::create_test_placement(&pool, "footer", "random").await;
    let a = common::create_test_banner(&pool, "a", 1).await;
    let b = common::create_test_banner(&pool, "b", 1).await;
    let c = common::create_test_banner(&pool, "c", 1).await;

    repo.set_banners(
        placement_id,
        vec![
            BannerAssignment {
                banner_id: a,
                weight_override: Some(5),
                display_order: Some(2),
            },
            BannerAssignment {
                banner_id: b,
                weight_override: None,
                display_order: Some(1),
            },
        ],
    )
    .await
    .unwrap();

    // A second call fully replaces the previous list.
    repo.set_banners(
        placement_id,
        vec![BannerAssignment {
            banner_id: c,
            weight_override: None,
            display_order: None,
        }],
    )
    .await
    .unwrap();

    let banners = repo.list_banners(placement_id).await.unwrap();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].banner.id, c);
}

#[sqlx::test]
async fn test_set_banners_rejects_unknown_banner(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool.clone()));

    let placement_id = common::create_test_placement(&pool, "hero", "random").await;

    let result = repo
        .set_banners(
            placement_id,
            vec![BannerAssignment {
                banner_id: 424242,
                weight_override: None,
                display_order: None,
            }],
        )
        .await;
    assert!(result.is_err());

    // The failed transaction must not leave partial rows behind.
    let banners = repo.list_banners(placement_id).await.unwrap();
    assert!(banners.is_empty());
}

#[sqlx::test]
async fn test_list_banners_orders_by_display_order(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool.clone()));

    let placement_id = common::create_test_placement(&pool, "strip", "ordered").await;
    let first = common::create_test_banner(&pool, "first", 1).await;
    let second = common::create_test_banner(&pool, "second", 1).await;
    let unordered = common::create_test_banner(&pool, "unordered", 1).await;

    common::assign_banner(&pool, placement_id, unordered, None, None).await;
    common::assign_banner(&pool, placement_id, second, None, Some(2)).await;
    common::assign_banner(&pool, placement_id, first, None, Some(1)).await;

    let banners = repo.list_banners(placement_id).await.unwrap();
    let ids: Vec<i64> = banners.iter().map(|pb| pb.banner.id).collect();

    // Explicit positions first, entries without one trail behind.
    assert_eq!(ids, vec![first, second, unordered]);
}

#[sqlx::test]
async fn test_advance_cursor_returns_pre_increment_values(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool.clone()));

    let placement_id = common::create_test_placement(&pool, "ticker", "ordered").await;

    assert_eq!(repo.advance_cursor(placement_id).await.unwrap(), 0);
    assert_eq!(repo.advance_cursor(placement_id).await.unwrap(), 1);
    assert_eq!(repo.advance_cursor(placement_id).await.unwrap(), 2);
}

#[sqlx::test]
async fn test_advance_cursor_unknown_placement_fails(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool));

    assert!(repo.advance_cursor(424242).await.is_err());
}

#[sqlx::test]
async fn test_delete_placement_cascades_assignments(pool: PgPool) {
    let repo = PgPlacementRepository::new(Arc::new(pool.clone()));

    let placement_id = common::create_test_placement(&pool, "gone", "random").await;
    let banner_id = common::create_test_banner(&pool, "survivor", 1).await;
    common::assign_banner(&pool, placement_id, banner_id, None, None).await;

    assert!(repo.delete(placement_id).await.unwrap());

    let assignments: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM placement_banners WHERE placement_id = $1")
            .bind(placement_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(assignments, 0);

    // The banner itself is untouched.
    let banners: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banners WHERE id = $1")
        .bind(banner_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(banners, 1);
}
