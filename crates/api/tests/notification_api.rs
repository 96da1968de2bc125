//! HTTP-level integration tests for the notification side channel.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, put_json_auth};
use sqlx::PgPool;

use buildease_db::repositories::NotificationRepo;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_owner_scoped_newest_first_capped_at_twenty(pool: PgPool) {
    let alex = common::seed_customer(&pool, "Alex", "alex@example.com").await;
    let priya = common::seed_customer(&pool, "Priya", "priya@example.com").await;

    for i in 0..25 {
        NotificationRepo::create(&pool, alex.id, "milestone", &format!("update {i}"))
            .await
            .unwrap();
    }
    NotificationRepo::create(&pool, priya.id, "bid", "someone else's")
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/notifications", &common::token_for(&alex)).await).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 20, "list is capped at the 20 most recent");
    assert_eq!(arr[0]["text"], "update 24");
    assert!(arr.iter().all(|n| n["user"] == alex.id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_read_returns_notification_and_is_idempotent(pool: PgPool) {
    let alex = common::seed_customer(&pool, "Alex", "alex@example.com").await;
    let token = common::token_for(&alex);
    let notification = NotificationRepo::create(&pool, alex.id, "bid", "A bid arrived")
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/notifications/{}/read", notification.id),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["read"], true);

    // Marking again is a no-op that still succeeds.
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/notifications/{}/read", notification.id),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["read"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_read_on_foreign_notification_returns_404_and_stays_unread(pool: PgPool) {
    let alex = common::seed_customer(&pool, "Alex", "alex@example.com").await;
    let priya = common::seed_customer(&pool, "Priya", "priya@example.com").await;
    let notification = NotificationRepo::create(&pool, alex.id, "bid", "A bid arrived")
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/notifications/{}/read", notification.id),
        serde_json::json!({}),
        &common::token_for(&priya),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner still sees it unread.
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/notifications", &common::token_for(&alex)).await).await;
    assert_eq!(json[0]["read"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notifications_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/notifications").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
