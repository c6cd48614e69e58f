//! PostgreSQL document store tests.
//!
//! Need a reachable server in `DATABASE_URL`; run with `cargo test -- --ignored`.

use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use travel_booking_api::domain::repositories::DocumentStore;
use travel_booking_api::infrastructure::persistence::PgDocumentStore;
use uuid::Uuid;

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    let stored = store
        .insert(
            "bookings",
            json!({ "destinationId": "123", "userId": "u1", "status": "pending" }),
        )
        .await
        .unwrap();

    assert_eq!(stored.body["status"], "pending");

    let found = store.find_by_id("bookings", stored.id).await.unwrap();
    assert_eq!(found, Some(stored));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_missing(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    let found = store.find_by_id("payments", Uuid::new_v4()).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_update_merges_and_touches(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    let stored = store
        .insert(
            "bookings",
            json!({ "destinationId": "123", "userId": "u1", "status": "pending" }),
        )
        .await
        .unwrap();

    let updated = store
        .update_by_id("bookings", stored.id, json!({ "status": "confirmed" }))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        updated.body,
        json!({ "destinationId": "123", "userId": "u1", "status": "confirmed" })
    );
    assert_eq!(updated.created_at, stored.created_at);
    assert!(updated.updated_at >= stored.updated_at);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_update_missing_is_none(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool.clone()));

    let result = store
        .update_by_id("bookings", Uuid::new_v4(), json!({ "status": "confirmed" }))
        .await
        .unwrap();

    assert!(result.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_unknown_collection(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    let result = store.insert("destinations", json!({})).await;

    assert!(result.is_err());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let store = PgDocumentStore::new(Arc::new(pool));

    assert!(store.ping().await.is_ok());
    assert_eq!(store.backend(), "postgres");
}
