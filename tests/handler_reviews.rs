mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn test_create_review_success() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .json(&json!({
            "destinationId": "123",
            "userId": "u1",
            "comment": "Amazing!",
            "rating": 5
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Review submitted");
    assert_eq!(body["review"]["rating"], 5);
    assert_eq!(body["review"]["comment"], "Amazing!");
    assert!(body["review"].get("bookingId").is_none());
}

#[tokio::test]
async fn test_create_review_rating_out_of_range() {
    let server = common::make_server();

    for rating in [0, 6] {
        let response = server
            .post("/api/reviews")
            .json(&json!({ "destinationId": "123", "userId": "u1", "rating": rating }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["details"]["rating"].is_array());
    }
}

#[tokio::test]
async fn test_create_review_missing_rating() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .json(&json!({ "destinationId": "123", "userId": "u1", "comment": "Nice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_review_round_trip() {
    let server = common::make_server();

    let created = server
        .post("/api/reviews")
        .json(&json!({
            "bookingId": "b-1",
            "destinationId": "123",
            "userId": "u1",
            "rating": 3
        }))
        .await
        .json::<Value>();
    let id = created["review"]["id"].as_str().unwrap();

    let response = server.get(&format!("/api/reviews/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created["review"]);
}

#[tokio::test]
async fn test_get_review_not_found() {
    let server = common::make_server();

    let response = server
        .get(&format!("/api/reviews/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_review_oversized_rating_is_out_of_range() {
    let server = common::make_server();

    let response = server
        .post("/api/reviews")
        .json(&json!({ "destinationId": "123", "userId": "u1", "rating": 10_000_000_000i64 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Review validation failed");
    assert!(body["error"]["details"]["rating"].is_array());
}

#[tokio::test]
async fn test_create_review_wrong_rating_type_uses_error_envelope() {
    let server = common::make_server();

    for rating in [json!("4"), json!(4.5)] {
        let response = server
            .post("/api/reviews")
            .json(&json!({ "destinationId": "123", "userId": "u1", "rating": rating }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error");
        assert!(body["error"]["details"]["rating"].is_array());
    }
}
