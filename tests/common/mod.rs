#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use travel_booking_api::domain::repositories::{DocumentStore, StoredDocument};
use travel_booking_api::error::AppError;
use travel_booking_api::infrastructure::persistence::MemoryDocumentStore;
use travel_booking_api::routes::app_router;
use travel_booking_api::state::AppState;
use uuid::Uuid;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryDocumentStore::new()))
}

pub fn make_server() -> TestServer {
    server_for(create_test_state())
}

pub fn server_for(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));

    TestServer::new(app).unwrap()
}

/// Store whose backend is unreachable: every call fails.
pub struct UnreachableStore;

impl UnreachableStore {
    fn error() -> AppError {
        AppError::internal("Database error", json!({}))
    }
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, _collection: &str, _body: Value) -> Result<StoredDocument, AppError> {
        Err(Self::error())
    }

    async fn find_by_id(
        &self,
        _collection: &str,
        _id: Uuid,
    ) -> Result<Option<StoredDocument>, AppError> {
        Err(Self::error())
    }

    async fn update_by_id(
        &self,
        _collection: &str,
        _id: Uuid,
        _changes: Value,
    ) -> Result<Option<StoredDocument>, AppError> {
        Err(Self::error())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(Self::error())
    }
}
