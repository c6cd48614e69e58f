//! In-process document store.
//!
//! Used when `STORAGE_BACKEND=memory` and by the HTTP integration tests.
//! Contents are lost when the process exits.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::{DocumentStore, StoredDocument};
use crate::error::AppError;

type Collection = HashMap<Uuid, StoredDocument>;

/// Document store backed by a map per collection.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, collection: &str, body: Value) -> Result<StoredDocument, AppError> {
        let now = Utc::now();
        let stored = StoredDocument {
            id: Uuid::new_v4(),
            body,
            created_at: now,
            updated_at: now,
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<StoredDocument>, AppError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(&id))
            .cloned())
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        changes: Value,
    ) -> Result<Option<StoredDocument>, AppError> {
        let mut collections = self.collections.write().await;

        let Some(stored) = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(&id))
        else {
            return Ok(None);
        };

        match (&mut stored.body, changes) {
            (Value::Object(body), Value::Object(changes)) => body.extend(changes),
            (body, changes) => *body = changes,
        }
        stored.updated_at = Utc::now();

        Ok(Some(stored.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let store = MemoryDocumentStore::new();

        let stored = store
            .insert("bookings", json!({ "status": "pending" }))
            .await
            .unwrap();

        assert_eq!(stored.created_at, stored.updated_at);
        assert_eq!(stored.body["status"], "pending");

        let found = store.find_by_id("bookings", stored.id).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryDocumentStore::new();

        let stored = store.insert("bookings", json!({})).await.unwrap();

        let found = store.find_by_id("payments", stored.id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryDocumentStore::new();
        let stored = store
            .insert("bookings", json!({ "userId": "u1", "status": "pending" }))
            .await
            .unwrap();

        let updated = store
            .update_by_id("bookings", stored.id, json!({ "status": "confirmed" }))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.body, json!({ "userId": "u1", "status": "confirmed" }));
        assert_eq!(updated.created_at, stored.created_at);
        assert!(updated.updated_at >= stored.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_document_returns_none() {
        let store = MemoryDocumentStore::new();
        let stored = store
            .insert("bookings", json!({ "status": "pending" }))
            .await
            .unwrap();

        let result = store
            .update_by_id("bookings", Uuid::new_v4(), json!({ "status": "x" }))
            .await
            .unwrap();

        assert!(result.is_none());

        let untouched = store.find_by_id("bookings", stored.id).await.unwrap();
        assert_eq!(untouched, Some(stored));
    }
}
