//! PostgreSQL implementation of the document store.
//!
//! Each collection is a table holding one JSONB document per row (see
//! `migrations/`). Queries are built at runtime; table names come from a fixed
//! allow-list, never from request input.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::repositories::{DocumentStore, StoredDocument};
use crate::error::AppError;

/// Collections backed by a table created in `migrations/`.
const COLLECTIONS: [&str; 4] = ["bookings", "payments", "reviews", "support_tickets"];

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    document: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            body: row.document.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL document store.
pub struct PgDocumentStore {
    pool: Arc<PgPool>,
}

impl PgDocumentStore {
    /// Creates a new store over a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn table(collection: &str) -> Result<&'static str, AppError> {
        COLLECTIONS
            .iter()
            .copied()
            .find(|known| *known == collection)
            .ok_or_else(|| {
                AppError::internal("Unknown collection", json!({ "collection": collection }))
            })
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, collection: &str, body: Value) -> Result<StoredDocument, AppError> {
        let table = Self::table(collection)?;
        let sql = format!(
            "INSERT INTO {table} (document) VALUES ($1) \
             RETURNING id, document, created_at, updated_at"
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(Json(body))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<StoredDocument>, AppError> {
        let table = Self::table(collection)?;
        let sql = format!(
            "SELECT id, document, created_at, updated_at FROM {table} WHERE id = $1"
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        changes: Value,
    ) -> Result<Option<StoredDocument>, AppError> {
        let table = Self::table(collection)?;
        // `||` on two JSONB objects overwrites matching keys and keeps the rest.
        let sql = format!(
            "UPDATE {table} SET document = document || $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, document, created_at, updated_at"
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(id)
            .bind(Json(changes))
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_collections_resolve() {
        for collection in COLLECTIONS {
            assert_eq!(PgDocumentStore::table(collection).unwrap(), collection);
        }
    }

    #[test]
    fn test_unknown_collection_rejected() {
        let result = PgDocumentStore::table("bookings; DROP TABLE bookings");
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
