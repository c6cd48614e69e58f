//! Untyped document store interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;

/// A JSON document as held by the store, with the identifier and timestamps
/// the store assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single-document operations on named collections of JSON documents.
///
/// The store owns identifiers and timestamps. Every call touches exactly one
/// document; there are no transactions spanning calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDocumentStore`] - PostgreSQL (JSONB)
/// - [`crate::infrastructure::persistence::MemoryDocumentStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and health output, e.g. `"postgres"`.
    fn backend(&self) -> &'static str;

    /// Persists a new document, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or unknown collections.
    async fn insert(&self, collection: &str, body: Value) -> Result<StoredDocument, AppError>;

    /// Looks a document up by identifier. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<StoredDocument>, AppError>;

    /// Merges `changes` (a JSON object) into the stored document and refreshes
    /// `updated_at`. Returns `Ok(None)` without mutating anything if no
    /// document has this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        changes: Value,
    ) -> Result<Option<StoredDocument>, AppError>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
