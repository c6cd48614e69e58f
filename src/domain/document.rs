//! Schema contract shared by every persisted entity.
//!
//! An entity type describes which collection it lives in, which input it is
//! built from, and how that input is turned into the entity (applying field
//! defaults). The stored form wraps the entity in a [`Record`] carrying the
//! identifier and timestamps owned by the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;
use validator::Validate;

use crate::domain::repositories::StoredDocument;
use crate::error::AppError;

/// A persisted entity type.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection (table) the entity is stored in.
    const COLLECTION: &'static str;

    /// Human-readable entity name used in messages, e.g. `"Booking"`.
    const NAME: &'static str;

    /// Inbound payload the entity is constructed from.
    type Input: Validate + Send;

    /// Builds the entity from an already validated input, filling defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field cannot be converted to its
    /// stored type.
    fn from_input(input: Self::Input) -> Result<Self, AppError>;
}

/// An entity that supports partial updates.
pub trait Patchable: Document {
    /// Set of mutable fields. Serializes to a JSON object containing only the
    /// supplied fields.
    type Changes: Validate + Serialize + Send;
}

/// Stored form of an entity.
///
/// Serializes flat: `{ "id": ..., <entity fields>, "createdAt": ..., "updatedAt": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<D> {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: D,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<D: Document> Record<D> {
    /// Decodes a raw stored document into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored body no longer matches the
    /// entity schema.
    pub fn from_stored(stored: StoredDocument) -> Result<Self, AppError> {
        Ok(Self {
            id: stored.id,
            document: serde_json::from_value(stored.body)?,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        })
    }
}
