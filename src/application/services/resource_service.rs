//! Typed persistence gateway for one entity type.

use serde_json::json;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::document::{Document, Patchable, Record};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Create / get / update operations for entity type `D`.
///
/// Validates inbound payloads against the entity schema before anything is
/// written, so a rejected payload never reaches the store.
pub struct ResourceService<D: Document> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> D>,
}

impl<D: Document> ResourceService<D> {
    /// Creates a service bound to `store`.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Validates `input`, applies field defaults and persists the entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing or a
    /// value is outside its domain. Nothing is persisted in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, input: D::Input) -> Result<Record<D>, AppError> {
        input
            .validate()
            .map_err(|e| AppError::validation(format!("{} validation failed", D::NAME), &e))?;

        let entity = D::from_input(input)?;
        let stored = self
            .store
            .insert(D::COLLECTION, serde_json::to_value(&entity)?)
            .await?;

        tracing::info!(collection = D::COLLECTION, id = %stored.id, "Document created");

        Record::from_stored(stored)
    }

    /// Fetches an entity by identifier.
    ///
    /// An identifier that is not a well-formed UUID cannot match any record and
    /// is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_by_id(&self, id: &str) -> Result<Record<D>, AppError> {
        let uuid = Self::parse_id(id)?;

        let stored = self
            .store
            .find_by_id(D::COLLECTION, uuid)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        Record::from_stored(stored)
    }

    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| Self::not_found(id))
    }

    fn not_found(id: &str) -> AppError {
        AppError::not_found(format!("{} not found", D::NAME), json!({ "id": id }))
    }
}

impl<D: Patchable> ResourceService<D> {
    /// Writes the supplied fields of `changes` over the stored entity and
    /// refreshes its update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `changes` breaks a field rule.
    /// Returns [`AppError::NotFound`] if no record has this identifier; nothing
    /// is written in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_by_id(&self, id: &str, changes: D::Changes) -> Result<Record<D>, AppError> {
        changes
            .validate()
            .map_err(|e| AppError::validation(format!("{} validation failed", D::NAME), &e))?;

        let uuid = Self::parse_id(id)?;

        let stored = self
            .store
            .update_by_id(D::COLLECTION, uuid, serde_json::to_value(&changes)?)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!(collection = D::COLLECTION, id = %stored.id, "Document updated");

        Record::from_stored(stored)
    }
}
