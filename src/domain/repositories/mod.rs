//! Persistence contracts for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. A mock is
//! generated with `mockall` for unit tests.

pub mod document_store;

pub use document_store::{DocumentStore, StoredDocument};

#[cfg(test)]
pub use document_store::MockDocumentStore;
