//! Document store implementations.
//!
//! - [`PgDocumentStore`] - PostgreSQL, one JSONB table per collection
//! - [`MemoryDocumentStore`] - in-process map for local runs and tests

pub mod memory_document_store;
pub mod pg_document_store;

pub use memory_document_store::MemoryDocumentStore;
pub use pg_document_store::PgDocumentStore;
