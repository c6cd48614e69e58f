//! Infrastructure layer for external integrations.
//!
//! Implements the persistence interface defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Document store implementations (PostgreSQL and in-memory)

pub mod persistence;
