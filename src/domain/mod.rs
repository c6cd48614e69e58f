//! Domain layer: entity schemas and the persistence contract.
//!
//! # Architecture
//!
//! - [`document`] - The [`document::Document`] trait every entity implements and
//!   the stored [`document::Record`] form
//! - [`entities`] - Booking, Payment, Review and SupportTicket schemas
//! - [`repositories`] - The [`repositories::DocumentStore`] trait implemented by
//!   the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod document;
pub mod entities;
pub mod repositories;
