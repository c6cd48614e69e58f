//! Application layer services.
//!
//! Services bind the untyped [`crate::domain::repositories::DocumentStore`] to
//! entity schemas and give HTTP handlers a typed API.
//!
//! # Available Services
//!
//! - [`services::resource_service::ResourceService`] - create / get / update
//!   for any [`crate::domain::document::Document`]

pub mod services;
