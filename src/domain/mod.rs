//! Domain layer containing the link entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define contracts implemented by
//! [`crate::infrastructure::persistence`], and business rules live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
