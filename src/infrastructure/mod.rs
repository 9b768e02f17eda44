//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite connection management and repository implementations

pub mod persistence;
