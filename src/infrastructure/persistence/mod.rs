//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`database`] - Pool construction and schema migrations
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod database;
pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
