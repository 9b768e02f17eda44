//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for [`Link`] records.
///
/// Implementations own their locking and transaction discipline: `insert` and
/// `increment_visits` must be safe under arbitrary concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its exact target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with zero visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken. The check is
    /// enforced by the storage engine, so it holds under concurrent inserts.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Atomically adds one visit and returns the updated count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_visits(&self, code: &str) -> Result<i64, AppError>;

    /// Lists up to `limit` links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;
}
