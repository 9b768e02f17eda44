//! Link creation and resolution service.

use std::sync::Arc;

use crate::application::services::code_allocator::CodeAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::target_url::validate_target_url;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Upper bound for [`LinkService::list_recent`].
pub const MAX_RECENT_LIMIT: i64 = 100;

/// Service for creating, resolving and inspecting short links.
///
/// # Deduplication
///
/// Each target URL maps to at most one code. Lookups by URL run without
/// locking; the create path is serialized by an in-process lock and re-checks
/// the URL once the lock is held, so concurrent submissions of the same URL
/// all observe the same code.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
    create_lock: Mutex<()>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service backed by `link_repository`.
    pub fn new(link_repository: Arc<L>) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone());
        Self::with_allocator(link_repository, allocator)
    }

    /// Creates a link service with an explicitly configured allocator.
    pub fn with_allocator(link_repository: Arc<L>, allocator: CodeAllocator<L>) -> Self {
        Self {
            link_repository,
            allocator,
            create_lock: Mutex::new(()),
        }
    }

    /// Returns the code for `target_url`, creating a new link if none exists.
    ///
    /// Repeated submissions of the same URL return the same code and never
    /// create a second record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or lacks an
    /// `http://`/`https://` prefix.
    ///
    /// Returns [`AppError::Internal`] on database errors. Code collisions on
    /// insert are retried and never returned.
    pub async fn get_or_create(&self, target_url: &str) -> Result<String, AppError> {
        let target_url = validate_target_url(target_url)?;

        if let Some(existing) = self.find_existing(&target_url).await? {
            return Ok(existing);
        }

        let _guard = self.create_lock.lock().await;

        if let Some(existing) = self.find_existing(&target_url).await? {
            return Ok(existing);
        }

        loop {
            let code = self.allocator.allocate().await?;

            match self
                .link_repository
                .insert(NewLink::now(code.clone(), target_url.clone()))
                .await
            {
                Ok(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    info!(code = %link.code, target_url = %link.target_url, "Short link created");
                    return Ok(link.code);
                }
                Err(e) if e.is_conflict() => {
                    metrics::counter!("insert_conflicts_total").increment(1);
                    warn!(code = %code, "Short code taken by a concurrent insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolves a code to its target URL and records one visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self.stats(code).await?;
        let visits = self.link_repository.increment_visits(&link.code).await?;

        metrics::counter!("links_resolved_total").increment(1);
        debug!(code = %link.code, visits, "Short link resolved");

        Ok(link.target_url)
    }

    /// Returns the full record for a code without touching its visit count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists the most recently created links, newest first.
    ///
    /// `limit` is clamped to `0..=MAX_RECENT_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let limit = limit.clamp(0, MAX_RECENT_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }

        self.link_repository.list_recent(limit).await
    }

    async fn find_existing(&self, target_url: &str) -> Result<Option<String>, AppError> {
        let existing = self.link_repository.find_by_target_url(target_url).await?;

        if let Some(link) = &existing {
            metrics::counter!("links_deduplicated_total").increment(1);
            debug!(code = %link.code, "Target URL already shortened");
        }

        Ok(existing.map(|link| link.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str, visits: i64) -> Link {
        Link::new(id, code.to_string(), url.to_string(), visits, Utc::now())
    }

    fn link_from(new_link: &NewLink) -> Link {
        Link::new(
            10,
            new_link.code.clone(),
            new_link.target_url.clone(),
            0,
            new_link.created_at,
        )
    }

    #[tokio::test]
    async fn test_get_or_create_success() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_target_url()
            .withf(|url| url == "https://example.com")
            .times(2)
            .returning(|_| Ok(None));

        mock_link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        mock_link_repo
            .expect_insert()
            .withf(|new_link| new_link.target_url == "https://example.com")
            .times(1)
            .returning(|new_link| Ok(link_from(&new_link)));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let code = service.get_or_create("https://example.com").await.unwrap();
        assert_eq!(code.len(), 6);
    }

    #[tokio::test]
    async fn test_get_or_create_deduplication() {
        let mut mock_link_repo = MockLinkRepository::new();

        let existing_link = create_test_link(5, "exist1", "https://example.com", 3);
        mock_link_repo
            .expect_find_by_target_url()
            .times(1)
            .returning(move |_| Ok(Some(existing_link.clone())));

        mock_link_repo.expect_find_by_code().times(0);
        mock_link_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let code = service.get_or_create("https://example.com").await.unwrap();
        assert_eq!(code, "exist1");
    }

    #[tokio::test]
    async fn test_get_or_create_trims_before_lookup() {
        let mut mock_link_repo = MockLinkRepository::new();

        let existing_link = create_test_link(5, "exist1", "https://example.com", 0);
        mock_link_repo
            .expect_find_by_target_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(move |_| Ok(Some(existing_link.clone())));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let code = service
            .get_or_create("   https://example.com  ")
            .await
            .unwrap();
        assert_eq!(code, "exist1");
    }

    #[tokio::test]
    async fn test_get_or_create_invalid_url() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_find_by_target_url().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        for url in ["", "ftp://x", "example.com"] {
            let result = service.get_or_create(url).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_get_or_create_retries_on_insert_conflict() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_target_url()
            .times(2)
            .returning(|_| Ok(None));

        mock_link_repo
            .expect_find_by_code()
            .times(2)
            .returning(|_| Ok(None));

        let mut inserts = 0;
        mock_link_repo
            .expect_insert()
            .times(2)
            .returning(move |new_link| {
                inserts += 1;
                if inserts == 1 {
                    Err(AppError::conflict(
                        "Unique constraint violation",
                        json!({ "code": new_link.code }),
                    ))
                } else {
                    Ok(link_from(&new_link))
                }
            });

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.get_or_create("https://example.com/race").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_or_create_propagates_store_failure() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_target_url()
            .times(2)
            .returning(|_| Ok(None));
        mock_link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_link_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.get_or_create("https://example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_increments_and_returns_target() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link(1, "abc123", "https://example.com/target", 4);
        mock_link_repo
            .expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        mock_link_repo
            .expect_increment_visits()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(5));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let target = service.resolve("abc123").await.unwrap();
        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));
        mock_link_repo.expect_increment_visits().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.resolve("nope00").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stats_does_not_count_a_visit() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link(1, "abc123", "https://example.com", 7);
        mock_link_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));
        mock_link_repo.expect_increment_visits().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let stats = service.stats("abc123").await.unwrap();
        assert_eq!(stats.visits, 7);
        assert_eq!(stats.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_list_recent_clamps_limit() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_list_recent()
            .withf(|limit| *limit == MAX_RECENT_LIMIT)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.list_recent(10_000).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_recent_non_positive_limit_skips_store() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_list_recent().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.list_recent(0).await.unwrap().is_empty());
        assert!(service.list_recent(-5).await.unwrap().is_empty());
    }
}
