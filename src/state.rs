//! Shared application state injected into HTTP handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service wired to the SQLite store.
pub type SqliteLinkService = LinkService<SqliteLinkRepository>;

/// State shared by every request.
///
/// The pool is the single logical store for the process; the service and the
/// health check both borrow it.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SqliteLinkService>,
    pub pool: Arc<SqlitePool>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the repository and service on top of an open pool.
    pub fn new(pool: Arc<SqlitePool>, config: Config) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let link_service = Arc::new(LinkService::new(link_repository));

        Self {
            link_service,
            pool,
            config: Arc::new(config),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        self.config.short_url(code)
    }
}
