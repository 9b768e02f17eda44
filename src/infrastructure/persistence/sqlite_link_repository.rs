//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// SQLite repository for link storage and retrieval.
///
/// Code uniqueness comes from the `UNIQUE` constraint on `links.code`; visit
/// counting is a single `UPDATE ... RETURNING` statement, so neither depends on
/// a read-then-write from the caller.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    visits: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.code, r.target_url, r.visits, r.created_at)
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, visits, created_at
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, visits, created_at
            FROM links
            WHERE target_url = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(target_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url, visits, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING id, code, target_url, visits, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .bind(new_link.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            ),
            other => other,
        })?;

        Ok(row.into())
    }

    async fn increment_visits(&self, code: &str) -> Result<i64, AppError> {
        let visits = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE links
            SET visits = visits + 1
            WHERE code = ?1
            RETURNING visits
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        visits.ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, visits, created_at
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }
}
