#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortly::config::Config;
use shortly::infrastructure::persistence::database;
use shortly::prelude::*;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn setup_pool() -> SqlitePool {
    let pool = database::connect_in_memory().await.unwrap();
    database::migrate(&pool).await.unwrap();
    pool
}

/// A WAL-mode database file with a multi-connection pool, so concurrent
/// statements really contend for the write lock.
pub struct FileDb {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl FileDb {
    pub async fn cleanup(self) {
        self.pool.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

pub fn temp_db_config(max_connections: u32) -> (Config, PathBuf) {
    let path = std::env::temp_dir().join(format!("shortly-test-{}.db", rand::random::<u64>()));
    let mut config = test_config();
    config.database_url = format!("sqlite://{}", path.display());
    config.db_max_connections = max_connections;
    (config, path)
}

pub async fn setup_file_db(max_connections: u32) -> FileDb {
    let (config, path) = temp_db_config(max_connections);
    let pool = database::connect(&config).await.unwrap();
    database::migrate(&pool).await.unwrap();
    FileDb { pool, path }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: "http://sho.rt".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        recent_links_limit: 20,
        db_max_connections: 1,
        db_busy_timeout: 5,
    }
}

pub fn create_test_service(pool: &SqlitePool) -> Arc<LinkService<SqliteLinkRepository>> {
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    Arc::new(LinkService::new(repo))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), test_config())
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    create_test_link_at(pool, code, url, Utc::now()).await;
}

pub async fn create_test_link_at(pool: &SqlitePool, code: &str, url: &str, at: DateTime<Utc>) {
    sqlx::query("INSERT INTO links (code, target_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn visits(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT visits FROM links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
