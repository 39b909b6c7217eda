#![allow(dead_code)]

use axum::Router;
use base64::Engine as _;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use shortener::application::services::StaticCredentials;
use shortener::infrastructure::persistence::{MIGRATOR, SqliteUrlRepository};
use shortener::routes::app_router;
use shortener::state::AppState;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// In-memory database on a single long-lived connection, with the schema applied.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

pub fn test_repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(test_repository(pool)),
        Arc::new(StaticCredentials::new(TEST_USER, TEST_PASSWORD)),
    )
}

pub fn create_test_app(pool: SqlitePool) -> Router {
    app_router(create_test_state(pool), Duration::from_secs(5))
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn basic_auth(user: &str, password: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
    format!("Basic {encoded}")
}

pub fn valid_auth() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}
