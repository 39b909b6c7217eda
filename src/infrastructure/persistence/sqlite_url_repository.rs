//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::sync::Arc;

use super::MIGRATOR;
use crate::domain::repositories::{StorageError, UrlRepository};

/// SQLite repository for alias/URL mappings.
///
/// Conflict detection relies entirely on the `UNIQUE` constraints of the
/// `url` table: saving is a single `INSERT`, and a constraint violation is
/// reported as [`StorageError::UrlExists`].
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository over an already migrated pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens the storage file at `storage_path`, creating it if absent, and
    /// applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the file cannot be opened and
    /// [`StorageError::Migrate`] if the schema cannot be applied.
    pub async fn connect(storage_path: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        MIGRATOR.run(&pool).await?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }
}

fn map_insert_error(e: sqlx::Error) -> StorageError {
    if e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return StorageError::UrlExists;
    }

    StorageError::Database(e)
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        if url.is_empty() {
            return Err(StorageError::InvalidInput("url must not be empty".into()));
        }
        if alias.is_empty() {
            return Err(StorageError::InvalidInput("alias must not be empty".into()));
        }

        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_insert_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StorageError::UrlNotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::UrlNotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
