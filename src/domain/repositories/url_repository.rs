//! Repository trait for alias/URL mapping storage.

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`UrlRepository`].
///
/// `UrlExists` and `UrlNotFound` are the two outcomes callers are expected to
/// branch on; everything else is an opaque storage failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias or the URL is already stored.
    #[error("url exists")]
    UrlExists,

    /// No record matches the requested alias.
    #[error("url not found")]
    UrlNotFound,

    /// Arguments rejected before reaching the store.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Repository interface for alias/URL mappings.
///
/// Uniqueness of both `alias` and `url` is enforced by the backing store.
/// Implementations must not pre-check with a lookup; a constraint violation
/// on insert is the single source of truth for conflicts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns the identifier assigned by storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlExists`] if either the alias or the URL is
    /// already present, [`StorageError::InvalidInput`] if either argument is
    /// empty, and [`StorageError::Database`] on any other failure.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Looks up the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] when no record matches.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] when no record matches, so a
    /// repeated delete reports the same outcome as deleting a never-saved alias.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StorageError>;

    /// Round-trips a trivial query to check that storage is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
