//! SQLite repository implementation.
//!
//! The schema is embedded from `migrations/` at compile time and applied by
//! [`SqliteUrlRepository::connect`], so a fresh storage file is created and
//! migrated on first start.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
