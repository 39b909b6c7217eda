//! Repository trait definitions for the domain layer.
//!
//! [`UrlRepository`] is the storage contract for alias/URL mappings. The
//! SQLite implementation lives in `crate::infrastructure::persistence`, and a
//! `mockall` mock is generated for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::{StorageError, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
