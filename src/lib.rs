//! # Shortener
//!
//! A minimal URL shortening service built with Axum and SQLite.
//!
//! A client posts a long URL (and optionally an alias) to the authenticated
//! `/url` endpoint; visitors hitting `/{alias}` are redirected to the stored
//! URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the storage contract
//! - **Application Layer** ([`application`]) - Alias generation, validation, auth
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, StaticCredentials, UrlService};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{StorageError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
