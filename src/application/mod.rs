//! Application layer services implementing business logic.
//!
//! Services sit between HTTP handlers and the storage trait: they validate
//! input, generate aliases, and translate storage failures into
//! [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Save, resolve and delete mappings
//! - [`services::auth_service::AuthService`] - Basic-Auth credential checks

pub mod services;
