//! Domain layer containing the URL mapping entity and the storage contract.
//!
//! Nothing in here knows about HTTP or SQL. Concrete storage lives in
//! [`crate::infrastructure::persistence`]; orchestration lives in
//! [`crate::application::services`].
//!
//! - [`entities`] - The persisted alias/URL record
//! - [`repositories`] - Storage trait and its error taxonomy

pub mod entities;
pub mod repositories;
