//! Core domain entities.
//!
//! A [`UrlRecord`] is the only persisted entity. [`NewUrlRecord`] carries the
//! fields supplied on creation, before storage assigns an identifier.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
