//! Alias/URL mapping service.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias::{ALIAS_LENGTH, generate_alias, validate_alias};

/// Service for saving, resolving and deleting alias/URL mappings.
///
/// Conflicts are never pre-checked. A generated alias that happens to collide
/// fails the request with [`AppError::Conflict`] exactly like a duplicate URL,
/// and is not retried.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Stores `url` under `alias`, generating a 6-character alias when
    /// `alias` is `None` or empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not absolute or a
    /// supplied alias is malformed, [`AppError::Conflict`] if the URL or alias
    /// is already stored, and [`AppError::Internal`] on storage failures.
    pub async fn save(&self, url: &str, alias: Option<&str>) -> Result<UrlRecord, AppError> {
        validate_target_url(url)?;

        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(custom) => {
                validate_alias(custom)?;
                custom.to_string()
            }
            None => generate_alias(ALIAS_LENGTH),
        };

        let new_record = NewUrlRecord::new(url, alias);

        let id = self
            .repository
            .save_url(&new_record.url, &new_record.alias)
            .await
            .map_err(|e| {
                match &e {
                    StorageError::UrlExists => info!(url, "url already exists"),
                    _ => error!(error = %e, "failed to add url"),
                }
                AppError::from(e)
            })?;

        debug!(id, alias = %new_record.alias, "url added");

        Ok(new_record.into_record(id))
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty alias,
    /// [`AppError::NotFound`] when nothing is stored under it, and
    /// [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::validation("invalid request: alias is empty"));
        }

        self.repository.get_url(alias).await.map_err(|e| {
            match &e {
                StorageError::UrlNotFound => info!(alias, "url not found"),
                _ => error!(error = %e, "failed to get url"),
            }
            AppError::from(e)
        })
    }

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            return Err(AppError::validation("invalid request: alias is empty"));
        }

        self.repository.delete_url(alias).await.map_err(|e| {
            if !matches!(e, StorageError::UrlNotFound) {
                error!(error = %e, "failed to delete url");
            }
            AppError::from(e)
        })?;

        debug!(alias, "url deleted");
        Ok(())
    }

    /// Checks storage reachability and reports the number of stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if storage does not answer. The
    /// storage error is logged, not returned.
    pub async fn health(&self) -> Result<i64, AppError> {
        self.repository.ping().await.map_err(|e| {
            error!(error = %e, "storage ping failed");
            AppError::unavailable("storage unavailable")
        })?;

        self.repository.count().await.map_err(AppError::from)
    }
}

/// Accepts only well-formed absolute URLs.
///
/// The parser silently drops tabs and newlines, so control characters are
/// rejected up front: the stored text must be usable as a `Location` header.
fn validate_target_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::validation("field url is a required field"));
    }

    if url.bytes().any(|b| b.is_ascii_control()) {
        return Err(AppError::validation("field url is not a valid URL"));
    }

    url::Url::parse(url)
        .map(|_| ())
        .map_err(|_| AppError::validation("field url is not a valid URL"))
}
