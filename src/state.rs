//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, CredentialVerifier, UrlService};
use crate::domain::repositories::UrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRepository>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
            auth_service: Arc::new(AuthService::new(verifier)),
        }
    }
}
