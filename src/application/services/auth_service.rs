//! Authentication service for HTTP Basic credentials.

use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::error::AppError;

/// Decides whether a username/password pair is acceptable.
///
/// [`StaticCredentials`] covers the single configured pair; other sources
/// (a user table, an external identity provider) plug in by implementing
/// this trait.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// One fixed username/password pair.
///
/// Credentials are stored and compared as SHA-256 digests.
pub struct StaticCredentials {
    username: [u8; 32],
    password: [u8; 32],
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: digest(username),
            password: digest(password),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = digest(username) == self.username;
        let password_ok = digest(password) == self.password;
        user_ok & password_ok
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Service for authenticating requests carrying Basic credentials.
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Checks a decoded Basic-Auth pair.
    ///
    /// A missing password is treated as an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the verifier rejects the pair.
    pub fn authenticate(&self, username: &str, password: Option<&str>) -> Result<(), AppError> {
        if self.verifier.verify(username, password.unwrap_or_default()) {
            return Ok(());
        }

        tracing::debug!(username, "rejected basic auth credentials");
        Err(AppError::unauthorized("unauthorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_accept_configured_pair() {
        let creds = StaticCredentials::new("admin", "secret");
        assert!(creds.verify("admin", "secret"));
    }

    #[test]
    fn test_static_credentials_reject_wrong_pair() {
        let creds = StaticCredentials::new("admin", "secret");
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "secret"));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn test_authenticate_delegates_to_verifier() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .withf(|user, password| user == "alice" && password == "pw")
            .times(1)
            .return_const(true);

        let service = AuthService::new(Arc::new(verifier));

        assert!(service.authenticate("alice", Some("pw")).is_ok());
    }

    #[test]
    fn test_authenticate_missing_password_is_empty() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .withf(|_, password| password.is_empty())
            .times(1)
            .return_const(false);

        let service = AuthService::new(Arc::new(verifier));

        let result = service.authenticate("alice", None);
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized(_)));
    }
}
