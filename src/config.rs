//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly
//! to [`crate::server::run`]. Nothing here mutates the process environment.
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite file (created if absent)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic-Auth credentials for `/url`
//!
//! ## Optional Variables
//!
//! - `ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `HTTP_ADDR` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 5)
//! - `RUST_LOG` - Overrides the log filter derived from `ENV`

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Deployment environment, controlling log verbosity and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("ENV must be one of 'local', 'dev', 'prod', got '{other}'"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        })
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub env: Environment,
    pub storage_path: String,
    pub http: HttpServerConfig,
}

/// Listener and Basic-Auth settings.
#[derive(Clone)]
pub struct HttpServerConfig {
    pub addr: String,
    pub timeout: Duration,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for HttpServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServerConfig")
            .field("addr", &self.addr)
            .field("timeout", &self.timeout)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("env", &self.env)
            .field("storage_path", &self.storage_path)
            .field("http", &self.http)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed.
    pub fn from_env() -> Result<Self> {
        let environment = env::var("ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<Environment>()?;

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let addr = env::var("HTTP_ADDR").unwrap_or_else(|_| "localhost:8080".to_string());

        let timeout = match env::var("HTTP_TIMEOUT") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("HTTP_TIMEOUT must be a number of seconds, got '{v}'"))?,
            Err(_) => 5,
        };

        let user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        Ok(Self {
            env: environment,
            storage_path,
            http: HttpServerConfig {
                addr,
                timeout: Duration::from_secs(timeout),
                user,
                password,
            },
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `addr` is not in `host:port` form
    /// - `timeout` is zero
    /// - the Basic-Auth user or password is empty
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.http.addr.contains(':') {
            anyhow::bail!(
                "HTTP_ADDR must be in format 'host:port', got '{}'",
                self.http.addr
            );
        }

        if self.http.timeout.is_zero() {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.http.user.is_empty() || self.http.password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Logs a configuration summary (without the password).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.http.addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {:?}", self.http.timeout);
        tracing::info!("  Basic auth user: {}", self.http.user);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
