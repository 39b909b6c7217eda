//! Process-wide `tracing` subscriber setup.
//!
//! | `ENV`   | Format | Default level |
//! |---------|--------|---------------|
//! | `local` | text   | `debug`       |
//! | `dev`   | JSON   | `debug`       |
//! | `prod`  | JSON   | `info`        |
//!
//! `RUST_LOG` replaces the default level filter when set.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Default filter directive for an environment.
pub fn default_directive(env: Environment) -> &'static str {
    match env {
        Environment::Local | Environment::Dev => "debug",
        Environment::Prod => "info",
    }
}

/// Installs the global subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match env {
        Environment::Local => builder.with_target(false).init(),
        Environment::Dev | Environment::Prod => builder.json().with_current_span(true).init(),
    }
}
