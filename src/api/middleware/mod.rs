//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, request ids, access logging, tracing, panic
//! recovery and request timeouts.

pub mod access_log;
pub mod auth;
pub mod panic;
pub mod request_id;
pub mod timeout;
pub mod tracing;
