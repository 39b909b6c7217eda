//! Utility functions shared across layers.
//!
//! - [`alias`] - Random alias generation and custom alias validation

pub mod alias;
