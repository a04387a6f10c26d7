//! Configuration loading and layering.
//!
//! Handles `.userfetch.toml` loading and environment variable resolution
//! with proper priority ordering.

pub mod loader;

pub use loader::{ApiConfig, Config, ConfigError};
