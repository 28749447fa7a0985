//! Application configuration
//!
//! Configuration types and the Figment-based loader merging defaults, an
//! optional TOML file and environment variables.

/// Configuration loading
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
