//! Error types for the timeline engine
//!
//! Layout itself never fails; only configuration can be rejected.

use thiserror::Error;

/// Result type alias for timeline operations.
pub type Result<T> = std::result::Result<T, TimelineError>;

/// Errors raised while building or loading a [`crate::TimelineConfig`]
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A configuration value is out of range
    #[error("Invalid timeline configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read a config file
    #[error("Failed to read timeline config: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse timeline config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
