//! Error types for tracer configuration.
//!
//! Carrier reads and writes never fail; only loading and validating a
//! [`TracerConfig`](crate::config::TracerConfig) produces these errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    /// Malformed configuration value
    #[error("Tracer configuration error: {0}")]
    Configuration(String),

    /// JSON configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TraceError>;
