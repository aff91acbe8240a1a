//! Error types for avatar-stage
//!
//! Only the edges can fail: reading configuration and decoding avatar records.
//! Everything on the per-frame path is total.

use thiserror::Error;

/// Main error type for avatar-stage
#[derive(Error, Debug)]
pub enum StageError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Avatar error: {0}")]
    Avatar(#[from] AvatarError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Avatar record errors
#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("Failed to read avatar record: {0}")]
    ReadFile(String),

    #[error("Failed to decode avatar record: {0}")]
    Decode(String),
}

/// Result type alias for avatar-stage operations
pub type Result<T> = std::result::Result<T, StageError>;
