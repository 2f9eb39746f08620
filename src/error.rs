//! # Error Types
//!
//! Custom error types for VR Flight using `thiserror`.

use thiserror::Error;

/// Main error type for VR Flight
#[derive(Debug, Error)]
pub enum FlightError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Flight log serialization errors
    #[error("Flight log error: {0}")]
    FlightLog(#[from] serde_json::Error),
}

/// Result type alias for VR Flight
pub type Result<T> = std::result::Result<T, FlightError>;
