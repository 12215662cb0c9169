//! Error types for the operations desk

use thiserror::Error;

/// Desk-wide error type
#[derive(Debug, Error)]
pub enum DeskError {
    /// Transport-level HTTP failure (network, timeout, decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with `success: false`
    #[error("API error: {0}")]
    Api(String),

    /// Configuration loading failure
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// Operator input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Workflow operation not allowed in the current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Desk-wide result type
pub type Result<T> = std::result::Result<T, DeskError>;
