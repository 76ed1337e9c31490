//! Error types for release metadata parsing.

use thiserror::Error;

/// Errors produced while parsing release metadata fields.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Failed to parse a version string.
    #[error("invalid version format: {0}")]
    InvalidVersion(String),

    /// Unrecognized release state label.
    #[error("unknown release state: {0}")]
    UnknownState(String),

    /// Unrecognized release type label.
    #[error("unknown release type: {0}")]
    UnknownType(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
