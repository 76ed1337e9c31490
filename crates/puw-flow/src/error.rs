//! Error types for the dialog flow.
//!
//! These are the failures the flow raises to its caller: a collaborator
//! prerequisite being unavailable. Errors meant for the end user travel
//! through the error queue and the Error screen instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the dialog flow to its caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    /// The update checker could not provide release metadata.
    #[error("update checker error: {0}")]
    Checker(String),

    /// Preference storage I/O failed.
    #[error("failed to {operation} preferences file: {path}")]
    Store {
        /// The operation that failed.
        operation: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Preference serialization failed.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Package installation failed.
    #[error("installation error: {0}")]
    Install(String),
}

/// Result type alias for flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
