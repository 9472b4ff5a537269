use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the epitrack workspace.
///
/// Errors never reach cache readers: a failed refresh pass is recorded in its
/// `RefreshReport` and the previously published data stays in place.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EpiError {
    /// An upstream source could not be fetched (transport failure, bad status).
    #[error("{source_name} unavailable: {msg}")]
    SourceUnavailable {
        /// Name of the connector or feed that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The fetched data does not have the expected shape (misaligned rows,
    /// missing date columns, empty feed).
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested source is not provided by the connector.
    #[error("unsupported source: {0}")]
    Unsupported(String),
}

impl EpiError {
    /// Helper: build a `SourceUnavailable` error for a named source.
    pub fn unavailable(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ShapeMismatch` error.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Returns true when the next scheduled refresh may succeed without any
    /// operator action (transport problems and upstream shape drift).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. } | Self::ShapeMismatch(_))
    }
}
