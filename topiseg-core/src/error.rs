//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A segmentation parameter is out of range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A similarity matrix supplied by the caller is unusable
    #[error("malformed similarity matrix: {reason}")]
    MalformedMatrix {
        /// What is wrong with the matrix
        reason: String,
    },
}

impl SegmentError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SegmentError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SegmentError>;
