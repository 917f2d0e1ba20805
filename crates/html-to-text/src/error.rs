//! Error types for HTML to text conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors that can occur during HTML to text conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// HTML parsing error
    #[error("HTML parsing error: {0}")]
    ParseError(String),

    /// Element nesting exceeded the configured `max_depth`
    #[error("document nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured limit that was hit.
        limit: usize,
    },
}
