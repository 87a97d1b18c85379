//! Error types for innertext.
//!
//! This module defines the error types returned by selector compilation and
//! sibling search. Extraction itself is total and never fails.

/// Error type for invalid-argument conditions.
///
/// These are programmer-error conditions detected eagerly at the point of
/// misuse; nothing here is retryable and there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declarative selector description had an unsupported shape.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// A sibling search was given a node that cannot contain children.
    #[error("invalid parent: {0}")]
    InvalidParent(String),

    /// A sibling search was given a child reference or index that does not
    /// resolve inside the parent.
    #[error("invalid index: {0}")]
    InvalidIndex(String),
}

/// Result type alias for fallible innertext operations.
pub type Result<T> = std::result::Result<T, Error>;
