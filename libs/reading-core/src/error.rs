//! Error types for reading-core.

use thiserror::Error;

/// Result type alias using the core Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the engine's input boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied input the engine refuses to evaluate. Raised instead
    /// of silently substituting a default, which would mask a caller defect.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("line {index} out of range; document has {count} lines")]
    LineOutOfRange { index: usize, count: usize },
}
