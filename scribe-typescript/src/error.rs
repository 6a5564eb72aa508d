//! Error types for construct rendering.

use thiserror::Error;

/// Result type for scribe-typescript operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rendering a misconfigured construct.
///
/// These are programmer errors in how a builder was used, surfaced
/// synchronously at `generate()`/`render()` time. An import registry
/// rendering to empty text or an empty section are valid terminal states
/// and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required part of a construct was never provided.
    #[error("{part} is required for {construct} statement")]
    MissingPart {
        /// The construct kind, e.g. "if" or "for".
        construct: &'static str,
        /// The missing piece, e.g. "condition" or "body".
        part: &'static str,
    },
}

impl Error {
    /// Create a missing-part error for the given construct.
    pub fn missing(construct: &'static str, part: &'static str) -> Self {
        Self::MissingPart { construct, part }
    }
}
