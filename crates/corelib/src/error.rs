//! Error types for the core library.

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed request, e.g. an empty node name or a zero replica count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The named node is not registered on the ring.
    #[error("node not found: {0}")]
    NotFound(String),
    /// A lookup was attempted on a ring with no virtual nodes.
    #[error("ring is empty")]
    EmptyRing,
    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Internal invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}
