//! Error types for replica placement.

/// Errors returned by replication strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplicationError {
    /// A strategy was asked for zero replicas.
    #[error("replication factor must be greater than 0")]
    InvalidFactor,
    /// The underlying ring lookup failed.
    #[error(transparent)]
    Ring(#[from] corelib::Error),
}
