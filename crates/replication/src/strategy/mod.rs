//! Replication strategy abstractions.
//!
//! Replication strategies determine how many replicas to create and where
//! to place them on the ring.
//!
//! - **SimpleStrategy**: N distinct nodes taken clockwise from the key

pub mod simple;

pub use simple::SimpleStrategy;

use corelib::node::NodeName;
use corelib::partitioner::{Fnv1aPartitioner, Partitioner};
use corelib::ring::HashRing;

use crate::error::ReplicationError;

/// Trait for replication strategies over rings hashed with `P`.
///
/// Implementations must be thread-safe (Send + Sync) as they may be
/// shared across threads. The trait is object safe, so strategies can be
/// picked at runtime as `Box<dyn ReplicationStrategy<P>>`.
pub trait ReplicationStrategy<P: Partitioner = Fnv1aPartitioner>: Send + Sync + 'static {
    /// Number of replicas this strategy places, primary included.
    fn replication_factor(&self) -> usize;

    /// Find replica nodes for a given key, primary first.
    ///
    /// Returns fewer than [`replication_factor`](Self::replication_factor)
    /// nodes when the ring has fewer distinct nodes.
    fn replicas_for_key(&self, ring: &HashRing<P>, key: &[u8]) -> Result<Vec<NodeName>, ReplicationError>;

    /// Strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
