//! Simple replication strategy.
//!
//! Places N replicas sequentially around the ring (clockwise from the primary).
//!
//! # Algorithm
//!
//! 1. Find the virtual node that owns the key; its owner is the primary
//! 2. Continue clockwise, skipping owners already chosen
//! 3. Stop after N distinct owners or one full turn of the ring
//!
//! # Limitations
//!
//! - Doesn't consider data center/rack placement
//! - May place replicas on nodes in the same failure domain

use std::collections::HashSet;

use corelib::node::NodeName;
use corelib::partitioner::Partitioner;
use corelib::ring::HashRing;
use tracing::trace;

use crate::error::ReplicationError;
use crate::strategy::ReplicationStrategy;

/// Simple replication strategy: N distinct nodes clockwise from the key.
///
/// # Example
///
/// ```rust
/// use corelib::ring::RingBuilder;
/// use replication::{ReplicationStrategy, SimpleStrategy};
///
/// let ring = RingBuilder::new()
///     .add_node("node1")
///     .add_node("node2")
///     .add_node("node3")
///     .build()
///     .unwrap();
///
/// let replicas = SimpleStrategy::new(2).replicas_for_key(&ring, b"my-key").unwrap();
/// assert_eq!(replicas.len(), 2);
/// assert_eq!(&replicas[0], ring.lookup(b"my-key").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    /// Number of replicas to create (including primary).
    replication_factor: usize,
}

impl SimpleStrategy {
    pub fn new(replication_factor: usize) -> Self {
        Self { replication_factor }
    }

    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    pub fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}

impl Default for SimpleStrategy {
    /// Three replicas: primary plus two.
    fn default() -> Self {
        Self::new(3)
    }
}

impl<P: Partitioner> ReplicationStrategy<P> for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        SimpleStrategy::replication_factor(self)
    }

    fn replicas_for_key(&self, ring: &HashRing<P>, key: &[u8]) -> Result<Vec<NodeName>, ReplicationError> {
        if self.replication_factor == 0 {
            return Err(ReplicationError::InvalidFactor);
        }

        let wanted = self.replication_factor.min(ring.node_count());
        let mut replicas = Vec::with_capacity(wanted);
        let mut seen = HashSet::with_capacity(wanted);

        for vnode in ring.iter_from(key)? {
            if seen.insert(vnode.owner()) {
                replicas.push(vnode.owner().clone());
                if replicas.len() == wanted {
                    break;
                }
            }
        }

        trace!(strategy = self.name(), replicas = replicas.len(), "placed key");
        Ok(replicas)
    }

    fn name(&self) -> &'static str {
        SimpleStrategy::name(self)
    }
}
