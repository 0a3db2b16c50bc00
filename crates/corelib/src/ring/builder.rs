//! Builder for populating a ring in one expression.

use crate::config::RingConfig;
use crate::error::Result;
use crate::partitioner::{Fnv1aPartitioner, Partitioner, PartitionerKind};
use crate::ring::ring::HashRing;

/// Default number of virtual nodes per node.
pub const DEFAULT_REPLICAS: usize = 160;

/// Fluent builder for [`HashRing`].
///
/// Nodes are added in the order given; validation errors surface from
/// [`build`](RingBuilder::build).
///
/// ```
/// use corelib::ring::RingBuilder;
///
/// let ring = RingBuilder::new()
///     .with_replicas(8)
///     .add_node("node1")
///     .add_node_with_replicas("node2", 16)
///     .build()
///     .unwrap();
/// assert_eq!(ring.len(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuilder<P: Partitioner = Fnv1aPartitioner> {
    partitioner: P,
    replicas: usize,
    nodes: Vec<(String, Option<usize>)>,
}

impl RingBuilder<Fnv1aPartitioner> {
    pub fn new() -> Self {
        Self::with_partitioner(Fnv1aPartitioner)
    }
}

impl Default for RingBuilder<Fnv1aPartitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl RingBuilder<PartitionerKind> {
    /// Seed a builder with the partitioner, default replica count and nodes
    /// named in `config`.
    pub fn from_config(config: &RingConfig) -> Self {
        config.nodes.iter().fold(
            Self::with_partitioner(config.partitioner).with_replicas(config.replicas),
            |builder, node| match node.replicas {
                Some(replicas) => builder.add_node_with_replicas(&node.name, replicas),
                None => builder.add_node(&node.name),
            },
        )
    }
}

impl<P: Partitioner> RingBuilder<P> {
    pub fn with_partitioner(partitioner: P) -> Self {
        Self {
            partitioner,
            replicas: DEFAULT_REPLICAS,
            nodes: Vec::new(),
        }
    }

    /// Switch to another partitioner, keeping the nodes added so far.
    pub fn partitioner<Q: Partitioner>(self, partitioner: Q) -> RingBuilder<Q> {
        RingBuilder {
            partitioner,
            replicas: self.replicas,
            nodes: self.nodes,
        }
    }

    /// Replica count for nodes added without an explicit one.
    pub fn with_replicas(mut self, replicas: usize) -> Self {
        self.replicas = replicas;
        self
    }

    pub fn add_node(mut self, name: impl Into<String>) -> Self {
        self.nodes.push((name.into(), None));
        self
    }

    pub fn add_node_with_replicas(mut self, name: impl Into<String>, replicas: usize) -> Self {
        self.nodes.push((name.into(), Some(replicas)));
        self
    }

    pub fn build(self) -> Result<HashRing<P>> {
        let mut ring = HashRing::with_partitioner(self.partitioner);
        for (name, replicas) in &self.nodes {
            ring.add_node(name, replicas.unwrap_or(self.replicas))?;
        }
        Ok(ring)
    }
}
