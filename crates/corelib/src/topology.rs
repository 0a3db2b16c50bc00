//! Ownership analysis over a ring.
//!
//! Each virtual node owns the arc of the token space that ends at its
//! position and starts just after the previous position clockwise. Where
//! several virtual nodes share a position only the first one owns the arc,
//! mirroring how lookups resolve.

use std::collections::BTreeMap;

use crate::node::NodeName;
use crate::partitioner::Partitioner;
use crate::ring::HashRing;
use crate::token::TOKEN_SPACE;
use crate::vnode::VirtualNode;

/// How much of the ring one node owns.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOwnership {
    pub name: NodeName,
    /// Virtual nodes registered for this node.
    pub vnodes: usize,
    /// Tokens owned, out of 2^32.
    pub tokens: u64,
    /// `tokens / 2^32`.
    pub fraction: f64,
}

/// Snapshot of token ownership per node.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<NodeOwnership>,
}

impl Topology {
    pub fn from_ring<P: Partitioner>(ring: &HashRing<P>) -> Self {
        let placements = ring.placements();
        let mut tokens: BTreeMap<&NodeName, u64> =
            ring.nodes().into_iter().map(|name| (name, 0)).collect();

        let winners: Vec<&VirtualNode> = placements
            .iter()
            .enumerate()
            .filter(|(i, v)| *i == 0 || placements[i - 1].position != v.position)
            .map(|(_, v)| v)
            .collect();
        for (i, vnode) in winners.iter().enumerate() {
            let prev = winners[(i + winners.len() - 1) % winners.len()];
            *tokens.entry(&vnode.owner).or_default() += prev.distance_to(vnode);
        }

        let nodes = tokens
            .into_iter()
            .map(|(name, tokens)| NodeOwnership {
                name: name.clone(),
                vnodes: ring.positions(name.as_str()).map_or(0, <[_]>::len),
                tokens,
                fraction: tokens as f64 / TOKEN_SPACE as f64,
            })
            .collect();
        Self { nodes }
    }

    /// Per-node ownership, sorted by name.
    pub fn nodes(&self) -> &[NodeOwnership] {
        &self.nodes
    }

    pub fn ownership(&self, name: &str) -> Option<&NodeOwnership> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Largest share divided by the even share `1 / node_count`. `1.0` is a
    /// perfectly balanced ring; `None` for an empty ring.
    pub fn max_imbalance(&self) -> Option<f64> {
        let max = self.nodes.iter().map(|n| n.fraction).reduce(f64::max)?;
        Some(max * self.nodes.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingBuilder;

    #[test]
    fn test_empty_ring() {
        let topology = Topology::from_ring(&HashRing::new());
        assert!(topology.nodes().is_empty());
        assert_eq!(topology.max_imbalance(), None);
    }

    #[test]
    fn test_single_vnode_owns_everything() {
        let ring = RingBuilder::new().add_node_with_replicas("solo", 1).build().unwrap();
        let topology = Topology::from_ring(&ring);
        let solo = topology.ownership("solo").unwrap();
        assert_eq!(solo.tokens, TOKEN_SPACE);
        assert_eq!(solo.fraction, 1.0);
    }

    #[test]
    fn test_fractions_cover_the_ring() {
        let ring = RingBuilder::new()
            .with_replicas(64)
            .add_node("a")
            .add_node("b")
            .add_node("c")
            .build()
            .unwrap();
        let topology = Topology::from_ring(&ring);
        let total: u64 = topology.nodes().iter().map(|n| n.tokens).sum();
        assert_eq!(total, TOKEN_SPACE);
        assert!(topology.nodes().iter().all(|n| n.vnodes == 64));
        assert!(topology.max_imbalance().unwrap() < 2.0);
    }

    #[test]
    fn test_default_replicas_balance_the_ring() {
        for count in 2..=12 {
            let ring = (0..count)
                .fold(RingBuilder::new(), |b, i| b.add_node(format!("node{i}")))
                .build()
                .unwrap();
            let imbalance = Topology::from_ring(&ring).max_imbalance().unwrap();
            assert!(imbalance < 1.3, "{count} nodes: imbalance {imbalance:.3}");
        }
    }
}
