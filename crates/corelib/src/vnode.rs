//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Instead of each logical node having a single position on the ring, each
//! node owns several positions (virtual nodes). More positions give a smoother
//! spread of keys, and when a node joins or leaves only the arcs next to its
//! own virtual nodes change hands.
//!
//! # Position derivation
//!
//! Replica `i` of node `name` sits at `hash(name ":" i)` with `i` written in
//! decimal. The suffix is unbounded, so any replica count is allowed, and the
//! derivation is deterministic, so re-adding a node with the same replica
//! count reproduces exactly the same positions. Because the suffix after the
//! last `:` is always pure decimal, two different `(name, index)` pairs never
//! produce the same hash input.

use std::fmt;

use crate::node::NodeName;
use crate::partitioner::Partitioner;
use crate::token::Token;

/// A virtual node on the hash ring.
///
/// Multiple virtual nodes share the same `owner`; a lookup finds the vnode
/// and routes to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualNode {
    /// Token position on the ring.
    pub position: Token,
    /// The logical node this vnode belongs to.
    pub owner: NodeName,
}

impl VirtualNode {
    #[inline]
    pub fn new(position: Token, owner: NodeName) -> Self {
        Self { position, owner }
    }

    /// Create replica `index` of `owner`, positioned by `partitioner`.
    pub fn from_index<P: Partitioner + ?Sized>(
        owner: &NodeName,
        index: usize,
        partitioner: &P,
    ) -> Self {
        let position = partitioner.partition(&replica_key(owner, index));
        Self::new(position, owner.clone())
    }

    #[inline]
    pub fn position(&self) -> Token {
        self.position
    }

    #[inline]
    pub fn owner(&self) -> &NodeName {
        &self.owner
    }

    /// Clockwise distance to another virtual node, in tokens.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u64 {
        self.position.distance_to(&other.position)
    }
}

impl fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(position={}, owner={})", self.position, self.owner)
    }
}

/// Hash input for replica `index` of `owner`: `owner ":" index`.
pub fn replica_key(owner: &NodeName, index: usize) -> Vec<u8> {
    let suffix = index.to_string();
    let mut key = Vec::with_capacity(owner.as_bytes().len() + 1 + suffix.len());
    key.extend_from_slice(owner.as_bytes());
    key.push(b':');
    key.extend_from_slice(suffix.as_bytes());
    key
}
