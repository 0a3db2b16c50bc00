//! Node registry: which ring positions belong to which node.

use std::collections::HashMap;

use crate::node::NodeName;
use crate::token::Token;

/// Mapping from a logical node to the positions of its virtual nodes.
///
/// Positions are kept sorted. A node whose replicas happen to hash to the same
/// position lists that position once per replica, matching the placements.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: HashMap<NodeName, Vec<Token>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `positions` for `owner`, returning any previous entry.
    pub fn insert(&mut self, owner: NodeName, mut positions: Vec<Token>) -> Option<Vec<Token>> {
        positions.sort_unstable();
        self.nodes.insert(owner, positions)
    }

    pub fn remove(&mut self, owner: &str) -> Option<Vec<Token>> {
        self.nodes.remove(owner)
    }

    pub fn positions(&self, owner: &str) -> Option<&[Token]> {
        self.nodes.get(owner).map(Vec::as_slice)
    }

    pub fn contains(&self, owner: &str) -> bool {
        self.nodes.contains_key(owner)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&NodeName> {
        let mut names: Vec<_> = self.nodes.keys().collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeName, &[Token])> {
        self.nodes.iter().map(|(name, positions)| (name, positions.as_slice()))
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
