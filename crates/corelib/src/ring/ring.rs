//! Hash ring data structure.
//!
//! The ring keeps every virtual node in a `Vec` sorted by position, with
//! equal positions kept in insertion order. A lookup hashes the key and binary
//! searches for the first virtual node at or after that hash, wrapping to the
//! first virtual node when the hash lies beyond the last one.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::node::NodeName;
use crate::partitioner::{Fnv1aPartitioner, Partitioner};
use crate::ring::registry::NodeRegistry;
use crate::token::Token;
use crate::vnode::VirtualNode;

/// Most virtual nodes a single node may register.
pub const MAX_REPLICAS: usize = 1 << 16;

/// Consistent hash ring mapping keys to node names.
///
/// Lookups take `&self` and mutations take `&mut self`; wrap the ring in a
/// lock (see [`SharedRing`](crate::ring::SharedRing)) to share it between
/// threads.
#[derive(Debug, Clone)]
pub struct HashRing<P: Partitioner = Fnv1aPartitioner> {
    /// Virtual nodes sorted by position, ties in insertion order.
    placements: Vec<VirtualNode>,
    registry: NodeRegistry,
    partitioner: P,
}

impl HashRing<Fnv1aPartitioner> {
    /// Create an empty ring using the default FNV-1a partitioner.
    pub fn new() -> Self {
        Self::with_partitioner(Fnv1aPartitioner)
    }
}

impl Default for HashRing<Fnv1aPartitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Partitioner> HashRing<P> {
    /// Create an empty ring that positions keys and vnodes with `partitioner`.
    pub fn with_partitioner(partitioner: P) -> Self {
        Self {
            placements: Vec::new(),
            registry: NodeRegistry::new(),
            partitioner,
        }
    }

    /// Register `name` with `replicas` virtual nodes.
    ///
    /// Replica `i` is placed at `hash(name ":" i)`. If `name` is already
    /// registered its previous virtual nodes are replaced, so adding the same
    /// node twice with the same replica count leaves the ring unchanged.
    ///
    /// The request is validated and every virtual node computed before the
    /// ring is touched; on error nothing changes.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `name` is empty or `replicas` is zero or
    /// above [`MAX_REPLICAS`].
    pub fn add_node(&mut self, name: &str, replicas: usize) -> Result<()> {
        let owner = NodeName::new(name)?;
        if replicas == 0 {
            return Err(Error::InvalidArgument(format!(
                "replica count for node {owner} must be greater than 0"
            )));
        }
        if replicas > MAX_REPLICAS {
            return Err(Error::InvalidArgument(format!(
                "replica count {replicas} for node {owner} exceeds {MAX_REPLICAS}"
            )));
        }

        let staged: Vec<VirtualNode> = (0..replicas)
            .map(|i| VirtualNode::from_index(&owner, i, &self.partitioner))
            .collect();
        let positions = staged.iter().map(VirtualNode::position).collect();

        if self.registry.contains(owner.as_str()) {
            debug!(node = %owner, "node already registered, replacing its virtual nodes");
            self.detach(owner.as_str());
        }
        self.splice(staged);
        self.registry.insert(owner.clone(), positions);

        debug!(node = %owner, replicas, vnodes = self.placements.len(), "added node to ring");
        Ok(())
    }

    /// Remove `name` and all of its virtual nodes.
    ///
    /// This only edits the placement table. No data is moved: keys that
    /// resolved to `name` now resolve to the next remaining virtual node
    /// clockwise, and any data they refer to stays wherever the caller put it.
    ///
    /// # Errors
    /// [`Error::NotFound`] if `name` is not registered.
    pub fn remove_node(&mut self, name: &str) -> Result<()> {
        if !self.registry.contains(name) {
            return Err(Error::NotFound(name.to_string()));
        }
        let removed = self.detach(name);
        debug!(node = name, removed, vnodes = self.placements.len(), "removed node from ring");
        Ok(())
    }

    /// Find the node that owns `key`.
    ///
    /// # Errors
    /// [`Error::EmptyRing`] if no node is registered.
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> Result<&NodeName> {
        self.lookup_vnode(key).map(VirtualNode::owner)
    }

    /// Find the virtual node that owns `key`.
    pub fn lookup_vnode(&self, key: impl AsRef<[u8]>) -> Result<&VirtualNode> {
        let index = self.owner_index(key.as_ref())?;
        let vnode = &self.placements[index];
        trace!(index, position = %vnode.position, owner = %vnode.owner, "resolved key");
        Ok(vnode)
    }

    /// Iterate clockwise over every virtual node, starting at the one that
    /// owns `key` and wrapping around once.
    pub fn iter_from(&self, key: impl AsRef<[u8]>) -> Result<impl Iterator<Item = &VirtualNode>> {
        let start = self.owner_index(key.as_ref())?;
        Ok(self.placements[start..].iter().chain(self.placements[..start].iter()))
    }

    /// Total number of virtual nodes.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Registered node names, sorted.
    pub fn nodes(&self) -> Vec<&NodeName> {
        self.registry.names()
    }

    /// Positions owned by `name`, sorted.
    pub fn positions(&self, name: &str) -> Option<&[Token]> {
        self.registry.positions(name)
    }

    /// The sorted placement table.
    pub fn placements(&self) -> &[VirtualNode] {
        &self.placements
    }

    pub fn partitioner(&self) -> &P {
        &self.partitioner
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    /// Verify that placements are sorted and agree with the registry.
    ///
    /// # Errors
    /// [`Error::Internal`] describing the first violation found.
    pub fn check_consistency(&self) -> Result<()> {
        if let Some(pair) = self.placements.windows(2).find(|w| w[0].position > w[1].position) {
            return Err(Error::Internal(format!(
                "placements out of order: {} before {}",
                pair[0], pair[1]
            )));
        }

        let mut from_placements = NodeRegistry::new();
        let mut grouped: HashMap<&NodeName, Vec<Token>> = HashMap::new();
        for vnode in &self.placements {
            grouped.entry(&vnode.owner).or_default().push(vnode.position);
        }
        for (owner, positions) in grouped {
            from_placements.insert(owner.clone(), positions);
        }

        if from_placements.len() != self.registry.len() {
            return Err(Error::Internal(format!(
                "{} owners in placements, {} in registry",
                from_placements.len(),
                self.registry.len()
            )));
        }
        for (owner, positions) in self.registry.iter() {
            if from_placements.positions(owner.as_str()) != Some(positions) {
                return Err(Error::Internal(format!(
                    "registry positions for {owner} do not match placements"
                )));
            }
        }
        Ok(())
    }

    /// Index of the first placement at or after `hash(key)`, wrapping to 0.
    fn owner_index(&self, key: &[u8]) -> Result<usize> {
        if self.placements.is_empty() {
            return Err(Error::EmptyRing);
        }
        let hash = self.partitioner.partition(key);
        let index = self.placements.partition_point(|v| v.position < hash);
        Ok(if index == self.placements.len() { 0 } else { index })
    }

    /// Merge `staged` into the sorted placements. Staged vnodes go after any
    /// existing vnode with an equal position.
    fn splice(&mut self, mut staged: Vec<VirtualNode>) {
        staged.sort_by_key(VirtualNode::position);
        let existing = std::mem::take(&mut self.placements);
        let mut merged = Vec::with_capacity(existing.len() + staged.len());
        let mut staged = staged.into_iter().peekable();
        for vnode in existing {
            while let Some(next) = staged.next_if(|s| s.position < vnode.position) {
                merged.push(next);
            }
            merged.push(vnode);
        }
        merged.extend(staged);
        self.placements = merged;
    }

    /// Drop `name` from the registry and placements, returning how many
    /// virtual nodes were removed.
    fn detach(&mut self, name: &str) -> usize {
        let expected = self.registry.remove(name).map_or(0, |p| p.len());
        let before = self.placements.len();
        self.placements.retain(|v| v.owner.as_str() != name);
        let removed = before - self.placements.len();
        debug_assert_eq!(removed, expected, "registry out of sync for {name}");
        removed
    }
}
