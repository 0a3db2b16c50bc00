//! Thread-safe ring handle.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::node::NodeName;
use crate::partitioner::{Fnv1aPartitioner, Partitioner};
use crate::ring::ring::HashRing;

/// A [`HashRing`] behind a read-write lock.
///
/// Lookups share the read lock and may run concurrently; `add_node` and
/// `remove_node` take the write lock, so a lookup never observes a node that
/// is only partly added or removed. Clones share the same ring.
#[derive(Debug)]
pub struct SharedRing<P: Partitioner = Fnv1aPartitioner> {
    inner: Arc<RwLock<HashRing<P>>>,
}

impl<P: Partitioner> Clone for SharedRing<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Partitioner> SharedRing<P> {
    pub fn new(ring: HashRing<P>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ring)),
        }
    }

    pub fn add_node(&self, name: &str, replicas: usize) -> Result<()> {
        self.inner.write().add_node(name, replicas)
    }

    pub fn remove_node(&self, name: &str) -> Result<()> {
        self.inner.write().remove_node(name)
    }

    /// Owner of `key`, cloned out so the lock is released on return.
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> Result<NodeName> {
        self.inner.read().lookup(key).cloned()
    }

    /// Read guard for inspecting the ring across several calls.
    pub fn read(&self) -> RwLockReadGuard<'_, HashRing<P>> {
        self.inner.read()
    }
}

impl<P: Partitioner> From<HashRing<P>> for SharedRing<P> {
    fn from(ring: HashRing<P>) -> Self {
        Self::new(ring)
    }
}
