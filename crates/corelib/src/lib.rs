//! Core library for consistent hashing implementation.
//!
//! This crate provides the fundamental abstractions for consistent hashing:
//! - Tokens (32-bit ring positions) and partitioners (hash functions)
//! - Node names and virtual nodes
//! - The hash ring with its node registry, plus a lock-wrapped shared handle
//! - Ring configuration and ownership analysis
//!
//! The ring is a pure in-process placement oracle: it records which node owns
//! which part of the key space and never moves, copies or persists data.
//!
//! ```
//! use corelib::HashRing;
//!
//! let mut ring = HashRing::new();
//! ring.add_node("node1", 20)?;
//! ring.add_node("node2", 20)?;
//! let owner = ring.lookup("hello")?;
//! assert!(owner == "node1" || owner == "node2");
//! # Ok::<(), corelib::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod partitioner;
pub mod ring;
pub mod token;
pub mod topology;
pub mod vnode;

pub use config::{NodeConfig, RingConfig};
pub use error::{Error, Result};
pub use node::NodeName;
pub use partitioner::{Partitioner, PartitionerKind};
pub use ring::{HashRing, Ring, RingBuilder, SharedRing, MAX_REPLICAS};
pub use token::Token;
pub use topology::Topology;
pub use vnode::VirtualNode;
