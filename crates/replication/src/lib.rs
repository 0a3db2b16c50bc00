//! Replica placement over a consistent hash ring.
//!
//! A replication strategy turns a key into a preference list: the nodes that
//! should hold copies of that key, primary first. The primary is always the
//! ring's owner for the key. Strategies only compute placement; copying data
//! to those nodes is up to the caller.

pub mod error;
pub mod strategy;

pub use error::ReplicationError;
pub use strategy::{ReplicationStrategy, SimpleStrategy};
