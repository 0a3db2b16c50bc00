//! Consistent hash ring implementation.
//!
//! The ring manages virtual node positions and provides efficient lookup
//! operations for finding nodes responsible for keys.

pub mod builder;
pub mod registry;
pub mod ring;
pub mod shared;

pub use builder::{RingBuilder, DEFAULT_REPLICAS};
pub use registry::NodeRegistry;
pub use ring::{HashRing, MAX_REPLICAS};
pub use shared::SharedRing;

/// Alias for the main ring type (used by lib.rs).
pub type Ring = HashRing;
