//! Ring configuration.
//!
//! A ring can be described as JSON:
//!
//! ```json
//! {
//!   "replicas": 160,
//!   "partitioner": "fnv1a",
//!   "nodes": [{ "name": "node1" }, { "name": "node2", "replicas": 320 }]
//! }
//! ```
//!
//! Every field is optional.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::partitioner::PartitionerKind;
use crate::ring::{HashRing, RingBuilder, DEFAULT_REPLICAS, MAX_REPLICAS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Replica count for nodes that do not set their own.
    pub replicas: usize,
    pub partitioner: PartitionerKind,
    pub nodes: Vec<NodeConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<usize>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            partitioner: PartitionerKind::default(),
            nodes: Vec::new(),
        }
    }
}

impl RingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject replica counts outside `1..=MAX_REPLICAS` and empty node names.
    pub fn validate(&self) -> Result<()> {
        check_replicas("replicas", self.replicas)?;
        for node in &self.nodes {
            if node.name.is_empty() {
                return Err(Error::Config("node name must not be empty".into()));
            }
            if let Some(replicas) = node.replicas {
                check_replicas(&format!("replicas for node {}", node.name), replicas)?;
            }
        }
        Ok(())
    }

    pub fn build_ring(&self) -> Result<HashRing<PartitionerKind>> {
        self.validate()?;
        RingBuilder::from_config(self).build()
    }
}

fn check_replicas(field: &str, replicas: usize) -> Result<()> {
    if replicas == 0 {
        return Err(Error::Config(format!("{field} must be greater than 0")));
    }
    if replicas > MAX_REPLICAS {
        return Err(Error::Config(format!("{field} must be at most {MAX_REPLICAS}, got {replicas}")));
    }
    Ok(())
}
