//! Subcommands and their output.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use clap::Subcommand;
use corelib::partitioner::{Partitioner, PartitionerKind};
use corelib::topology::NodeOwnership;
use corelib::{HashRing, NodeName, Topology};
use replication::{ReplicationStrategy, SimpleStrategy};

/// Ring type built by the CLI.
pub type CliRing = HashRing<PartitionerKind>;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the node that owns each key.
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the first N distinct nodes clockwise instead of only the owner.
        #[arg(long, value_name = "N")]
        preference: Option<usize>,
    },
    /// List nodes with their virtual node counts and share of the ring.
    Inspect,
    /// Hash sample keys and report how they spread across nodes.
    Distribution {
        #[arg(long, default_value_t = 10_000)]
        keys: usize,
    },
}

/// Output of a command, printed by `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Lookup(Vec<(String, Vec<NodeName>)>),
    Inspect {
        partitioner: &'static str,
        vnodes: usize,
        nodes: Vec<NodeOwnership>,
    },
    Distribution {
        keys: usize,
        rows: Vec<DistributionRow>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRow {
    pub name: NodeName,
    pub keys: usize,
    /// Share of the token space, for comparison with the observed key share.
    pub fraction: f64,
}

impl Command {
    pub fn execute<P: Partitioner>(&self, ring: &HashRing<P>) -> Result<CommandResult> {
        match self {
            Command::Lookup { keys, preference } => {
                let rows = keys
                    .iter()
                    .map(|key| -> Result<(String, Vec<NodeName>)> {
                        let owners = match preference {
                            Some(n) => SimpleStrategy::new(*n).replicas_for_key(ring, key.as_bytes())?,
                            None => vec![ring.lookup(key)?.clone()],
                        };
                        Ok((key.clone(), owners))
                    })
                    .collect::<Result<_>>()?;
                Ok(CommandResult::Lookup(rows))
            }
            Command::Inspect => Ok(CommandResult::Inspect {
                partitioner: ring.partitioner_name(),
                vnodes: ring.len(),
                nodes: Topology::from_ring(ring).nodes().to_vec(),
            }),
            Command::Distribution { keys } => {
                let mut counts: BTreeMap<&NodeName, usize> = BTreeMap::new();
                for i in 0..*keys {
                    *counts.entry(ring.lookup(format!("key-{i}"))?).or_default() += 1;
                }
                let topology = Topology::from_ring(ring);
                let rows = topology
                    .nodes()
                    .iter()
                    .map(|node| DistributionRow {
                        name: node.name.clone(),
                        keys: counts.get(&node.name).copied().unwrap_or(0),
                        fraction: node.fraction,
                    })
                    .collect();
                Ok(CommandResult::Distribution { keys: *keys, rows })
            }
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Lookup(rows) => {
                for (key, owners) in rows {
                    let owners: Vec<&str> = owners.iter().map(NodeName::as_str).collect();
                    writeln!(f, "{key} -> {}", owners.join(", "))?;
                }
            }
            CommandResult::Inspect {
                partitioner,
                vnodes,
                nodes,
            } => {
                writeln!(f, "partitioner: {partitioner}")?;
                writeln!(f, "virtual nodes: {vnodes}")?;
                for node in nodes {
                    writeln!(
                        f,
                        "{:<24} {:>6} vnodes {:>7.3}%",
                        node.name.as_str(),
                        node.vnodes,
                        node.fraction * 100.0
                    )?;
                }
            }
            CommandResult::Distribution { keys, rows } => {
                writeln!(f, "{keys} keys")?;
                for row in rows {
                    let observed = if *keys == 0 {
                        0.0
                    } else {
                        row.keys as f64 / *keys as f64 * 100.0
                    };
                    writeln!(
                        f,
                        "{:<24} {:>8} keys {:>7.3}% (ring share {:>7.3}%)",
                        row.name.as_str(),
                        row.keys,
                        observed,
                        row.fraction * 100.0
                    )?;
                }
            }
        }
        Ok(())
    }
}
