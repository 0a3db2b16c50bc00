//! Command-line configuration and ring assembly.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use corelib::partitioner::PartitionerKind;
use corelib::{NodeConfig, RingConfig};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::commands::{CliRing, Command};

#[derive(Debug, Parser)]
#[command(name = "hashring", version, about = "Query and inspect a consistent hash ring.")]
pub struct CliConfig {
    /// JSON ring description; flags below are applied on top of it.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Node to place on the ring, optionally with its own replica count.
    #[arg(long = "node", global = true, value_name = "NAME[:REPLICAS]")]
    pub nodes: Vec<NodeSpec>,

    /// Replica count for nodes that do not give one.
    #[arg(long, global = true)]
    pub replicas: Option<usize>,

    /// Hash function used for keys and virtual nodes.
    #[arg(long, global = true, value_name = "fnv1a|xxhash|sip|blake3")]
    pub partitioner: Option<PartitionerKind>,

    /// Log ring operations at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// A `--node` argument: `NAME` or `NAME:REPLICAS`.
///
/// Only a purely numeric suffix is read as a replica count, so names that
/// contain `:` themselves still parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: String,
    pub replicas: Option<usize>,
}

impl FromStr for NodeSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, replicas) = match s.rsplit_once(':') {
            Some((name, count)) if !count.is_empty() && count.bytes().all(|b| b.is_ascii_digit()) => {
                let replicas = count.parse::<usize>().map_err(|e| format!("bad replica count {count:?}: {e}"))?;
                (name, Some(replicas))
            }
            _ => (s, None),
        };
        if name.is_empty() {
            return Err("node name must not be empty".into());
        }
        Ok(Self {
            name: name.to_string(),
            replicas,
        })
    }
}

impl CliConfig {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);
        let ring = self.build_ring()?;
        debug!(
            nodes = ring.node_count(),
            vnodes = ring.len(),
            partitioner = ring.partitioner_name(),
            "ring ready"
        );
        let result = self.command.execute(&ring)?;
        print!("{result}");
        Ok(())
    }

    /// Merge the config file (if any) with command-line overrides.
    pub fn ring_config(&self) -> Result<RingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                RingConfig::from_json_str(&json)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => RingConfig::default(),
        };
        if let Some(replicas) = self.replicas {
            config.replicas = replicas;
        }
        if let Some(partitioner) = self.partitioner {
            config.partitioner = partitioner;
        }
        config.nodes.extend(self.nodes.iter().map(|spec| NodeConfig {
            name: spec.name.clone(),
            replicas: spec.replicas,
        }));
        Ok(config)
    }

    pub fn build_ring(&self) -> Result<CliRing> {
        let config = self.ring_config()?;
        config.build_ring().context("failed to build ring")
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    // Ignore a second initialisation, e.g. when run() is driven from tests.
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_spec_parsing() {
        assert_eq!(
            "node1".parse::<NodeSpec>().unwrap(),
            NodeSpec { name: "node1".into(), replicas: None }
        );
        assert_eq!(
            "node1:40".parse::<NodeSpec>().unwrap(),
            NodeSpec { name: "node1".into(), replicas: Some(40) }
        );
        assert_eq!(
            "10.0.0.1:8080:8".parse::<NodeSpec>().unwrap(),
            NodeSpec { name: "10.0.0.1:8080".into(), replicas: Some(8) }
        );
        assert_eq!(
            "host:web".parse::<NodeSpec>().unwrap(),
            NodeSpec { name: "host:web".into(), replicas: None }
        );
        assert!(":5".parse::<NodeSpec>().is_err());
        assert!("".parse::<NodeSpec>().is_err());
    }

    #[test]
    fn test_flags_build_ring() {
        let cli = CliConfig::try_parse_from([
            "hashring", "--node", "a:5", "--node", "b", "--replicas", "7", "--partitioner", "xxhash", "inspect",
        ])
        .unwrap();
        let ring = cli.build_ring().unwrap();
        assert_eq!(ring.len(), 12);
        assert_eq!(ring.partitioner_name(), "XxHashPartitioner");
    }

    #[test]
    fn test_zero_replicas_is_an_error() {
        let cli = CliConfig::try_parse_from(["hashring", "--node", "a:0", "inspect"]).unwrap();
        assert!(cli.build_ring().is_err());
    }

    #[test]
    fn test_oversized_replica_count_is_an_error() {
        for args in [
            ["hashring", "--node", "a", "--replicas", "18446744073709551615", "inspect"],
            ["hashring", "--node", "a:18446744073709551615", "--replicas", "4", "inspect"],
        ] {
            let cli = CliConfig::try_parse_from(args).unwrap();
            let err = cli.build_ring().unwrap_err();
            assert!(matches!(err.downcast_ref::<corelib::Error>(), Some(corelib::Error::Config(_))));
        }
    }

    #[test]
    fn test_unknown_partitioner_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["hashring", "--partitioner", "md5", "inspect"]).is_err());
    }
}
