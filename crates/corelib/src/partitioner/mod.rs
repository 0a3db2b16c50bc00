//! Partitioner abstraction for consistent hashing.
//!
//! Partitioners are responsible for converting keys into tokens
//! that can be placed on the hash ring.

pub mod blake;
pub mod fnv;
pub mod sip;
pub mod traits;
pub mod xxhash;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use blake::Blake3Partitioner;
pub use fnv::Fnv1aPartitioner;
pub use sip::SipPartitioner;
pub use traits::Partitioner;
pub use xxhash::XxHashPartitioner;

use crate::error::Error;
use crate::token::Token;

/// Runtime choice of partitioner, for rings built from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionerKind {
    #[default]
    Fnv1a,
    XxHash,
    Sip,
    Blake3,
}

impl PartitionerKind {
    pub const ALL: [PartitionerKind; 4] = [
        PartitionerKind::Fnv1a,
        PartitionerKind::XxHash,
        PartitionerKind::Sip,
        PartitionerKind::Blake3,
    ];

    /// The configuration spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionerKind::Fnv1a => "fnv1a",
            PartitionerKind::XxHash => "xxhash",
            PartitionerKind::Sip => "sip",
            PartitionerKind::Blake3 => "blake3",
        }
    }
}

impl Partitioner for PartitionerKind {
    fn partition(&self, key: &[u8]) -> Token {
        match self {
            PartitionerKind::Fnv1a => Fnv1aPartitioner.partition(key),
            PartitionerKind::XxHash => XxHashPartitioner.partition(key),
            PartitionerKind::Sip => SipPartitioner.partition(key),
            PartitionerKind::Blake3 => Blake3Partitioner.partition(key),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PartitionerKind::Fnv1a => Fnv1aPartitioner.name(),
            PartitionerKind::XxHash => XxHashPartitioner.name(),
            PartitionerKind::Sip => SipPartitioner.name(),
            PartitionerKind::Blake3 => Blake3Partitioner.name(),
        }
    }
}

impl fmt::Display for PartitionerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Config(format!("unknown partitioner {s:?}")))
    }
}
