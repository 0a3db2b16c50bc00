//! XXH3 partitioner implementation.

use xxhash_rust::xxh3::xxh3_64;

use crate::partitioner::traits::{fold64, Partitioner};
use crate::token::Token;

/// XXH3-64 folded to 32 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct XxHashPartitioner;

impl Partitioner for XxHashPartitioner {
    fn partition(&self, key: &[u8]) -> Token {
        fold64(xxh3_64(key))
    }

    fn name(&self) -> &'static str {
        "XxHashPartitioner"
    }
}
