//! BLAKE3 partitioner implementation.

use crate::partitioner::traits::Partitioner;
use crate::token::Token;

/// First four bytes of a BLAKE3 digest, little-endian.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Partitioner;

impl Partitioner for Blake3Partitioner {
    fn partition(&self, key: &[u8]) -> Token {
        let digest = blake3::hash(key);
        let bytes = digest.as_bytes();
        Token(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn name(&self) -> &'static str {
        "Blake3Partitioner"
    }
}
