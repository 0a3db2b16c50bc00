//! FNV-1a partitioner implementation.

use crate::partitioner::traits::Partitioner;
use crate::token::Token;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a followed by the murmur3 `fmix32` finalizer. The default
/// partitioner.
///
/// Virtual node keys differ only in their trailing index digits, and raw
/// FNV-1a leaves those close together on the ring. The finalizer spreads
/// them out.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1aPartitioner;

impl Fnv1aPartitioner {
    /// Plain FNV-1a of `data`, starting from the offset basis.
    pub fn hash(data: &[u8]) -> u32 {
        data.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
        })
    }
}

/// Murmur3 32-bit finalizer. A bijection, so distinct hashes stay distinct.
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

impl Partitioner for Fnv1aPartitioner {
    fn partition(&self, key: &[u8]) -> Token {
        Token(fmix32(Self::hash(key)))
    }

    fn name(&self) -> &'static str {
        "Fnv1aPartitioner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(Fnv1aPartitioner::hash(b""), 0x811c_9dc5);
        assert_eq!(Fnv1aPartitioner::hash(b"a"), 0xe40c_292c);
        assert_eq!(Fnv1aPartitioner::hash(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_partition_applies_finalizer() {
        assert_eq!(fmix32(0), 0);
        let p = Fnv1aPartitioner;
        assert_eq!(p.partition(b"a:0"), Token(0xa804_af28));
        assert_eq!(p.partition(b"a:1"), Token(0xf8c2_2914));
        assert_eq!(p.partition(b"a:2"), Token(0xbca6_c937));
    }

    #[test]
    fn test_adjacent_replica_keys_spread_out() {
        let p = Fnv1aPartitioner;
        let mut positions: Vec<u32> = (0..8).map(|i| p.partition(format!("a:{i}").as_bytes()).0).collect();
        positions.sort_unstable();
        let span = positions[positions.len() - 1] - positions[0];
        assert!(span > u32::MAX / 2, "replicas of one node bunched within {span:#x}");
    }

    #[test]
    fn test_no_state_carried_between_calls() {
        let p = Fnv1aPartitioner;
        let first = p.partition(b"hello");
        p.partition(b"something else");
        assert_eq!(p.partition(b"hello"), first);
    }
}
