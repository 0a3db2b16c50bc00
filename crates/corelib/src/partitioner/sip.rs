//! SipHash partitioner implementation.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::partitioner::traits::{fold64, Partitioner};
use crate::token::Token;

/// SipHash-1-3 with fixed zero keys, folded to 32 bits.
///
/// The keys are fixed so placement is stable across processes; this is not
/// meant to resist hash flooding.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipPartitioner;

impl Partitioner for SipPartitioner {
    fn partition(&self, key: &[u8]) -> Token {
        let mut hasher = SipHasher13::new_with_keys(0, 0);
        hasher.write(key);
        fold64(hasher.finish())
    }

    fn name(&self) -> &'static str {
        "SipPartitioner"
    }
}
