//! Core partitioner trait definitions.

use crate::token::Token;

/// A partitioner converts keys into tokens for placement on the hash ring.
///
/// Partitioners are stateless and thread-safe. Every call to
/// [`partition`](Partitioner::partition) must hash with freshly initialised
/// state: two calls with the same input return the same token, in this
/// process and in any other.
pub trait Partitioner: Send + Sync + 'static {
    /// Converts a key into a token.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to partition
    ///
    /// # Returns
    ///
    /// A token representing the position on the ring
    fn partition(&self, key: &[u8]) -> Token;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}

/// Fold a 64-bit hash into the 32-bit token space, keeping entropy from both
/// halves.
#[inline]
pub(crate) fn fold64(hash: u64) -> Token {
    Token((hash ^ (hash >> 32)) as u32)
}
