//! Ring positions.
//!
//! A [`Token`] is a point on the 32-bit hash ring. The token space wraps: the
//! successor of `u32::MAX` is `0`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of the token space (2^32).
pub const TOKEN_SPACE: u64 = 1 << 32;

/// A position on the hash ring.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Token(pub u32);

impl Token {
    pub const MIN: Token = Token(0);
    pub const MAX: Token = Token(u32::MAX);

    /// Clockwise distance from `self` to `other`, as a count of tokens.
    ///
    /// The distance from a token to itself is a full turn of the ring, since
    /// a lone virtual node owns the entire token space.
    pub fn distance_to(&self, other: &Self) -> u64 {
        if other.0 > self.0 {
            u64::from(other.0 - self.0)
        } else {
            TOKEN_SPACE - u64::from(self.0 - other.0)
        }
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
