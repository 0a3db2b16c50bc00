//! Node names for the consistent hash ring.
//!
//! Nodes are identified purely by name. A [`NodeName`] is guaranteed to be
//! non-empty, so every ring operation can take one without re-validating.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Validated, non-empty name of a logical node.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeName(String);

impl NodeName {
    /// Construct a node name, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument("node name must not be empty".into()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NodeName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NodeName> for String {
    fn from(name: NodeName) -> Self {
        name.0
    }
}

impl PartialEq<str> for NodeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(NodeName::new(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_name_roundtrips_through_str() {
        let name = NodeName::new("node1").unwrap();
        assert_eq!(name, "node1");
        assert_eq!(name.to_string(), "node1");
        let borrowed: &str = name.borrow();
        assert_eq!(borrowed, "node1");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let ok: NodeName = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(ok, "a");
        assert!(serde_json::from_str::<NodeName>("\"\"").is_err());
    }
}
