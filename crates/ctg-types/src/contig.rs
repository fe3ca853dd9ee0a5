use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Numeric identifier of a contig record.
///
/// Identifiers are unique within a contig file and grow roughly linearly with
/// the record's byte offset, which is what makes index-free lookup possible.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContigId(u64);

impl ContigId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Signed distance from `self` to `other` (`other - self`).
    pub fn distance_to(self, other: ContigId) -> i128 {
        other.0 as i128 - self.0 as i128
    }
}

impl fmt::Debug for ContigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContigId({})", self.0)
    }
}

impl fmt::Display for ContigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContigId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ContigId> for u64 {
    fn from(id: ContigId) -> Self {
        id.0
    }
}

impl FromStr for ContigId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidContigId(s.to_string()))
    }
}
