//! Link annotations embedded in contig headers.
//!
//! Minia writes one token per edge of the assembly graph, e.g. `L:+:812:-`:
//! the first symbol is the orientation of *this* contig at the edge, then the
//! neighbour's id, then the neighbour's orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ctg_store::HEADER_SENTINEL;
use ctg_types::{ContigId, Orientation};

use crate::error::{GraphError, GraphResult};

/// Prefix that marks a header field as a link token.
pub const LINK_PREFIX: &str = "L:";

/// A parsed link from one contig to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// The neighbouring contig.
    pub target: ContigId,
    /// Orientation of the contig that carries the link.
    pub this_side: Orientation,
    /// Orientation the neighbour must be read in.
    pub other_side: Orientation,
}

impl Link {
    pub fn new(target: ContigId, this_side: Orientation, other_side: Orientation) -> Self {
        Self {
            target,
            this_side,
            other_side,
        }
    }

    /// Parse a token of the form `L:<dir>:<id>:<dir>`.
    ///
    /// Only the field count and the id are validated. An orientation symbol
    /// other than `-` reads as forward.
    pub fn parse(token: &str) -> GraphResult<Self> {
        let fields: Vec<&str> = token.split(':').collect();
        if fields.len() != 4 {
            return Err(GraphError::MalformedLink {
                token: token.to_string(),
                reason: format!("expected 4 colon-separated fields, got {}", fields.len()),
            });
        }
        let target = fields[2]
            .parse::<ContigId>()
            .map_err(|e| GraphError::MalformedLink {
                token: token.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            target,
            this_side: Orientation::from_symbol(fields[1]),
            other_side: Orientation::from_symbol(fields[3]),
        })
    }

    /// Whether this link may be followed from a contig read in `orientation`.
    pub fn applies_to(&self, orientation: Orientation) -> bool {
        self.this_side == orientation
    }
}

impl FromStr for Link {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LINK_PREFIX}{}:{}:{}",
            self.this_side.symbol(),
            self.target,
            self.other_side.symbol()
        )
    }
}

/// The link tokens of a header line, in order.
///
/// Fails with [`GraphError::MalformedHeader`] if the first field does not
/// start with the record sentinel. Tokens are returned unparsed.
pub fn link_tokens(header: &str) -> GraphResult<Vec<&str>> {
    let mut fields = header.split_whitespace();
    match fields.next() {
        Some(first) if first.starts_with(HEADER_SENTINEL) => {}
        _ => return Err(GraphError::MalformedHeader(header.to_string())),
    }
    Ok(fields.filter(|f| f.starts_with(LINK_PREFIX)).collect())
}
