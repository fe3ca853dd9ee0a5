use std::fmt;

use serde::{Deserialize, Serialize};

use ctg_types::ContigId;

use crate::error::{StoreError, StoreResult};

/// First character of every header line.
pub const HEADER_SENTINEL: char = '>';

/// One header + sequence pair read from a contig file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier parsed from the first header token.
    pub id: ContigId,
    /// Byte offset of the header line within the file.
    pub offset: u64,
    /// The header line, verbatim apart from surrounding whitespace.
    pub header: String,
    /// The sequence line as stored.
    pub sequence: String,
}

impl Record {
    /// Decode a record from its two raw lines.
    pub fn from_lines(offset: usize, header: &[u8], sequence: &[u8]) -> StoreResult<Self> {
        let header = decode_line(offset, header, "header")?;
        let sequence = decode_line(offset, sequence, "sequence")?;
        let id = parse_header_id(&header).map_err(|reason| StoreError::malformed(offset, reason))?;
        Ok(Self {
            id,
            offset: offset as u64,
            header,
            sequence,
        })
    }

    /// Number of symbols in the stored sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whitespace-separated header fields, the `>id` token first.
    pub fn header_fields(&self) -> std::str::SplitWhitespace<'_> {
        self.header.split_whitespace()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header, self.sequence)
    }
}

/// Parse the identifier out of a header line such as `>42 LN:i:31 L:+:43:-`.
pub fn parse_header_id(header: &str) -> Result<ContigId, String> {
    let first = header
        .split_whitespace()
        .next()
        .ok_or_else(|| "empty header line".to_string())?;
    let digits = first
        .strip_prefix(HEADER_SENTINEL)
        .ok_or_else(|| format!("header does not start with '{HEADER_SENTINEL}': {first:?}"))?;
    digits
        .parse::<ContigId>()
        .map_err(|e| e.to_string())
}

fn decode_line(offset: usize, raw: &[u8], what: &str) -> StoreResult<String> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| StoreError::malformed(offset, format!("{what} line is not UTF-8: {e}")))?;
    Ok(text.trim().to_string())
}
