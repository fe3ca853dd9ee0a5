use std::fmt;

use serde::{Deserialize, Serialize};

/// How a contig's sequence is read relative to the stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Read as stored.
    #[default]
    Forward,
    /// Read as the reverse complement of the stored sequence.
    Reverse,
}

impl Orientation {
    /// Both orientations, forward first.
    pub const BOTH: [Orientation; 2] = [Orientation::Forward, Orientation::Reverse];

    /// Decode a link-token orientation symbol.
    ///
    /// `-` means reverse. Every other symbol, including ones that are
    /// neither `+` nor `-`, reads as forward.
    pub fn from_symbol(symbol: &str) -> Self {
        if symbol == "-" {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    /// The canonical link-token symbol (`+` or `-`).
    pub fn symbol(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }

    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }

    /// The opposite orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

impl From<bool> for Orientation {
    /// `true` means reverse-complemented.
    fn from(reversed: bool) -> Self {
        if reversed {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}
