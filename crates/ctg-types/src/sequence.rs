//! Sequence text transforms.

use crate::orientation::Orientation;

/// Complement of a single nucleotide symbol.
///
/// Covers `A`, `T`, `C`, `G` and `N`. Any other byte is returned unchanged.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement of a sequence.
///
/// Applying it twice yields the input, and the length is always preserved.
pub fn reverse_complement(sequence: &str) -> String {
    let bytes: Vec<u8> = sequence.bytes().rev().map(complement).collect();
    match String::from_utf8(bytes) {
        Ok(s) => s,
        // Only ASCII is substituted; a multi-byte sequence fell out of order.
        Err(_) => sequence
            .chars()
            .rev()
            .map(|c| {
                if c.is_ascii() {
                    complement(c as u8) as char
                } else {
                    c
                }
            })
            .collect(),
    }
}

/// Return `sequence` as read in `orientation`.
pub fn oriented(sequence: &str, orientation: Orientation) -> String {
    match orientation {
        Orientation::Forward => sequence.to_string(),
        Orientation::Reverse => reverse_complement(sequence),
    }
}
