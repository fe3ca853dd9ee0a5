use serde::{Deserialize, Serialize};

use ctg_store::Record;
use ctg_types::sequence::oriented;
use ctg_types::{ContigId, Orientation};

/// A contig record as visited during traversal.
///
/// `sequence` is already in the segment's orientation, so a reverse segment
/// holds the reverse complement of the stored sequence. Its length always
/// equals the stored length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: ContigId,
    pub orientation: Orientation,
    /// Header line as stored; never transformed.
    pub header: String,
    pub sequence: String,
}

impl Segment {
    /// Orient a located record.
    pub fn from_record(record: Record, orientation: Orientation) -> Self {
        let sequence = match orientation {
            Orientation::Forward => record.sequence,
            Orientation::Reverse => oriented(&record.sequence, orientation),
        };
        Self {
            id: record.id,
            orientation,
            header: record.header,
            sequence,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_reverse(&self) -> bool {
        self.orientation.is_reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: ContigId::new(4),
            offset: 0,
            header: ">4 L:+:5:+".into(),
            sequence: "AACGTN".into(),
        }
    }

    #[test]
    fn forward_keeps_sequence() {
        let seg = Segment::from_record(record(), Orientation::Forward);
        assert_eq!(seg.sequence, "AACGTN");
        assert!(!seg.is_reverse());
    }

    #[test]
    fn reverse_complements_sequence_only() {
        let seg = Segment::from_record(record(), Orientation::Reverse);
        assert_eq!(seg.sequence, "NACGTT");
        assert_eq!(seg.header, ">4 L:+:5:+");
        assert_eq!(seg.len(), 6);
        assert!(seg.is_reverse());
    }
}
