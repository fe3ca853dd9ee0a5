//! Index-free lookup of a record by identifier.
//!
//! Identifiers grow roughly linearly with byte offset, so the ratio
//! `offset / id` of any known record estimates the average record stride.
//! The locator starts from the last record in the file, jumps to the
//! extrapolated offset of the target, and repeats with each new anchor. When
//! the target is only a few records ahead it reads forward instead, since a
//! jump at that range is less precise than a short scan.
//!
//! This is not a guaranteed-correct search: density is only approximately
//! linear, so the loop has a hard iteration budget and fails with
//! [`StoreError::NotFound`] when it runs out.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use ctg_types::ContigId;

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::store::RecordStore;

/// Tuning for [`RecordLocator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Maximum number of jumps and scan steps before giving up.
    pub max_iterations: usize,
    /// Targets fewer than this many ids ahead of the anchor are reached by
    /// reading forward rather than jumping.
    pub scan_window: u64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            scan_window: 10,
        }
    }
}

/// Finds records by id using density extrapolation and a local scan.
#[derive(Clone, Debug, Default)]
pub struct RecordLocator {
    config: LocatorConfig,
}

impl RecordLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Locate `target` in `store`.
    pub fn locate<B: AsRef<[u8]>>(
        &self,
        store: &mut RecordStore<B>,
        target: ContigId,
    ) -> StoreResult<Record> {
        let last = store.find_boundary_before(store.size())?;
        let mut anchor = store.read_record_at(last)?;
        let mut density = stride(&anchor);
        let mut iterations = 0;

        while anchor.id != target {
            if iterations >= self.config.max_iterations {
                return Err(StoreError::NotFound {
                    id: target,
                    iterations,
                });
            }
            iterations += 1;

            let gap = anchor.id.distance_to(target);
            if gap > 0 && gap < self.config.scan_window as i128 {
                if store.at_end() {
                    return Err(StoreError::NotFound {
                        id: target,
                        iterations,
                    });
                }
                anchor = store.read_next_record()?;
                trace!(step = iterations, found = %anchor.id, "scan");
            } else {
                let estimate = match density {
                    Some(d) => (target.get() as f64 * d) as u64,
                    None => store.size(),
                };
                let offset = store.find_boundary_before(estimate)?;
                anchor = store.read_record_at(offset)?;
                density = stride(&anchor).or(density);
                trace!(step = iterations, estimate, found = %anchor.id, "jump");
            }
        }

        debug!(id = %target, offset = anchor.offset, iterations, "located contig");
        Ok(anchor)
    }
}

/// Average bytes per id observed from the start of the file to `anchor`.
///
/// `None` when the anchor carries no usable information (id 0 or offset 0).
fn stride(anchor: &Record) -> Option<f64> {
    if anchor.id.get() == 0 || anchor.offset == 0 {
        None
    } else {
        Some(anchor.offset as f64 / anchor.id.get() as f64)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Synthetic contig file with the given ids, in order.
    fn fasta(ids: &[u64]) -> String {
        let mut out = String::new();
        for &id in ids {
            let len = 20 + (id * 7 % 13) as usize;
            out.push_str(&format!(">{id} LN:i:{len} KC:i:{}\n", id * 3));
            out.push_str(&sequence_for(id, len));
            out.push('\n');
        }
        out
    }

    fn sequence_for(id: u64, len: usize) -> String {
        const ALPHABET: &[u8] = b"ACGT";
        (0..len)
            .map(|i| ALPHABET[((id as usize).wrapping_mul(31) + i * 7) % 4] as char)
            .collect()
    }

    fn locate(text: &str, id: u64) -> StoreResult<Record> {
        let mut store = RecordStore::from_bytes(text.as_bytes());
        RecordLocator::default().locate(&mut store, ContigId::new(id))
    }

    #[test]
    fn default_config() {
        let c = LocatorConfig::default();
        assert_eq!(c.max_iterations, 100);
        assert_eq!(c.scan_window, 10);
    }

    #[test]
    fn locates_every_contiguous_id() {
        let ids: Vec<u64> = (0..500).collect();
        let text = fasta(&ids);
        for &id in &ids {
            let rec = locate(&text, id).unwrap();
            assert_eq!(rec.id, ContigId::new(id));
            let len = 20 + (id * 7 % 13) as usize;
            assert_eq!(rec.sequence, sequence_for(id, len));
            assert_eq!(&text[rec.offset as usize..][..rec.header.len()], rec.header);
        }
    }

    #[test]
    fn locates_ids_with_gaps() {
        let ids: Vec<u64> = (1..400).filter(|i| i % 3 != 0).collect();
        let text = fasta(&ids);
        for &id in &ids {
            assert_eq!(locate(&text, id).unwrap().id, ContigId::new(id));
        }
    }

    #[test]
    fn last_record_short_circuits() {
        let text = fasta(&[1, 2, 3, 4]);
        let rec = locate(&text, 4).unwrap();
        assert_eq!(rec.id, ContigId::new(4));
        assert_eq!(rec.offset, text.find(">4").unwrap() as u64);
    }

    #[test]
    fn single_record_file() {
        let text = fasta(&[0]);
        assert_eq!(locate(&text, 0).unwrap().id, ContigId::new(0));
        assert!(matches!(
            locate(&text, 25).unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn missing_id_fails_within_budget() {
        let ids: Vec<u64> = (1..200).filter(|&i| i != 77).collect();
        let text = fasta(&ids);
        match locate(&text, 77).unwrap_err() {
            StoreError::NotFound { id, iterations } => {
                assert_eq!(id, ContigId::new(77));
                assert!(iterations <= 100);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn id_beyond_end_fails() {
        let text = fasta(&(1..50).collect::<Vec<_>>());
        assert!(matches!(
            locate(&text, 52).unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            locate(&text, 5_000).unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn tiny_budget_gives_up() {
        let text = fasta(&(1..300).collect::<Vec<_>>());
        let mut store = RecordStore::from_bytes(text.as_bytes());
        let locator = RecordLocator::new(LocatorConfig {
            max_iterations: 0,
            ..Default::default()
        });
        let err = locator.locate(&mut store, ContigId::new(3)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { iterations: 0, .. }));
    }

    #[test]
    fn malformed_file_propagates() {
        let err = locate("just some text\n", 1).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { .. }));
    }

    proptest! {
        #[test]
        fn any_present_id_is_found(
            gaps in prop::collection::vec(1u64..4, 1..300),
            pick in any::<prop::sample::Index>(),
        ) {
            let ids: Vec<u64> = gaps
                .iter()
                .scan(0u64, |acc, g| { *acc += g; Some(*acc) })
                .collect();
            let text = fasta(&ids);
            let target = ids[pick.index(ids.len())];
            let rec = locate(&text, target).unwrap();
            prop_assert_eq!(rec.id, ContigId::new(target));
        }
    }
}
