use std::path::{Path, PathBuf};

use ctg_types::ContigId;

use crate::error::StoreResult;
use crate::locator::{LocatorConfig, RecordLocator};
use crate::record::Record;
use crate::store::RecordStore;

/// Anything that can look up a contig record by id.
///
/// This is the seam traversal code depends on. Implementations must be
/// read-only: the same id always yields the same record.
pub trait RecordSource {
    /// Locate the record for `id`.
    ///
    /// Returns `Err(StoreError::NotFound)` if the id cannot be reached.
    fn locate(&self, id: ContigId) -> StoreResult<Record>;
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn locate(&self, id: ContigId) -> StoreResult<Record> {
        (**self).locate(id)
    }
}

/// A contig file on disk.
///
/// Each [`locate`](RecordSource::locate) maps the file afresh and unmaps it
/// before returning, on success and failure alike. Nothing is cached between
/// calls.
#[derive(Clone, Debug)]
pub struct ContigFile {
    path: PathBuf,
    locator: RecordLocator,
}

impl ContigFile {
    pub fn new(path: impl Into<PathBuf>, config: LocatorConfig) -> Self {
        Self {
            path: path.into(),
            locator: RecordLocator::new(config),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for ContigFile {
    fn locate(&self, id: ContigId) -> StoreResult<Record> {
        let mut store = RecordStore::open(&self.path)?;
        self.locator.locate(&mut store, id)
    }
}

/// Contig file contents held in memory.
///
/// Intended for tests and embedding; behaves exactly like [`ContigFile`]
/// over the same bytes.
#[derive(Clone, Debug, Default)]
pub struct InMemoryContigs {
    data: Vec<u8>,
    locator: RecordLocator,
}

impl InMemoryContigs {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self::with_config(data, LocatorConfig::default())
    }

    pub fn with_config(data: impl Into<Vec<u8>>, config: LocatorConfig) -> Self {
        Self {
            data: data.into(),
            locator: RecordLocator::new(config),
        }
    }

    /// Size of the held contents in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl RecordSource for InMemoryContigs {
    fn locate(&self, id: ContigId) -> StoreResult<Record> {
        let mut store = RecordStore::from_bytes(self.data.as_slice());
        self.locator.locate(&mut store, id)
    }
}
