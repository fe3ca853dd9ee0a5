//! Random-access, read-only view over a contig file.
//!
//! The file is a flat run of two-line records (header, then sequence). The
//! store knows nothing about identifiers beyond decoding them; finding a
//! record by id is the [`RecordLocator`](crate::locator::RecordLocator)'s job.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::trace;

use crate::error::{StoreError, StoreResult};
use crate::record::{Record, HEADER_SENTINEL};

const MARKER: u8 = HEADER_SENTINEL as u8;

/// Read-only record view with a read cursor.
///
/// Backed by a memory map when opened from disk, or by any byte buffer for
/// tests and embedding. The cursor sits just past the last record read, so
/// [`read_next_record`](Self::read_next_record) continues sequentially.
#[derive(Debug)]
pub struct RecordStore<B = Mmap> {
    data: B,
    cursor: usize,
}

impl RecordStore<Mmap> {
    /// Memory-map the file at `path` read-only.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let file = File::open(path)?;
        // SAFETY: the map is read-only and never outlives this store. Files
        // truncated by another process while mapped are outside our contract.
        let data = unsafe { Mmap::map(&file)? };
        trace!(path = %path.display(), len = data.len(), "mapped contig file");
        Ok(Self { data, cursor: 0 })
    }
}

impl<B: AsRef<[u8]>> RecordStore<B> {
    /// Wrap an in-memory buffer.
    pub fn from_bytes(data: B) -> Self {
        Self { data, cursor: 0 }
    }

    fn bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Total length in bytes.
    pub fn size(&self) -> u64 {
        self.bytes().len() as u64
    }

    /// Current read cursor.
    pub fn cursor(&self) -> u64 {
        self.cursor as u64
    }

    /// Returns `true` if nothing but whitespace remains after the cursor.
    pub fn at_end(&self) -> bool {
        self.bytes()
            .get(self.cursor..)
            .map_or(true, |rest| rest.iter().all(u8::is_ascii_whitespace))
    }

    /// Offset of the nearest record start at or before `offset`.
    ///
    /// A record start is a `>` that begins a line. Offsets past the end of
    /// the file clamp to the last byte.
    pub fn find_boundary_before(&self, offset: u64) -> StoreResult<u64> {
        let data = self.bytes();
        if data.is_empty() {
            return Err(StoreError::malformed(0, "file is empty"));
        }
        let mut end = (offset.min(data.len() as u64 - 1) as usize) + 1;
        while let Some(pos) = data[..end].iter().rposition(|&b| b == MARKER) {
            if pos == 0 || data[pos - 1] == b'\n' {
                return Ok(pos as u64);
            }
            end = pos;
        }
        Err(StoreError::malformed(
            offset as usize,
            "no record boundary at or before offset",
        ))
    }

    /// Read the record whose header starts at `offset`.
    pub fn read_record_at(&mut self, offset: u64) -> StoreResult<Record> {
        self.cursor = offset as usize;
        self.read_next_record()
    }

    /// Read the two lines following the cursor as a record.
    pub fn read_next_record(&mut self) -> StoreResult<Record> {
        let start = self.cursor;
        let (header, after_header) = self
            .line_at(start)
            .ok_or_else(|| StoreError::malformed(start, "missing header line"))?;
        let (sequence, after_sequence) = self
            .line_at(after_header)
            .ok_or_else(|| StoreError::malformed(start, "missing sequence line"))?;
        let record = Record::from_lines(start, header, sequence)?;
        self.cursor = after_sequence;
        Ok(record)
    }

    /// The line starting at `pos` (without its newline) and the offset of
    /// the next line. `None` at end of data.
    fn line_at(&self, pos: usize) -> Option<(&[u8], usize)> {
        let data = self.bytes();
        if pos >= data.len() {
            return None;
        }
        let rest = &data[pos..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(nl) => Some((&rest[..nl], pos + nl + 1)),
            None => Some((rest, data.len())),
        }
    }
}
