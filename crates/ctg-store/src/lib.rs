//! Read-only access to contig files for contigtree.
//!
//! A contig file (Minia's `contigs.fa`) is a flat sequence of two-line
//! records: a header line `>ID meta... L:+:ID:-...` and a sequence line.
//! Records appear in increasing id order but there is no index, so lookup by
//! id is done by extrapolating from observed record density.
//!
//! # Layers
//!
//! - [`RecordStore`] -- memory-mapped (or in-memory) byte view with a
//!   record-boundary search and two-line record reads
//! - [`RecordLocator`] -- density-extrapolation search with a bounded
//!   number of iterations
//! - [`RecordSource`] -- the lookup seam used by traversal, implemented by
//!   [`ContigFile`] and [`InMemoryContigs`]
//!
//! # Design Rules
//!
//! 1. The store never writes; files are mapped read-only.
//! 2. A file is mapped per lookup and released when the lookup returns.
//! 3. Lookup failure is an error, never an infinite loop.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod locator;
pub mod record;
pub mod source;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use locator::{LocatorConfig, RecordLocator};
pub use record::{parse_header_id, Record, HEADER_SENTINEL};
pub use source::{ContigFile, InMemoryContigs, RecordSource};
pub use store::RecordStore;
