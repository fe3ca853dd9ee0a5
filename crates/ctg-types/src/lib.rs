//! Foundation types for contigtree.
//!
//! Every other contigtree crate depends on `ctg-types`.
//!
//! # Key Types
//!
//! - [`ContigId`] -- Numeric identifier of a record in a contig file
//! - [`Orientation`] -- Whether a contig is read as stored or reverse-complemented
//! - [`sequence::reverse_complement`] -- The orientation transform on sequence text

pub mod contig;
pub mod error;
pub mod orientation;
pub mod sequence;

pub use contig::ContigId;
pub use error::TypeError;
pub use orientation::Orientation;
