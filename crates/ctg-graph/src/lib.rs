//! Contig link graph traversal.
//!
//! Builds bounded-depth trees over the links Minia embeds in contig headers,
//! tracking whether each contig is read forward or reverse-complemented, and
//! collapses the visits of a whole run into one segment per contig.

pub mod builder;
pub mod dedup;
pub mod error;
pub mod link;
pub mod segment;
pub mod tree;

pub use builder::TreeBuilder;
pub use dedup::{dedupe, VisitSet};
pub use error::{GraphError, GraphResult};
pub use link::{link_tokens, Link, LINK_PREFIX};
pub use segment::Segment;
pub use tree::{ContigTree, NodeIndex, TreeNode};
