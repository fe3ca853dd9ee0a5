//! Error types for contig graph traversal.

use ctg_store::StoreError;

/// Errors that can occur while building a contig tree.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A link token did not have the `L:<dir>:<id>:<dir>` shape.
    #[error("malformed link {token:?}: {reason}")]
    MalformedLink {
        /// The offending token.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A header line did not start with the record sentinel.
    #[error("malformed header line: {0:?}")]
    MalformedHeader(String),

    /// Record lookup failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
