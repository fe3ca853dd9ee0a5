use ctg_types::ContigId;

/// Errors from contig file access.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record could not be decoded at the given byte offset.
    #[error("malformed record at offset {offset}: {reason}")]
    MalformedRecord { offset: u64, reason: String },

    /// The locator ran out of iterations without reaching the target.
    #[error("contig {id} not found after {iterations} iterations")]
    NotFound { id: ContigId, iterations: usize },

    /// I/O error from opening or mapping the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            offset: offset as u64,
            reason: reason.into(),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
