//! Error types for seqfind

use thiserror::Error;

/// Result type alias for seqfind operations
pub type Result<T> = std::result::Result<T, SeqfindError>;

/// Error types that can occur in seqfind
///
/// A search that matches nothing is a normal empty result, never an error.
#[derive(Debug, Error)]
pub enum SeqfindError {
    /// I/O error while opening or reading a sequence source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Empty search query
    ///
    /// Rejected before any scan runs: an empty query must not silently
    /// match every record.
    #[error("empty query: a search needs at least one character")]
    EmptyQuery,

    /// Search attempted before any FASTA file was successfully loaded
    #[error("no sequences loaded: import a FASTA file before searching")]
    NoRecordsLoaded,
}
