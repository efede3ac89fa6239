use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for gff2apollo operations.
#[derive(Debug, Error)]
pub enum Gff2ApolloError {
    /// Input directory is missing or not a directory.
    #[error("input directory {0:?} does not exist or is not a directory")]
    InputDir(PathBuf),
    /// A start/end column is not an integer.
    #[error("line {line}: invalid {column} coordinate {value:?}: {source}")]
    Coordinate {
        line: usize,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// The file holds no 9-column feature line, so no span can be computed.
    #[error("no feature lines found, cannot compute a sequence span")]
    EmptyFeatureSet,
    /// Every feature line has start past end, so the span is inverted.
    #[error("span start {start} lies past span end {end}")]
    InvertedSpan { start: i64, end: i64 },
    /// A feature line names a different sequence than the first one.
    #[error("line {line}: sequence id {found:?} differs from {expected:?}")]
    InconsistentSeqid {
        line: usize,
        expected: String,
        found: String,
    },
    /// A feature line lies on a different strand than the first one.
    #[error("line {line}: strand {found} differs from {expected}")]
    InconsistentStrand {
        line: usize,
        expected: char,
        found: char,
    },
    /// At least one file of a batch could not be converted.
    #[error("{failed} of {total} conversions failed")]
    BatchFailed { failed: usize, total: usize },
    /// Wraps failures to move a finished temporary file into place.
    #[error("persist error: {0}")]
    Persist(#[from] tempfile::PersistError),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gff2apollo operations.
pub type Result<T> = std::result::Result<T, Gff2ApolloError>;
