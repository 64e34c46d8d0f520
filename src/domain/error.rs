use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Debug, Error)]
pub enum GridError {
    /// The pattern could not be turned into a grid.
    #[error("pattern format error: {0}")]
    Format(#[from] FormatError),

    /// Interior access outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} interior")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Why a pattern file was rejected.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pattern is empty")]
    Empty,

    #[error("header must be `<rows> <cols>`, found {0:?}")]
    MalformedHeader(String),

    #[error("pattern has no data rows")]
    NoDataRows,

    #[error("pattern rows must have at least one cell")]
    EmptyRow,

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
