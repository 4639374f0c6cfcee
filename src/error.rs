//! Table error types.

use thiserror::Error;

/// Broad classes of failure, used by callers to decide whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad table or configuration, reported before anything is drawn
    Construction,
    /// Coordinates outside the grid, or a header write
    Bounds,
    /// Terminal too small for the composed frame
    Viewport,
    /// Content no longer matches the cached layout
    Invariant,
    /// The display surface failed to write
    Io,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table needs at least one column")]
    NoColumns,

    #[error("row {row} has {found} values but the table has {expected} columns")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("even {axis} requested for a table with no {axis}")]
    EmptyAxis { axis: &'static str },

    #[error("invalid border style: {0}")]
    InvalidBorder(String),

    #[error("invalid table document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("cell ({col}, {row}) is outside the {cols}x{rows} table")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },

    #[error("header row cannot be edited or colored (column {col})")]
    HeaderRow { col: usize },

    #[error("table has not been composed yet")]
    NotComposed,

    #[error(
        "viewport must be at least {required_width}x{required_height} (width, height), \
         but currently is {width}x{height}"
    )]
    ViewportTooSmall {
        required_width: usize,
        required_height: usize,
        width: usize,
        height: usize,
    },

    #[error("{lines} lines cannot be centered in a height of {height}")]
    VerticalOverflow { lines: usize, height: usize },

    #[error(
        "cell ({col}, {row}) needs {lines} lines of width {width} but its layout \
         slot is {height} lines of width {column_width}"
    )]
    StaleLayout {
        col: usize,
        row: usize,
        lines: usize,
        width: usize,
        height: usize,
        column_width: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::NoColumns
            | TableError::RowWidthMismatch { .. }
            | TableError::EmptyAxis { .. }
            | TableError::InvalidBorder(_)
            | TableError::Document(_) => ErrorKind::Construction,
            TableError::OutOfBounds { .. } | TableError::HeaderRow { .. } | TableError::NotComposed => {
                ErrorKind::Bounds
            }
            TableError::ViewportTooSmall { .. } => ErrorKind::Viewport,
            TableError::VerticalOverflow { .. } | TableError::StaleLayout { .. } => {
                ErrorKind::Invariant
            }
            TableError::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether a caller can reasonably carry on (ignore, beep, or retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Bounds | ErrorKind::Viewport)
    }
}

pub type TableResult<T> = Result<T, TableError>;
