use thiserror::Error;
use vecpath_core::{GraphError, define_error_codes};

/// An error produced while loading a graph from delimited text.
///
/// Line numbers are 1-based and count every physical line, blank ones
/// included.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CsvGraphError {
    /// The input held no header line.
    #[error("input is empty; expected an `N,D` header line")]
    MissingHeader,
    /// The header was not two positive integers.
    #[error("line {line}: invalid header `{found}`; expected two positive integers `N,D`")]
    InvalidHeader {
        /// Line holding the header.
        line: usize,
        /// Header text as read.
        found: String,
    },
    /// A vertex field was missing or not a non-negative integer.
    #[error("line {line}: invalid vertex `{found}`")]
    InvalidVertex {
        /// Offending line.
        line: usize,
        /// Field text as read.
        found: String,
    },
    /// A vertex index was not below the declared vertex count.
    #[error("line {line}: vertex {vertex} is outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// Offending line.
        line: usize,
        /// Parsed vertex index.
        vertex: usize,
        /// Declared vertex count.
        vertex_count: usize,
    },
    /// A weight component was not an `i32`.
    #[error("line {line}: weight component {position} `{found}` is not an integer")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Zero-based component position.
        position: usize,
        /// Field text as read.
        found: String,
    },
    /// An edge line carried more components than the declared dimension.
    #[error("line {line}: {actual} weight components exceed dimension {dimension}")]
    TooManyComponents {
        /// Offending line.
        line: usize,
        /// Declared dimension.
        dimension: usize,
        /// Components found on the line.
        actual: usize,
    },
    /// The parsed table was rejected by the graph model.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

define_error_codes! {
    /// Stable codes describing [`CsvGraphError`] variants.
    enum CsvGraphErrorCode for CsvGraphError {
        /// The input held no header line.
        MissingHeader => MissingHeader => "CSV_MISSING_HEADER",
        /// The header was not two positive integers.
        InvalidHeader => InvalidHeader { .. } => "CSV_INVALID_HEADER",
        /// A vertex field was missing or malformed.
        InvalidVertex => InvalidVertex { .. } => "CSV_INVALID_VERTEX",
        /// A vertex index was out of range.
        VertexOutOfRange => VertexOutOfRange { .. } => "CSV_VERTEX_OUT_OF_RANGE",
        /// A weight component was malformed.
        InvalidWeight => InvalidWeight { .. } => "CSV_INVALID_WEIGHT",
        /// Too many weight components on one line.
        TooManyComponents => TooManyComponents { .. } => "CSV_TOO_MANY_COMPONENTS",
        /// The graph model rejected the table.
        Graph => Graph { .. } => "CSV_GRAPH",
        /// Reading the input failed.
        Io => Io { .. } => "CSV_IO",
    }
}
