//! Error types for the vecpath core library.
//!
//! Defines the precondition failures surfaced while constructing a graph or
//! invoking an algorithm, together with stable machine-readable codes and a
//! convenient result alias. Negative cycles are not errors; see
//! [`crate::Outcome`].

use thiserror::Error;

/// Attaches a stable code enum with `as_str` and a `code()` accessor to an
/// error enum. Shared with the provider crates.
#[doc(hidden)]
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced when a graph is malformed or an algorithm receives an
/// argument outside the graph's bounds.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph declared no vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// Weight vectors must have positive dimension.
    #[error("weight vectors must have positive dimension")]
    ZeroDimension,
    /// A row of the adjacency table did not have one cell per vertex.
    #[error("adjacency row {row} has {actual} cells but the graph has {expected} vertices")]
    ColumnCountMismatch {
        /// Row (source vertex) with the wrong width.
        row: usize,
        /// Number of vertices in the graph.
        expected: usize,
        /// Number of cells found in the row.
        actual: usize,
    },
    /// A flat component buffer did not hold `N * N * D` values.
    #[error("component buffer has length {actual} but {expected} values are required")]
    BufferLengthMismatch {
        /// Required buffer length.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A weight vector did not have the declared dimension.
    #[error("edge ({source_vertex}, {target_vertex}) has {actual} components but dimension is {expected}")]
    DimensionMismatch {
        /// Tail of the offending edge.
        source_vertex: usize,
        /// Head of the offending edge.
        target_vertex: usize,
        /// Declared weight dimension.
        expected: usize,
        /// Length of the supplied weight vector.
        actual: usize,
    },
    /// A vertex index was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
    VertexOutOfBounds {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The dense table would not fit in addressable memory.
    #[error("graph with {vertex_count} vertices and dimension {dimension} exceeds capacity limits")]
    CapacityOverflow {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested weight dimension.
        dimension: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph declared no vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// Weight vectors must have positive dimension.
        ZeroDimension => ZeroDimension => "GRAPH_ZERO_DIMENSION",
        /// A row of the adjacency table did not have one cell per vertex.
        ColumnCountMismatch => ColumnCountMismatch { .. } => "GRAPH_COLUMN_COUNT_MISMATCH",
        /// A flat component buffer did not hold `N * N * D` values.
        BufferLengthMismatch => BufferLengthMismatch { .. } => "GRAPH_BUFFER_LENGTH_MISMATCH",
        /// A weight vector did not have the declared dimension.
        DimensionMismatch => DimensionMismatch { .. } => "GRAPH_DIMENSION_MISMATCH",
        /// A vertex index was outside the graph.
        VertexOutOfBounds => VertexOutOfBounds { .. } => "GRAPH_VERTEX_OUT_OF_BOUNDS",
        /// The dense table would not fit in addressable memory.
        CapacityOverflow => CapacityOverflow { .. } => "GRAPH_CAPACITY_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
