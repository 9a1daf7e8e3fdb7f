//! Error types for synthetic graph generation.

use vecpath_core::GraphError;

/// Errors that may occur while generating a synthetic graph.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested weight dimension was zero.
    #[error("dimension must be greater than zero")]
    ZeroDimension,
    /// The edge density was not a percentage.
    #[error("edge density must be between 0 and 100 percent (got {percent})")]
    InvalidDensity {
        /// Configured density.
        percent: u8,
    },
    /// The component range was empty.
    #[error("invalid weight range: min={min}, max={max}")]
    InvalidWeightRange {
        /// Lower bound for each component.
        min: i32,
        /// Upper bound for each component.
        max: i32,
    },
    /// The generated edges were rejected by the graph builder.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}
