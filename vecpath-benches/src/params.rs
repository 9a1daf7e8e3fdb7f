//! Benchmark parameter types.

use std::fmt;

/// Parameters for a shortest-path benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Length of every edge weight vector.
    pub dimension: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.dimension)
    }
}
