//! Builder for assembling a [`Graph`] edge by edge.
//!
//! Validation is deferred to [`GraphBuilder::build`] so configuration can be
//! chained without intermediate `Result`s.

use tracing::instrument;

use super::Graph;
use crate::error::Result;

/// Collects declared edges and validates them into a [`Graph`].
///
/// Later declarations for the same ordered pair overwrite earlier ones.
///
/// # Examples
/// ```
/// use vecpath_core::{GraphBuilder, VertexId};
///
/// let graph = GraphBuilder::new(2, 1)
///     .with_edge(0, 1, [1])
///     .with_edge(0, 1, [4])
///     .build()?;
/// assert_eq!(graph.edge(VertexId::new(0), VertexId::new(1)), Some(&[4][..]));
/// # Ok::<(), vecpath_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    vertex_count: usize,
    dimension: usize,
    edges: Vec<(usize, usize, Vec<i32>)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices and weight
    /// vectors of length `dimension`.
    #[must_use]
    pub const fn new(vertex_count: usize, dimension: usize) -> Self {
        Self {
            vertex_count,
            dimension,
            edges: Vec::new(),
        }
    }

    /// Declares the edge `source -> target` with the given weight vector.
    #[must_use]
    pub fn with_edge(
        mut self,
        source: usize,
        target: usize,
        weights: impl Into<Vec<i32>>,
    ) -> Self {
        self.edges.push((source, target, weights.into()));
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the configured weight dimension.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimension(&self) -> usize { self.dimension }

    /// Validates the declared edges and constructs the [`Graph`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::EmptyGraph`],
    /// [`crate::GraphError::ZeroDimension`] or
    /// [`crate::GraphError::CapacityOverflow`] for an invalid shape,
    /// [`crate::GraphError::VertexOutOfBounds`] when an edge references a
    /// missing vertex and [`crate::GraphError::DimensionMismatch`] when a
    /// weight vector has the wrong length.
    #[instrument(
        name = "core.graph_build",
        err,
        skip(self),
        fields(
            vertices = self.vertex_count,
            dimension = self.dimension,
            declared = self.edges.len(),
        ),
    )]
    pub fn build(self) -> Result<Graph> {
        let mut graph = Graph::empty(self.vertex_count, self.dimension)?;
        for (source, target, weights) in &self.edges {
            graph.insert_edge(*source, *target, weights)?;
        }
        Ok(graph)
    }
}
