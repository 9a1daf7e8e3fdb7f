//! Dense adjacency representation for vector-weighted directed graphs.
//!
//! A [`Graph`] owns one flat row-major buffer holding `N * N * D` weight
//! components and an `N * N` presence mask. The cell for the ordered pair
//! `(u, v)` starts at `(u * N + v) * D`. Absence of an edge is structural:
//! [`Graph::edge`] returns `None` rather than a sentinel-filled vector.

mod builder;

use std::fmt;

use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

pub use self::builder::GraphBuilder;

/// Component value marking "no edge" in raw adjacency input.
///
/// A raw cell whose *first* component equals this value is absent; the
/// remaining components are ignored. The sentinel never appears inside a
/// constructed [`Graph`].
pub const NO_EDGE_SENTINEL: i32 = 999;

/// Largest number of weight components (`N * N * D`) a [`Graph`] may hold.
///
/// Shapes beyond this limit fail with [`GraphError::CapacityOverflow`]
/// before any allocation is attempted.
pub const MAX_TABLE_VALUES: usize = 1 << 28;

/// Index of a vertex in `[0, vertex_count)`.
///
/// # Examples
/// ```
/// use vecpath_core::VertexId;
///
/// let vertex = VertexId::new(3);
/// assert_eq!(vertex.index(), 3);
/// assert_eq!(vertex.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw vertex index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the raw vertex index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared edge borrowed from a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    source: VertexId,
    target: VertexId,
    weights: &'a [i32],
}

impl<'a> EdgeRef<'a> {
    /// Returns the tail of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the head of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the weight vector attached to the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weights(&self) -> &'a [i32] { self.weights }
}

/// Directed graph with a fixed vertex count and weight dimension.
///
/// Every ordered pair, including self-pairs, has a cell. Self-pairs carry
/// whatever the input declared; they are never assumed to be zero.
///
/// # Examples
/// ```
/// use vecpath_core::{GraphBuilder, VertexId};
///
/// let graph = GraphBuilder::new(3, 2)
///     .with_edge(0, 1, [2, 3])
///     .build()?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.dimension(), 2);
/// assert_eq!(graph.edge(VertexId::new(0), VertexId::new(1)), Some(&[2, 3][..]));
/// assert_eq!(graph.edge(VertexId::new(1), VertexId::new(0)), None);
/// # Ok::<(), vecpath_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    dimension: usize,
    present: Vec<bool>,
    components: Vec<i32>,
}

impl Graph {
    /// Creates a graph with no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`,
    /// [`GraphError::ZeroDimension`] when `dimension == 0` and
    /// [`GraphError::CapacityOverflow`] when the dense table exceeds
    /// [`MAX_TABLE_VALUES`] or cannot be allocated.
    pub fn empty(vertex_count: usize, dimension: usize) -> Result<Self> {
        let (cells, values) = table_size(vertex_count, dimension)?;
        Ok(Self {
            vertex_count,
            dimension,
            present: filled(cells, false, vertex_count, dimension)?,
            components: filled(values, 0, vertex_count, dimension)?,
        })
    }

    /// Allocates a flat `N * N * D` buffer with every component set to
    /// [`NO_EDGE_SENTINEL`], ready for [`Graph::from_sentinel_buffer`].
    ///
    /// # Errors
    /// Returns the shape errors of [`Graph::empty`].
    ///
    /// # Examples
    /// ```
    /// use vecpath_core::{Graph, GraphError, NO_EDGE_SENTINEL};
    ///
    /// let buffer = Graph::sentinel_buffer(2, 3)?;
    /// assert_eq!(buffer, vec![NO_EDGE_SENTINEL; 12]);
    /// assert!(matches!(
    ///     Graph::sentinel_buffer(200_000, 50),
    ///     Err(GraphError::CapacityOverflow { .. })
    /// ));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn sentinel_buffer(vertex_count: usize, dimension: usize) -> Result<Vec<i32>> {
        let (_, values) = table_size(vertex_count, dimension)?;
        filled(values, NO_EDGE_SENTINEL, vertex_count, dimension)
    }

    /// Builds a graph from a flat row-major buffer in which absent edges are
    /// marked by a first component equal to [`NO_EDGE_SENTINEL`].
    ///
    /// This is the layout produced by loaders that pre-fill every cell with
    /// the sentinel before reading declared edges.
    ///
    /// # Errors
    /// Returns the shape errors of [`Graph::empty`] and
    /// [`GraphError::BufferLengthMismatch`] when `components.len()` is not
    /// `vertex_count * vertex_count * dimension`.
    ///
    /// # Examples
    /// ```
    /// use vecpath_core::{Graph, NO_EDGE_SENTINEL, VertexId};
    ///
    /// let s = NO_EDGE_SENTINEL;
    /// let graph = Graph::from_sentinel_buffer(2, 1, vec![s, 7, s, s])?;
    /// assert_eq!(graph.edge_count(), 1);
    /// assert!(graph.has_edge(VertexId::new(0), VertexId::new(1)));
    /// # Ok::<(), vecpath_core::GraphError>(())
    /// ```
    #[instrument(
        name = "core.graph_from_sentinel_buffer",
        err,
        skip(components),
        fields(values = components.len()),
    )]
    pub fn from_sentinel_buffer(
        vertex_count: usize,
        dimension: usize,
        mut components: Vec<i32>,
    ) -> Result<Self> {
        let (cells, values) = table_size(vertex_count, dimension)?;
        if components.len() != values {
            return Err(GraphError::BufferLengthMismatch {
                expected: values,
                actual: components.len(),
            });
        }

        let mut present = Vec::new();
        present
            .try_reserve_exact(cells)
            .map_err(|_| capacity_overflow(vertex_count, dimension))?;
        for cell in components.chunks_exact_mut(dimension) {
            let declared = cell.first().is_some_and(|&first| first != NO_EDGE_SENTINEL);
            if !declared {
                cell.fill(0);
            }
            present.push(declared);
        }

        let graph = Self {
            vertex_count,
            dimension,
            present,
            components,
        };
        debug!(edges = graph.edge_count(), "graph constructed from sentinel buffer");
        Ok(graph)
    }

    /// Builds a graph from a fully populated `N x N` table of raw weight
    /// vectors using the first-component sentinel convention.
    ///
    /// # Errors
    /// Returns [`GraphError::ColumnCountMismatch`] when a row does not have
    /// one cell per vertex, [`GraphError::DimensionMismatch`] when a cell
    /// does not have `dimension` components, plus the shape errors of
    /// [`Graph::empty`].
    ///
    /// # Examples
    /// ```
    /// use vecpath_core::{Graph, NO_EDGE_SENTINEL as S};
    ///
    /// let graph = Graph::from_sentinel_table(1, vec![
    ///     vec![vec![S], vec![4]],
    ///     vec![vec![S], vec![S]],
    /// ])?;
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), vecpath_core::GraphError>(())
    /// ```
    pub fn from_sentinel_table(dimension: usize, table: Vec<Vec<Vec<i32>>>) -> Result<Self> {
        let vertex_count = table.len();
        let (_, values) = table_size(vertex_count, dimension)?;
        let mut components = Vec::with_capacity(values);
        for (row_index, row) in table.into_iter().enumerate() {
            check_row_width(row_index, row.len(), vertex_count)?;
            for (column, cell) in row.into_iter().enumerate() {
                check_dimension(row_index, column, cell.len(), dimension)?;
                components.extend(cell);
            }
        }
        Self::from_sentinel_buffer(vertex_count, dimension, components)
    }

    /// Builds a graph from an `N x N` table of optional weight vectors.
    ///
    /// `None` marks an absent edge. Unlike [`Graph::from_sentinel_table`],
    /// a declared vector whose first component is [`NO_EDGE_SENTINEL`] is
    /// kept as a real edge.
    ///
    /// # Errors
    /// Same as [`Graph::from_sentinel_table`].
    pub fn try_from_table(dimension: usize, table: Vec<Vec<Option<Vec<i32>>>>) -> Result<Self> {
        let vertex_count = table.len();
        let mut graph = Self::empty(vertex_count, dimension)?;
        for (row_index, row) in table.into_iter().enumerate() {
            check_row_width(row_index, row.len(), vertex_count)?;
            for (column, cell) in row.into_iter().enumerate() {
                if let Some(weights) = cell {
                    graph.insert_edge(row_index, column, &weights)?;
                }
            }
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of components in every weight vector.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimension(&self) -> usize { self.dimension }

    /// Returns whether `vertex` indexes a vertex of this graph.
    #[must_use]
    pub const fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count
    }

    /// Returns whether an edge `source -> target` is declared.
    ///
    /// Out-of-range vertices have no edges.
    #[must_use]
    pub fn has_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.cell_index(source, target)
            .and_then(|cell| self.present.get(cell))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the weight vector of the edge `source -> target`, or `None`
    /// when no edge is declared.
    #[must_use]
    pub fn edge(&self, source: VertexId, target: VertexId) -> Option<&[i32]> {
        let cell = self.cell_index(source, target)?;
        if !self.present.get(cell).copied().unwrap_or(false) {
            return None;
        }
        let start = cell * self.dimension;
        self.components.get(start..start + self.dimension)
    }

    /// Iterates over declared edges in source-major, target-minor order.
    ///
    /// # Examples
    /// ```
    /// use vecpath_core::GraphBuilder;
    ///
    /// let graph = GraphBuilder::new(3, 1)
    ///     .with_edge(2, 0, [1])
    ///     .with_edge(0, 2, [5])
    ///     .with_edge(0, 1, [4])
    ///     .build()?;
    /// let order: Vec<(usize, usize)> = graph
    ///     .edges()
    ///     .map(|edge| (edge.source().index(), edge.target().index()))
    ///     .collect();
    /// assert_eq!(order, [(0, 1), (0, 2), (2, 0)]);
    /// # Ok::<(), vecpath_core::GraphError>(())
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.present
            .iter()
            .zip(self.components.chunks_exact(self.dimension))
            .enumerate()
            .filter(|(_, (present, _))| **present)
            .map(|(cell, (_, weights))| EdgeRef {
                source: VertexId::new(cell / self.vertex_count),
                target: VertexId::new(cell % self.vertex_count),
                weights,
            })
    }

    /// Returns the number of declared edges, self-edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.present.iter().filter(|present| **present).count()
    }

    pub(crate) fn insert_edge(&mut self, source: usize, target: usize, weights: &[i32]) -> Result<()> {
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        check_dimension(source, target, weights.len(), self.dimension)?;

        let cell = source * self.vertex_count + target;
        let start = cell * self.dimension;
        if let (Some(slot), Some(flag)) = (
            self.components.get_mut(start..start + self.dimension),
            self.present.get_mut(cell),
        ) {
            slot.copy_from_slice(weights);
            *flag = true;
        }
        Ok(())
    }

    fn cell_index(&self, source: VertexId, target: VertexId) -> Option<usize> {
        (self.contains(source) && self.contains(target))
            .then(|| source.index() * self.vertex_count + target.index())
    }
}

fn table_size(vertex_count: usize, dimension: usize) -> Result<(usize, usize)> {
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    if dimension == 0 {
        return Err(GraphError::ZeroDimension);
    }
    let cells = vertex_count.checked_mul(vertex_count);
    match cells.and_then(|cells| Some((cells, cells.checked_mul(dimension)?))) {
        Some((cells, values)) if values <= MAX_TABLE_VALUES => Ok((cells, values)),
        _ => Err(capacity_overflow(vertex_count, dimension)),
    }
}

const fn capacity_overflow(vertex_count: usize, dimension: usize) -> GraphError {
    GraphError::CapacityOverflow {
        vertex_count,
        dimension,
    }
}

/// Allocates `len` copies of `value`, reporting allocation failure instead of
/// aborting.
fn filled<T: Clone>(
    len: usize,
    value: T,
    vertex_count: usize,
    dimension: usize,
) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| capacity_overflow(vertex_count, dimension))?;
    buffer.resize(len, value);
    Ok(buffer)
}

fn check_row_width(row: usize, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(GraphError::ColumnCountMismatch {
            row,
            expected,
            actual,
        })
    }
}

fn check_dimension(
    source_vertex: usize,
    target_vertex: usize,
    actual: usize,
    expected: usize,
) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(GraphError::DimensionMismatch {
            source_vertex,
            target_vertex,
            expected,
            actual,
        })
    }
}
