//! Single-source shortest paths with negative-cycle detection.
//!
//! Costs are reduced once per edge up front. The relaxation then runs exactly
//! `N - 1` full passes over the edges in source-major, target-minor order,
//! followed by one detection pass. Only a strict improvement writes, so the
//! first improving update for a vertex within a pass wins ties.

use tracing::{debug, info, instrument, warn};

use crate::{
    distance::{Distance, SingleSourceDistances},
    error::{GraphError, Result},
    graph::{Graph, VertexId},
    outcome::{NegativeCycle, Outcome},
    reducer::{Magnitude, WeightReducer},
    telemetry,
};

const ALGORITHM: &str = "bellman_ford";

/// An edge with its cost already reduced.
#[derive(Clone, Copy, Debug)]
struct CostedEdge {
    source: usize,
    target: usize,
    cost: Distance,
}

/// Computes shortest distances from `source` using [`Magnitude`] costs.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfBounds`] when `source` is not a vertex of
/// `graph`. No relaxation is attempted in that case.
///
/// # Examples
/// ```
/// use vecpath_core::{Distance, GraphBuilder, VertexId, bellman_ford};
///
/// let graph = GraphBuilder::new(3, 1)
///     .with_edge(0, 1, [4])
///     .with_edge(1, 2, [-2])
///     .build()?;
/// let outcome = bellman_ford(&graph, VertexId::new(0))?;
/// let distances = outcome.distances().expect("no negative cycle");
/// assert_eq!(
///     distances.as_slice(),
///     [Distance::Finite(0.0), Distance::Finite(4.0), Distance::Finite(2.0)],
/// );
/// # Ok::<(), vecpath_core::GraphError>(())
/// ```
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<Outcome<SingleSourceDistances>> {
    bellman_ford_with(graph, source, &Magnitude)
}

/// Computes shortest distances from `source` using costs from `reducer`.
///
/// A negative cycle reachable from `source` yields
/// [`Outcome::NegativeCycle`] tagged with the source; cycles elsewhere in the
/// graph do not affect the result.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfBounds`] when `source` is not a vertex of
/// `graph`.
#[instrument(
    name = "core.bellman_ford",
    err,
    skip(graph, reducer),
    fields(
        vertices = graph.vertex_count(),
        dimension = graph.dimension(),
        source = %source,
    ),
)]
pub fn bellman_ford_with<R>(
    graph: &Graph,
    source: VertexId,
    reducer: &R,
) -> Result<Outcome<SingleSourceDistances>>
where
    R: WeightReducer + ?Sized,
{
    let vertex_count = graph.vertex_count();
    if !graph.contains(source) {
        return Err(GraphError::VertexOutOfBounds {
            vertex: source.index(),
            vertex_count,
        });
    }

    let edges = reduce_edges(graph, reducer);
    let mut distances = vec![Distance::Unreachable; vertex_count];
    distances[source.index()] = Distance::ZERO;

    let mut relaxations = 0_u64;
    for _ in 1..vertex_count {
        relaxations += relax_pass(&mut distances, &edges);
    }
    debug!(
        passes = vertex_count.saturating_sub(1),
        edges = edges.len(),
        relaxations,
        "relaxation passes completed"
    );
    telemetry::record_relaxations(ALGORITHM, relaxations);

    if has_improving_edge(&distances, &edges) {
        warn!(source = %source, "negative-weight cycle reachable from source");
        telemetry::record_negative_cycle(ALGORITHM);
        return Ok(Outcome::NegativeCycle(NegativeCycle::ReachableFrom(source)));
    }

    let result = SingleSourceDistances::new(source, distances);
    info!(
        reachable = result.iter().filter(|(_, distance)| distance.is_reachable()).count(),
        "single-source search completed"
    );
    Ok(Outcome::Distances(result))
}

fn reduce_edges<R>(graph: &Graph, reducer: &R) -> Vec<CostedEdge>
where
    R: WeightReducer + ?Sized,
{
    graph
        .edges()
        .map(|edge| CostedEdge {
            source: edge.source().index(),
            target: edge.target().index(),
            cost: Distance::Finite(reducer.reduce(edge.weights())),
        })
        .collect()
}

/// Runs one full relaxation pass, returning the number of updates.
fn relax_pass(distances: &mut [Distance], edges: &[CostedEdge]) -> u64 {
    let mut updates = 0;
    for edge in edges {
        let candidate = distances[edge.source] + edge.cost;
        if candidate < distances[edge.target] {
            distances[edge.target] = candidate;
            updates += 1;
        }
    }
    updates
}

fn has_improving_edge(distances: &[Distance], edges: &[CostedEdge]) -> bool {
    edges
        .iter()
        .any(|edge| distances[edge.source] + edge.cost < distances[edge.target])
}
