//! All-pairs shortest paths with negative-cycle detection.
//!
//! The matrix is initialised from direct edges with the diagonal fixed at
//! zero, then relaxed with the intermediate vertex `k` as the outermost loop,
//! `i` in the middle and `j` innermost. A negative diagonal entry after the
//! final `k` means the graph contains a negative cycle.
//!
//! Declared self-edges are ignored during initialisation: `dist[i][i]`
//! always starts at zero, so a lone negative self-loop is not reported as a
//! cycle. Longer negative cycles through `i` still drive `dist[i][i]` below
//! zero and are detected.

use tracing::{debug, info, instrument, warn};

use crate::{
    distance::{Distance, DistanceMatrix},
    graph::{Graph, VertexId},
    outcome::{NegativeCycle, Outcome},
    reducer::{Magnitude, WeightReducer},
    telemetry,
};

const ALGORITHM: &str = "floyd_warshall";

/// Computes shortest distances between every ordered pair of vertices using
/// [`Magnitude`] costs.
///
/// # Examples
/// ```
/// use vecpath_core::{Distance, GraphBuilder, NegativeCycle, Outcome, VertexId, floyd_warshall};
///
/// let graph = GraphBuilder::new(2, 1)
///     .with_edge(0, 1, [1])
///     .with_edge(1, 0, [-3])
///     .build()?;
/// assert_eq!(floyd_warshall(&graph), Outcome::NegativeCycle(NegativeCycle::Anywhere));
///
/// let graph = GraphBuilder::new(2, 1).with_edge(0, 1, [7]).build()?;
/// let matrix = floyd_warshall(&graph).into_distances().expect("no cycle");
/// assert_eq!(matrix.get(VertexId::new(0), VertexId::new(1)), Some(Distance::Finite(7.0)));
/// assert_eq!(matrix.get(VertexId::new(1), VertexId::new(0)), Some(Distance::Unreachable));
/// # Ok::<(), vecpath_core::GraphError>(())
/// ```
pub fn floyd_warshall(graph: &Graph) -> Outcome<DistanceMatrix> {
    floyd_warshall_with(graph, &Magnitude)
}

/// Computes shortest distances between every ordered pair of vertices using
/// costs from `reducer`.
///
/// Any negative cycle in the graph yields
/// [`Outcome::NegativeCycle`] with [`NegativeCycle::Anywhere`].
#[instrument(
    name = "core.floyd_warshall",
    skip(graph, reducer),
    fields(vertices = graph.vertex_count(), dimension = graph.dimension()),
)]
pub fn floyd_warshall_with<R>(graph: &Graph, reducer: &R) -> Outcome<DistanceMatrix>
where
    R: WeightReducer + ?Sized,
{
    let n = graph.vertex_count();
    let mut dist = initial_matrix(graph, reducer);

    let mut relaxations = 0_u64;
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let candidate = dist[i * n + k] + dist[k * n + j];
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                    relaxations += 1;
                }
            }
        }
    }
    debug!(relaxations, "all intermediate vertices processed");
    telemetry::record_relaxations(ALGORITHM, relaxations);

    if (0..n).any(|i| dist[i * n + i] < Distance::ZERO) {
        warn!("negative-weight cycle detected on the diagonal");
        telemetry::record_negative_cycle(ALGORITHM);
        return Outcome::NegativeCycle(NegativeCycle::Anywhere);
    }

    let matrix = DistanceMatrix::new(n, dist);
    info!(
        reachable_pairs = matrix
            .rows()
            .flatten()
            .filter(|distance| distance.is_reachable())
            .count(),
        "all-pairs search completed"
    );
    Outcome::Distances(matrix)
}

fn initial_matrix<R>(graph: &Graph, reducer: &R) -> Vec<Distance>
where
    R: WeightReducer + ?Sized,
{
    let n = graph.vertex_count();
    let mut dist = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let initial = if i == j {
                Distance::ZERO
            } else {
                graph
                    .edge(VertexId::new(i), VertexId::new(j))
                    .map_or(Distance::Unreachable, |weights| {
                        Distance::Finite(reducer.reduce(weights))
                    })
            };
            dist.push(initial);
        }
    }
    dist
}
