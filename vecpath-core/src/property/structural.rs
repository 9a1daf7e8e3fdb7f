//! Properties: structural invariants of computed distances.
//!
//! - The Floyd-Warshall diagonal is zero whenever distances are returned.
//! - A vertex is unreachable in the Bellman-Ford result iff no declared path
//!   leads to it.
//! - Repeating either search on the same graph yields identical results.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Distance, VertexId, bellman_ford, floyd_warshall};

use super::{oracle::reachable_from, types::GraphFixture};

/// Runs the structural invariants property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    check_zero_diagonal(fixture)?;
    for index in 0..fixture.graph.vertex_count() {
        check_reachability(fixture, index)?;
    }
    Ok(())
}

/// Runs the idempotence property for the given fixture.
pub(super) fn run_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    if floyd_warshall(graph) != floyd_warshall(graph) {
        return Err(TestCaseError::fail(format!(
            "floyd_warshall is not repeatable (topology={:?})",
            fixture.topology
        )));
    }
    for index in 0..graph.vertex_count() {
        let source = VertexId::new(index);
        let first = bellman_ford(graph, source);
        let second = bellman_ford(graph, source);
        if first != second {
            return Err(TestCaseError::fail(format!(
                "bellman_ford from {source} is not repeatable (topology={:?})",
                fixture.topology
            )));
        }
    }
    Ok(())
}

fn check_zero_diagonal(fixture: &GraphFixture) -> TestCaseResult {
    let Some(matrix) = floyd_warshall(&fixture.graph).into_distances() else {
        return Ok(());
    };
    for index in 0..matrix.vertex_count() {
        let vertex = VertexId::new(index);
        let diagonal = matrix.get(vertex, vertex);
        if diagonal != Some(Distance::ZERO) {
            return Err(TestCaseError::fail(format!(
                "diagonal at {vertex} is {diagonal:?} (topology={:?}, edges={:?})",
                fixture.topology, fixture.edges,
            )));
        }
    }
    Ok(())
}

fn check_reachability(fixture: &GraphFixture, index: usize) -> TestCaseResult {
    let source = VertexId::new(index);
    let outcome = bellman_ford(&fixture.graph, source)
        .map_err(|err| TestCaseError::fail(format!("bellman_ford failed: {err}")))?;
    let Some(distances) = outcome.distances() else {
        return Ok(());
    };

    let expected = reachable_from(fixture.graph.vertex_count(), &fixture.edges, index);
    for (vertex, distance) in distances.iter() {
        if distance.is_reachable() != expected[vertex.index()] {
            return Err(TestCaseError::fail(format!(
                "reachability of {vertex} from {source}: search={distance}, oracle={} \
                 (topology={:?}, edges={:?})",
                expected[vertex.index()],
                fixture.topology,
                fixture.edges,
            )));
        }
    }
    Ok(())
}
