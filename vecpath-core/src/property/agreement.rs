//! Property: single-source and all-pairs searches agree.
//!
//! For every source, row `source` of the Floyd-Warshall matrix must equal
//! the Bellman-Ford distances from `source`. On graphs that may hold
//! negative cycles the two searches must at least agree on whether one
//! exists: Floyd-Warshall reports a cycle iff Bellman-Ford reports one from
//! some source.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Distance, DistanceMatrix, VertexId, bellman_ford, floyd_warshall};

use super::types::GraphFixture;

/// Runs the agreement property for the given fixture.
pub(super) fn run_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let all_pairs = floyd_warshall(graph);

    let mut any_source_cycle = false;
    for index in 0..graph.vertex_count() {
        let source = VertexId::new(index);
        let single = bellman_ford(graph, source)
            .map_err(|err| TestCaseError::fail(format!("bellman_ford failed: {err}")))?;

        match (single.distances(), all_pairs.distances()) {
            (Some(single), Some(matrix)) => compare_row(fixture, matrix, source, single.as_slice())?,
            (None, _) => any_source_cycle = true,
            (Some(_), None) => {}
        }
    }

    if fixture.topology.is_cycle_safe() && (any_source_cycle || all_pairs.is_negative_cycle()) {
        return Err(TestCaseError::fail(format!(
            "cycle reported on a cycle-free topology {:?} ({} edges)",
            fixture.topology,
            fixture.edges.len(),
        )));
    }

    if any_source_cycle != all_pairs.is_negative_cycle() {
        return Err(TestCaseError::fail(format!(
            "cycle verdicts disagree: bellman_ford={any_source_cycle}, \
             floyd_warshall={} (topology={:?}, edges={:?})",
            all_pairs.is_negative_cycle(),
            fixture.topology,
            fixture.edges,
        )));
    }
    Ok(())
}

fn compare_row(
    fixture: &GraphFixture,
    matrix: &DistanceMatrix,
    source: VertexId,
    single: &[Distance],
) -> TestCaseResult {
    let row = matrix
        .row(source)
        .ok_or_else(|| TestCaseError::fail(format!("matrix lacks row {source}")))?;
    if row != single {
        return Err(TestCaseError::fail(format!(
            "row {source} mismatch: floyd_warshall={row:?}, bellman_ford={single:?} \
             (topology={:?}, edges={:?})",
            fixture.topology, fixture.edges,
        )));
    }
    Ok(())
}
