//! Strategy builders for shortest-path property tests.
//!
//! Graphs are generated as a dense presence mask plus one weight vector per
//! cell; the topology then filters which cells become edges. Sizes stay small
//! because Floyd-Warshall is cubic and every property runs it at least once.

use proptest::{collection::vec, prelude::*};
use rand::{Rng, rngs::SmallRng};

use crate::GraphBuilder;

use super::types::{GraphFixture, Topology};

/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 9;
/// Maximum weight dimension for generated graphs.
const MAX_DIMENSION: usize = 3;
/// Probability that an admissible cell becomes an edge.
const EDGE_PROBABILITY: f64 = 0.35;

/// Generates fixtures across every [`Topology`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    any::<Topology>().prop_flat_map(fixture_strategy)
}

/// Generates fixtures for one topology.
pub(super) fn fixture_strategy(topology: Topology) -> impl Strategy<Value = GraphFixture> {
    let (low, high) = topology.component_range();
    (1..=MAX_VERTICES, 1..=MAX_DIMENSION)
        .prop_flat_map(move |(vertex_count, dimension)| {
            let cells = vertex_count * vertex_count;
            (
                Just(vertex_count),
                Just(dimension),
                vec(prop::bool::weighted(EDGE_PROBABILITY), cells),
                vec(vec(low..=high, dimension), cells),
            )
        })
        .prop_map(move |(vertex_count, dimension, mask, weights)| {
            build_fixture(topology, vertex_count, dimension, &mask, weights)
        })
}

/// Generates a fixture deterministically from `rng` for seeded rstest cases.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let (low, high) = topology.component_range();
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let dimension = rng.gen_range(1..=MAX_DIMENSION);
    let cells = vertex_count * vertex_count;
    let mask: Vec<bool> = (0..cells)
        .map(|_| rng.gen_bool(EDGE_PROBABILITY))
        .collect();
    let weights = (0..cells)
        .map(|_| (0..dimension).map(|_| rng.gen_range(low..=high)).collect())
        .collect();
    build_fixture(topology, vertex_count, dimension, &mask, weights)
}

/// Assembles a fixture from a presence mask and per-cell weight vectors.
pub(super) fn build_fixture(
    topology: Topology,
    vertex_count: usize,
    dimension: usize,
    mask: &[bool],
    weights: Vec<Vec<i32>>,
) -> GraphFixture {
    let edges: Vec<(usize, usize, Vec<i32>)> = mask
        .iter()
        .zip(weights)
        .enumerate()
        .filter_map(|(cell, (&present, weights))| {
            let source = cell / vertex_count;
            let target = cell % vertex_count;
            (present && topology.admits(vertex_count, source, target))
                .then_some((source, target, weights))
        })
        .collect();

    let graph = edges
        .iter()
        .fold(
            GraphBuilder::new(vertex_count, dimension),
            |builder, (source, target, weights)| {
                builder.with_edge(*source, *target, weights.clone())
            },
        )
        .build()
        .expect("generated edges must form a valid graph");

    GraphFixture {
        topology,
        edges,
        graph,
    }
}
