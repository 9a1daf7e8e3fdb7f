use vecpath_core::{Distance, Graph, GraphBuilder, SingleSourceDistances};

/// Builds a graph whose edges all carry one-component weights.
#[must_use]
pub fn scalar_graph(vertex_count: usize, edges: &[(usize, usize, i32)]) -> Graph {
    edges
        .iter()
        .fold(GraphBuilder::new(vertex_count, 1), |builder, &(u, v, w)| {
            builder.with_edge(u, v, [w])
        })
        .build()
        .expect("test graph must be valid")
}

/// Collects distances as `Option<f64>` for compact assertions.
#[allow(dead_code, reason = "not every integration test binary compares values")]
#[must_use]
pub fn values(distances: &SingleSourceDistances) -> Vec<Option<f64>> {
    distances.as_slice().iter().copied().map(Distance::value).collect()
}
