//! Reachability oracle for shortest-path property verification.
//!
//! A plain breadth-first search over the declared edges. Distances are not
//! checked here; the oracle only decides which vertices any path reaches.

use std::collections::VecDeque;

/// Returns, for each vertex, whether it is reachable from `source` along the
/// declared edges. `source` always reaches itself.
pub(super) fn reachable_from(
    vertex_count: usize,
    edges: &[(usize, usize, Vec<i32>)],
    source: usize,
) -> Vec<bool> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for (from, to, _) in edges {
        adjacency[*from].push(*to);
    }

    let mut seen = vec![false; vertex_count];
    let mut queue = VecDeque::from([source]);
    seen[source] = true;
    while let Some(vertex) = queue.pop_front() {
        for &next in &adjacency[vertex] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}
