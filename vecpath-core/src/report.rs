//! Plain-text rendering of search outcomes.
//!
//! Distances print with two decimals and unreachable entries as `INF`. A
//! negative cycle replaces the whole section with a single sentence. The
//! single-source section and the all-pairs section are separated by a blank
//! line.

use std::fmt::{self, Write};

use crate::{
    distance::{DistanceMatrix, SingleSourceDistances},
    outcome::Outcome,
};

/// Writes the single-source section for `outcome`.
///
/// # Errors
/// Propagates failures from `out`.
///
/// # Examples
/// ```
/// use vecpath_core::{GraphBuilder, VertexId, bellman_ford, report};
///
/// let graph = GraphBuilder::new(2, 1).with_edge(0, 1, [3]).build()?;
/// let outcome = bellman_ford(&graph, VertexId::new(1))?;
/// let mut text = String::new();
/// report::write_single_source(&mut text, &outcome).expect("string writes succeed");
/// assert_eq!(
///     text,
///     "Single Source Shortest Path from Vertex 1:\n\
///      Vertex 0: Distance = INF\n\
///      Vertex 1: Distance = 0.00\n",
/// );
/// # Ok::<(), vecpath_core::GraphError>(())
/// ```
pub fn write_single_source<W: Write>(
    out: &mut W,
    outcome: &Outcome<SingleSourceDistances>,
) -> fmt::Result {
    let distances = match outcome {
        Outcome::Distances(distances) => distances,
        Outcome::NegativeCycle(cycle) => return writeln!(out, "{cycle}"),
    };
    writeln!(
        out,
        "Single Source Shortest Path from Vertex {}:",
        distances.source()
    )?;
    for (vertex, distance) in distances.iter() {
        writeln!(out, "Vertex {vertex}: Distance = {distance}")?;
    }
    Ok(())
}

/// Writes the all-pairs section for `outcome`, one row per source vertex
/// with entries separated by single spaces.
///
/// # Errors
/// Propagates failures from `out`.
pub fn write_all_pairs<W: Write>(out: &mut W, outcome: &Outcome<DistanceMatrix>) -> fmt::Result {
    let matrix = match outcome {
        Outcome::Distances(matrix) => matrix,
        Outcome::NegativeCycle(cycle) => return writeln!(out, "{cycle}"),
    };
    writeln!(out, "All Pairs Shortest Path:")?;
    for row in matrix.rows() {
        let mut cells = row.iter();
        if let Some(first) = cells.next() {
            write!(out, "{first}")?;
        }
        for cell in cells {
            write!(out, " {cell}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Both sections of a run, rendered through [`fmt::Display`].
///
/// # Examples
/// ```
/// use vecpath_core::{GraphBuilder, VertexId, bellman_ford, floyd_warshall, report::TextReport};
///
/// let graph = GraphBuilder::new(1, 1).build()?;
/// let single = bellman_ford(&graph, VertexId::new(0))?;
/// let all = floyd_warshall(&graph);
/// assert_eq!(
///     TextReport::new(&single, &all).to_string(),
///     "Single Source Shortest Path from Vertex 0:\n\
///      Vertex 0: Distance = 0.00\n\
///      \n\
///      All Pairs Shortest Path:\n\
///      0.00\n",
/// );
/// # Ok::<(), vecpath_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TextReport<'a> {
    single_source: &'a Outcome<SingleSourceDistances>,
    all_pairs: &'a Outcome<DistanceMatrix>,
}

impl<'a> TextReport<'a> {
    /// Pairs a single-source outcome with an all-pairs outcome.
    #[must_use]
    pub const fn new(
        single_source: &'a Outcome<SingleSourceDistances>,
        all_pairs: &'a Outcome<DistanceMatrix>,
    ) -> Self {
        Self {
            single_source,
            all_pairs,
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_single_source(f, self.single_source)?;
        writeln!(f)?;
        write_all_pairs(f, self.all_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphBuilder, VertexId, bellman_ford, floyd_warshall, outcome::NegativeCycle};
    use rstest::rstest;

    fn render<T>(outcome: &Outcome<T>, write: fn(&mut String, &Outcome<T>) -> fmt::Result) -> String {
        let mut text = String::new();
        write(&mut text, outcome).expect("string writes succeed");
        text
    }

    #[test]
    fn all_pairs_rows_are_space_separated() {
        let graph = GraphBuilder::new(3, 1)
            .with_edge(0, 1, [4])
            .with_edge(1, 2, [-2])
            .build()
            .expect("valid graph");
        let text = render(&floyd_warshall(&graph), write_all_pairs);
        assert_eq!(
            text,
            "All Pairs Shortest Path:\n0.00 4.00 2.00\nINF 0.00 -2.00\nINF INF 0.00\n"
        );
    }

    #[rstest]
    #[case::reachable(
        Outcome::NegativeCycle(NegativeCycle::ReachableFrom(VertexId::new(2))),
        "Graph contains a negative-weight cycle reachable from vertex 2.\n"
    )]
    #[case::anywhere(
        Outcome::NegativeCycle(NegativeCycle::Anywhere),
        "Graph contains a negative-weight cycle.\n"
    )]
    fn negative_cycles_replace_the_single_source_section(
        #[case] outcome: Outcome<SingleSourceDistances>,
        #[case] expected: &str,
    ) {
        assert_eq!(render(&outcome, write_single_source), expected);
    }

    #[test]
    fn report_renders_each_section_from_its_own_outcome() {
        let graph = GraphBuilder::new(3, 1)
            .with_edge(0, 1, [1])
            .with_edge(1, 2, [3])
            .with_edge(2, 1, [-5])
            .build()
            .expect("valid graph");
        let single = bellman_ford(&graph, VertexId::new(2)).expect("source in range");
        let all = floyd_warshall(&graph);
        assert_eq!(
            TextReport::new(&single, &all).to_string(),
            "Graph contains a negative-weight cycle reachable from vertex 2.\n\
             \n\
             Graph contains a negative-weight cycle.\n"
        );

        let graph = GraphBuilder::new(3, 1)
            .with_edge(0, 1, [1])
            .with_edge(2, 2, [-5])
            .build()
            .expect("valid graph");
        let single = bellman_ford(&graph, VertexId::new(0)).expect("source in range");
        let all = floyd_warshall(&graph);
        assert_eq!(
            TextReport::new(&single, &all).to_string(),
            "Single Source Shortest Path from Vertex 0:\n\
             Vertex 0: Distance = 0.00\n\
             Vertex 1: Distance = 1.00\n\
             Vertex 2: Distance = INF\n\
             \n\
             All Pairs Shortest Path:\n\
             0.00 1.00 INF\n\
             INF 0.00 INF\n\
             INF INF 0.00\n"
        );
    }
}
