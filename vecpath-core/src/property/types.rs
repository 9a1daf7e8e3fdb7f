//! Type definitions for shortest-path property tests.

use test_strategy::Arbitrary;

use crate::Graph;

/// Shape and weight regime of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// Arbitrary directed edges, self-edges included, non-negative weights.
    #[weight(3)]
    NonNegative,
    /// Edges only from lower to higher vertex ids, so no cycles exist and
    /// negative weights are safe.
    #[weight(3)]
    ForwardOnly,
    /// Two halves with no edges between them, non-negative weights.
    #[weight(2)]
    Disconnected,
    /// Arbitrary directed edges without self-edges and with mixed-sign
    /// weights; negative cycles may occur.
    #[weight(2)]
    Mixed,
}

impl Topology {
    /// Inclusive range for every weight component.
    pub(super) const fn component_range(self) -> (i32, i32) {
        match self {
            Self::NonNegative | Self::Disconnected => (0, 9),
            Self::ForwardOnly | Self::Mixed => (-9, 9),
        }
    }

    /// Returns whether an edge `source -> target` may exist in this topology.
    pub(super) const fn admits(self, vertex_count: usize, source: usize, target: usize) -> bool {
        match self {
            Self::NonNegative => true,
            Self::ForwardOnly => source < target,
            Self::Disconnected => {
                let half = vertex_count.div_ceil(2);
                (source < half) == (target < half)
            }
            Self::Mixed => source != target,
        }
    }

    /// Returns whether generated graphs are guaranteed free of negative
    /// cycles.
    pub(super) const fn is_cycle_safe(self) -> bool {
        !matches!(self, Self::Mixed)
    }
}

/// Generated graph together with the declarations it was built from.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Topology used during generation.
    pub topology: Topology,
    /// Declared edges as `(source, target, weights)`.
    pub edges: Vec<(usize, usize, Vec<i32>)>,
    /// The constructed graph.
    pub graph: Graph,
}
