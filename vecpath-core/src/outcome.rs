//! Terminal outcomes of the shortest-path routines.
//!
//! A negative cycle is an ordinary result, not an error: the routine either
//! yields a complete distance table or reports the cycle and nothing else.

use std::fmt;

use crate::graph::VertexId;

/// A negative-weight cycle detected while computing shortest paths.
///
/// # Examples
/// ```
/// use vecpath_core::{NegativeCycle, VertexId};
///
/// assert_eq!(
///     NegativeCycle::ReachableFrom(VertexId::new(2)).to_string(),
///     "Graph contains a negative-weight cycle reachable from vertex 2.",
/// );
/// assert_eq!(
///     NegativeCycle::Anywhere.to_string(),
///     "Graph contains a negative-weight cycle.",
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NegativeCycle {
    /// A cycle reachable from the given source (single-source search).
    ReachableFrom(VertexId),
    /// A cycle somewhere in the graph (all-pairs search).
    Anywhere,
}

impl NegativeCycle {
    /// Returns the source the cycle is reachable from, if the search was
    /// source-qualified.
    #[must_use]
    pub const fn source(self) -> Option<VertexId> {
        match self {
            Self::ReachableFrom(source) => Some(source),
            Self::Anywhere => None,
        }
    }
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachableFrom(source) => write!(
                f,
                "Graph contains a negative-weight cycle reachable from vertex {source}."
            ),
            Self::Anywhere => f.write_str("Graph contains a negative-weight cycle."),
        }
    }
}

/// Result of one shortest-path invocation: either the complete table `T` or
/// a negative cycle.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    /// No negative cycle interfered; the table is final.
    Distances(T),
    /// A negative cycle was detected; no distances are reported.
    NegativeCycle(NegativeCycle),
}

impl<T> Outcome<T> {
    /// Returns the distance table when no negative cycle was found.
    #[must_use]
    pub const fn distances(&self) -> Option<&T> {
        match self {
            Self::Distances(table) => Some(table),
            Self::NegativeCycle(_) => None,
        }
    }

    /// Consumes the outcome, returning the distance table if present.
    #[must_use]
    pub fn into_distances(self) -> Option<T> {
        match self {
            Self::Distances(table) => Some(table),
            Self::NegativeCycle(_) => None,
        }
    }

    /// Returns the detected cycle, if any.
    #[must_use]
    pub const fn negative_cycle(&self) -> Option<NegativeCycle> {
        match self {
            Self::Distances(_) => None,
            Self::NegativeCycle(cycle) => Some(*cycle),
        }
    }

    /// Returns whether a negative cycle was detected.
    #[must_use]
    pub const fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle(_))
    }
}
