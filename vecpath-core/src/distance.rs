//! Distance values and the tables produced by the shortest-path routines.

use std::{cmp::Ordering, fmt, ops::Add};

use crate::graph::VertexId;

/// Tentative or final path length.
///
/// `Unreachable` orders after every finite value, so relaxation can use a
/// plain `<` comparison. It is absorbing under addition.
///
/// # Examples
/// ```
/// use vecpath_core::Distance;
///
/// assert!(Distance::Finite(1e9) < Distance::Unreachable);
/// assert_eq!(Distance::Finite(2.0) + Distance::Finite(-3.0), Distance::Finite(-1.0));
/// assert_eq!(Distance::Finite(2.0) + Distance::Unreachable, Distance::Unreachable);
/// assert_eq!(Distance::Finite(2.0).to_string(), "2.00");
/// assert_eq!(Distance::Unreachable.to_string(), "INF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    /// A known path length.
    Finite(f64),
    /// No path has been found.
    Unreachable,
}

impl Distance {
    /// The distance from a vertex to itself before any relaxation.
    pub const ZERO: Self = Self::Finite(0.0);

    /// Returns whether a path is known.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the path length, or `None` when unreachable.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Unreachable => None,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(left), Self::Finite(right)) => left.partial_cmp(right),
            (Self::Finite(_), Self::Unreachable) => Some(Ordering::Less),
            (Self::Unreachable, Self::Finite(_)) => Some(Ordering::Greater),
            (Self::Unreachable, Self::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Finite(left), Self::Finite(right)) => Self::Finite(left + right),
            _ => Self::Unreachable,
        }
    }
}

impl From<Option<f64>> for Distance {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value:.2}"),
            Self::Unreachable => f.write_str("INF"),
        }
    }
}

/// Distances from one source vertex to every vertex of a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleSourceDistances {
    source: VertexId,
    distances: Vec<Distance>,
}

impl SingleSourceDistances {
    pub(crate) const fn new(source: VertexId, distances: Vec<Distance>) -> Self {
        Self { source, distances }
    }

    /// Returns the vertex the distances are measured from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the distance to `target`, or `None` when `target` is not a
    /// vertex of the graph.
    #[must_use]
    pub fn get(&self, target: VertexId) -> Option<Distance> {
        self.distances.get(target.index()).copied()
    }

    /// Returns the distances indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[Distance] { &self.distances }

    /// Returns the number of vertices covered.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.distances.len() }

    /// Returns whether no vertices are covered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.distances.is_empty() }

    /// Iterates over `(vertex, distance)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(index, distance)| (VertexId::new(index), *distance))
    }
}

/// Pairwise distances stored row-major; row `i` holds distances from `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    pub(crate) fn new(vertex_count: usize, cells: Vec<Distance>) -> Self {
        debug_assert_eq!(cells.len(), vertex_count.saturating_mul(vertex_count));
        Self {
            vertex_count,
            cells,
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the distance from `source` to `target`, or `None` when either
    /// is outside the matrix.
    #[must_use]
    pub fn get(&self, source: VertexId, target: VertexId) -> Option<Distance> {
        if source.index() >= self.vertex_count || target.index() >= self.vertex_count {
            return None;
        }
        self.cells
            .get(source.index() * self.vertex_count + target.index())
            .copied()
    }

    /// Returns the distances from `source` to every vertex.
    #[must_use]
    pub fn row(&self, source: VertexId) -> Option<&[Distance]> {
        self.cells
            .chunks_exact(self.vertex_count)
            .nth(source.index())
    }

    /// Iterates over rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> + '_ {
        self.cells.chunks_exact(self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Distance::Finite(-5.0), Distance::Finite(3.0), true)]
    #[case(Distance::Finite(3.0), Distance::Finite(3.0), false)]
    #[case(Distance::Finite(999.0), Distance::Unreachable, true)]
    #[case(Distance::Unreachable, Distance::Unreachable, false)]
    #[case(Distance::Unreachable, Distance::Finite(-1.0), false)]
    fn strict_ordering_drives_relaxation(
        #[case] candidate: Distance,
        #[case] current: Distance,
        #[case] improves: bool,
    ) {
        assert_eq!(candidate < current, improves);
    }

    #[rstest]
    #[case(Distance::Finite(0.0), "0.00")]
    #[case(Distance::Finite(-2.5), "-2.50")]
    #[case(Distance::Finite(1.0 / 3.0), "0.33")]
    #[case(Distance::Unreachable, "INF")]
    fn renders_two_decimals_or_inf(#[case] distance: Distance, #[case] expected: &str) {
        assert_eq!(distance.to_string(), expected);
    }

    #[test]
    fn option_round_trip_preserves_reachability() {
        assert_eq!(Distance::from(Some(4.0)).value(), Some(4.0));
        assert_eq!(Distance::from(None).value(), None);
        assert!(!Distance::Unreachable.is_reachable());
    }

    #[test]
    fn matrix_lookups_respect_bounds() {
        let matrix = DistanceMatrix::new(
            2,
            vec![
                Distance::ZERO,
                Distance::Finite(1.0),
                Distance::Unreachable,
                Distance::ZERO,
            ],
        );
        assert_eq!(
            matrix.get(VertexId::new(0), VertexId::new(1)),
            Some(Distance::Finite(1.0))
        );
        assert_eq!(matrix.get(VertexId::new(0), VertexId::new(2)), None);
        assert_eq!(
            matrix.row(VertexId::new(1)),
            Some(&[Distance::Unreachable, Distance::ZERO][..])
        );
        assert_eq!(matrix.rows().count(), 2);
    }
}
