//! Reduction of edge weight vectors to scalar costs.
//!
//! The shortest-path routines never look at weight vectors directly; they ask
//! a [`WeightReducer`] for one cost per edge. [`Magnitude`] is the default and
//! sums the components. It is a linear reduction rather than a norm, so
//! costs may be negative and no metric properties are implied.

/// Maps an edge's weight vector to the scalar cost used for relaxation.
///
/// Implementations must be pure: the algorithms may reduce the same edge more
/// than once and rely on receiving the same value.
///
/// Closures of the form `Fn(&[i32]) -> f64` implement the trait.
///
/// # Examples
/// ```
/// use vecpath_core::WeightReducer;
///
/// let first_only = |weights: &[i32]| weights.first().copied().map_or(0.0, f64::from);
/// assert_eq!(first_only.reduce(&[4, 100]), 4.0);
/// ```
pub trait WeightReducer {
    /// Returns the scalar cost for `weights`.
    fn reduce(&self, weights: &[i32]) -> f64;
}

/// Sums the components of a weight vector.
///
/// # Examples
/// ```
/// use vecpath_core::{Magnitude, WeightReducer};
///
/// assert_eq!(Magnitude.reduce(&[2, 3]), 5.0);
/// assert_eq!(Magnitude.reduce(&[4, -6]), -2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Magnitude;

impl WeightReducer for Magnitude {
    fn reduce(&self, weights: &[i32]) -> f64 {
        magnitude(weights)
    }
}

impl<F> WeightReducer for F
where
    F: Fn(&[i32]) -> f64,
{
    fn reduce(&self, weights: &[i32]) -> f64 {
        self(weights)
    }
}

/// Returns the sum of `weights` as an `f64`, accumulated left to right.
///
/// # Examples
/// ```
/// use vecpath_core::magnitude;
///
/// assert_eq!(magnitude(&[1, 2, 3]), 6.0);
/// assert_eq!(magnitude(&[]), 0.0);
/// ```
#[must_use]
pub fn magnitude(weights: &[i32]) -> f64 {
    weights.iter().map(|&component| f64::from(component)).sum()
}
