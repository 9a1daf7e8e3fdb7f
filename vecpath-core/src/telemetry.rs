//! Optional counters emitted when the `metrics` feature is enabled.
//!
//! - `vecpath_relaxations` (counter): successful relaxations, labelled by
//!   `algorithm`.
//! - `vecpath_negative_cycles` (counter): detected negative cycles, labelled
//!   by `algorithm`.
//!
//! Without the feature every function is a no-op.

#[cfg(feature = "metrics")]
pub(crate) fn record_relaxations(algorithm: &'static str, count: u64) {
    metrics::counter!("vecpath_relaxations", "algorithm" => algorithm).increment(count);
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record_relaxations(_algorithm: &'static str, _count: u64) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_negative_cycle(algorithm: &'static str) {
    metrics::counter!("vecpath_negative_cycles", "algorithm" => algorithm).increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record_negative_cycle(_algorithm: &'static str) {}
