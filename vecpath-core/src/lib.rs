//! Vecpath core library.
//!
//! Shortest paths over dense directed graphs whose edges carry integer weight
//! vectors. Each vector is reduced to a scalar cost (by default the sum of
//! its components) and fed to either [`bellman_ford`] (single source) or
//! [`floyd_warshall`] (all pairs). Both report negative cycles through
//! [`Outcome`] instead of returning partial distances.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the algorithms emit
//! `vecpath_relaxations` and `vecpath_negative_cycles` counters labelled by
//! `algorithm`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bellman_ford;
mod distance;
mod error;
mod floyd_warshall;
mod graph;
mod outcome;
mod reducer;
pub mod report;
mod telemetry;

#[cfg(test)]
mod property;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    bellman_ford::{bellman_ford, bellman_ford_with},
    distance::{Distance, DistanceMatrix, SingleSourceDistances},
    error::{GraphError, GraphErrorCode, Result},
    floyd_warshall::{floyd_warshall, floyd_warshall_with},
    graph::{EdgeRef, Graph, GraphBuilder, MAX_TABLE_VALUES, NO_EDGE_SENTINEL, VertexId},
    outcome::{NegativeCycle, Outcome},
    reducer::{Magnitude, WeightReducer, magnitude},
};
