//! Delimited-text provider that loads vector-weighted graphs.
//!
//! The format is a header line `N,D` followed by one `u,v,w1,...,wD` line
//! per directed edge. A cell whose first component is
//! [`vecpath_core::NO_EDGE_SENTINEL`] is treated as absent.

mod errors;
mod loader;
mod parse;

pub use errors::{CsvGraphError, CsvGraphErrorCode};
pub use loader::CsvGraphLoader;

#[cfg(test)]
mod tests;
