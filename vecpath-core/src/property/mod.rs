//! Property-based tests for the shortest-path searches.
//!
//! Checks Bellman-Ford against Floyd-Warshall on every source, validates
//! structural invariants (zero diagonal, reachability against a BFS oracle)
//! and confirms both searches are repeatable across generated topologies.

mod agreement;
mod oracle;
mod strategies;
mod structural;
mod types;
