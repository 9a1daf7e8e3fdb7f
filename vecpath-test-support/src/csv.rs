//! Graph documents in the delimited text format shared by loader and CLI
//! tests.
//!
//! Each constant is a complete document: an `N,D` header followed by one
//! `u,v,w1,...,wD` line per edge.

/// Three-vertex scalar chain `0 -> 1 -> 2` with costs 4 and -2.
pub const CHAIN: &str = "3,1\n0,1,4\n1,2,-2\n";

/// Two-vertex scalar graph whose only cycle costs -2.
pub const TWO_CYCLE: &str = "2,1\n0,1,1\n1,0,-3\n";

/// A single vertex without edges.
pub const SINGLETON: &str = "1,1\n";

/// Three-vertex graph with one two-component edge reducing to 5.
pub const VECTOR_EDGE: &str = "3,2\n0,1,2,3\n";

/// Four vertices and no edges.
pub const DISCONNECTED: &str = "4,1\n";

/// Writes `contents` to a fresh file named `name` inside `dir` and returns
/// its path.
///
/// # Panics
/// Panics when the file cannot be written.
#[must_use]
pub fn write_fixture(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture must be writable");
    path
}
