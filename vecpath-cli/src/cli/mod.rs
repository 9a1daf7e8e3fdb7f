//! Command-line interface orchestration for vecpath.
//!
//! The CLI offers a single `run` command that loads a graph document, runs
//! Bellman-Ford from one source vertex and Floyd-Warshall over every pair,
//! then renders both outcomes as text or JSON.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputFormat, RunCommand, run_cli, run_cli_with,
};
pub use report::render_summary;

#[cfg(test)]
mod test_helpers;
