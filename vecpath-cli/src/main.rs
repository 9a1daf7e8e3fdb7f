//! CLI entry point for vecpath.
//!
//! Parses command-line arguments with clap, runs both shortest-path searches,
//! renders the report to stdout and maps errors to exit codes. Logging is
//! initialised first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{error, field};
use vecpath_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};

/// Parse CLI arguments, execute the command, render the report, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Csv(csv) => Some(csv.code().as_str()),
                CliError::Graph(graph) => Some(graph.code().as_str()),
                _ => None,
            });

        error!(
            error = %format!("{err:#}"),
            code = code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
