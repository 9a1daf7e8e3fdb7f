//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write graph documents to temporary directories and
//! drive the command with scripted stdin. These helpers keep the cases short.

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;
use vecpath_test_support::csv::write_fixture;

use super::commands::run_command;
use super::{CliError, ExecutionSummary, OutputFormat, RunCommand};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn graph_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    write_fixture(dir.path(), name, contents)
}

pub(super) fn run_command_for(path: PathBuf, source: Option<usize>, format: OutputFormat) -> RunCommand {
    RunCommand {
        path,
        source,
        format,
        name: None,
    }
}

/// Runs `command` with `stdin` as scripted input and returns the result
/// together with everything written as a prompt.
pub(super) fn run_scripted(
    command: RunCommand,
    stdin: &str,
) -> (Result<ExecutionSummary, CliError>, String) {
    let mut prompt = Vec::new();
    let result = run_command(command, Cursor::new(stdin.as_bytes()), &mut prompt);
    let prompt = match String::from_utf8(prompt) {
        Ok(text) => text,
        Err(err) => panic!("prompt must be UTF-8: {err}"),
    };
    (result, prompt)
}

pub(super) fn run_command_expecting_error(command: RunCommand, stdin: &str, panic_msg: &str) -> CliError {
    match run_scripted(command, stdin).0 {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
