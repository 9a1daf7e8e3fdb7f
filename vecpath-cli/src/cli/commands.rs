//! Command implementations and argument parsing for the vecpath CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use vecpath_core::{
    DistanceMatrix, GraphError, Outcome, SingleSourceDistances, VertexId, bellman_ford,
    floyd_warshall,
};
use vecpath_providers_csv::{CsvGraphError, CsvGraphLoader};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "vecpath",
    about = "Compute shortest paths over graphs with vector-weighted edges."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run Bellman-Ford from one source and Floyd-Warshall over all pairs.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a graph document (`N,D` header, then `u,v,w1,...,wD` lines).
    pub path: PathBuf,

    /// Source vertex for Bellman-Ford; prompted for on stdin when omitted.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub source: Option<usize>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Output formats supported by the `run` command.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable distance listings.
    #[default]
    Text,
    /// One JSON object per run.
    Json,
}

impl OutputFormat {
    /// Returns `true` when stdout must carry nothing but the report.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the graph document.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading the interactive source vertex failed.
    #[error("failed to read the source vertex: {source}")]
    Prompt {
        /// Underlying terminal error.
        #[source]
        source: io::Error,
    },
    /// The requested source vertex was not an index of the graph.
    #[error("invalid source vertex `{input}`; expected an integer from 0 to {max_vertex}")]
    InvalidSource {
        /// Raw input as supplied.
        input: String,
        /// Largest valid vertex index.
        max_vertex: usize,
    },
    /// Loading the graph document failed.
    #[error(transparent)]
    Csv(#[from] CsvGraphError),
    /// The shortest-path search rejected its arguments.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Weight vector dimension of the graph.
    pub dimension: usize,
    /// Bellman-Ford outcome from the chosen source.
    pub single_source: Outcome<SingleSourceDistances>,
    /// Floyd-Warshall outcome over all pairs.
    pub all_pairs: Outcome<DistanceMatrix>,
    /// Format requested for rendering.
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`, prompting on the process's
/// stdin when no source vertex was given.
///
/// The prompt goes to stdout for text reports and to stderr for JSON reports.
///
/// # Errors
/// Returns [`CliError`] when loading, prompting or searching fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use vecpath_cli::cli::{Cli, Command, OutputFormat, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3,1\n0,1,4\n1,2,-2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         source: Some(0),
///         format: OutputFormat::Text,
///         name: Some("chain".into()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.vertices, 3);
/// assert!(!summary.all_pairs.is_negative_cycle());
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let stdin = io::stdin();
    run_cli_with(cli, stdin.lock(), io::stdout().lock(), io::stderr().lock())
}

/// Executes `cli`, reading an interactive source vertex from `input`.
///
/// The prompt is written to `stdout` unless the requested format is
/// machine-readable, in which case it is written to `stderr` so that the
/// report rendered afterwards is the only thing on `stdout`.
///
/// # Errors
/// Returns [`CliError`] when loading, prompting or searching fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, stdout, stderr),
    fields(command = field::Empty),
)]
pub fn run_cli_with<R, O, E>(
    cli: Cli,
    input: R,
    stdout: O,
    stderr: E,
) -> Result<ExecutionSummary, CliError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            if run.format.is_machine_readable() {
                run_command(run, input, stderr)
            } else {
                run_command(run, input, stdout)
            }
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, input, prompt),
    fields(path = field::Empty, source = field::Empty, format = field::Empty),
)]
pub(super) fn run_command<R, W>(
    command: RunCommand,
    input: R,
    prompt: W,
) -> Result<ExecutionSummary, CliError>
where
    R: BufRead,
    W: Write,
{
    let RunCommand {
        path,
        source,
        format,
        name,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("format", field::debug(format));

    let data_source = derive_data_source_name(&path, name.as_deref());
    let loader = CsvGraphLoader::try_from_reader(data_source, open_graph_reader(&path)?)?;
    let graph = loader.graph();

    let source = match source {
        Some(requested) => validate_source(&requested.to_string(), graph.vertex_count())?,
        None => prompt_for_source(input, prompt, graph.vertex_count())?,
    };
    span.record("source", field::display(source));

    let single_source = bellman_ford(graph, source)?;
    let all_pairs = floyd_warshall(graph);
    info!(
        data_source = loader.name(),
        single_source_cycle = single_source.is_negative_cycle(),
        all_pairs_cycle = all_pairs.is_negative_cycle(),
        "command completed"
    );

    Ok(ExecutionSummary {
        data_source: loader.name().to_owned(),
        vertices: graph.vertex_count(),
        dimension: graph.dimension(),
        single_source,
        all_pairs,
        format,
    })
}

#[instrument(name = "cli.open_graph_reader", err, fields(path = field::Empty))]
pub(super) fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes the prompt, reads one line and validates it as a vertex index.
pub(super) fn prompt_for_source<R, W>(
    mut input: R,
    mut prompt: W,
    vertex_count: usize,
) -> Result<VertexId, CliError>
where
    R: BufRead,
    W: Write,
{
    let max_vertex = vertex_count.saturating_sub(1);
    write!(
        prompt,
        "Enter the source vertex for Bellman-Ford algorithm (0 to {max_vertex}): "
    )
    .and_then(|()| prompt.flush())
    .map_err(|source| CliError::Prompt { source })?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|source| CliError::Prompt { source })?;
    validate_source(&line, vertex_count)
}

pub(super) fn validate_source(raw: &str, vertex_count: usize) -> Result<VertexId, CliError> {
    let input = raw.trim();
    match input.parse::<usize>() {
        Ok(vertex) if vertex < vertex_count => Ok(VertexId::new(vertex)),
        _ => Err(CliError::InvalidSource {
            input: input.to_owned(),
            max_vertex: vertex_count.saturating_sub(1),
        }),
    }
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}
