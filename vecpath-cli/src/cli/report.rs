//! Rendering of [`ExecutionSummary`] values to stdout.

use std::io::{self, Write};

use serde::Serialize;
use vecpath_core::{Distance, DistanceMatrix, Outcome, SingleSourceDistances, report::TextReport};

use super::commands::{ExecutionSummary, OutputFormat};

/// Renders `summary` to `writer` in the format it was requested with.
///
/// # Errors
/// Returns [`io::Error`] if writing or serialising fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use vecpath_cli::cli::{Cli, Command, OutputFormat, RunCommand, render_summary, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2,1\n0,1,7\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         source: Some(1),
///         format: OutputFormat::Text,
///         name: None,
///     }),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&run_cli(cli)?, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Single Source Shortest Path from Vertex 1:\n\
///      Vertex 0: Distance = INF\n\
///      Vertex 1: Distance = 0.00\n\
///      \n\
///      All Pairs Shortest Path:\n\
///      0.00 7.00\n\
///      INF 0.00\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => write!(
            writer,
            "{}",
            TextReport::new(&summary.single_source, &summary.all_pairs)
        ),
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &JsonReport::from(summary))?;
            writeln!(writer)
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct JsonReport<'a> {
    pub(super) data_source: &'a str,
    pub(super) vertices: usize,
    pub(super) dimension: usize,
    pub(super) single_source: JsonSingleSource,
    pub(super) all_pairs: JsonAllPairs,
}

#[derive(Debug, Serialize)]
pub(super) struct JsonSingleSource {
    pub(super) source: Option<usize>,
    pub(super) negative_cycle: bool,
    pub(super) distances: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Serialize)]
pub(super) struct JsonAllPairs {
    pub(super) negative_cycle: bool,
    pub(super) distances: Option<Vec<Vec<Option<f64>>>>,
}

impl<'a> From<&'a ExecutionSummary> for JsonReport<'a> {
    fn from(summary: &'a ExecutionSummary) -> Self {
        Self {
            data_source: &summary.data_source,
            vertices: summary.vertices,
            dimension: summary.dimension,
            single_source: JsonSingleSource::from(&summary.single_source),
            all_pairs: JsonAllPairs::from(&summary.all_pairs),
        }
    }
}

impl From<&Outcome<SingleSourceDistances>> for JsonSingleSource {
    fn from(outcome: &Outcome<SingleSourceDistances>) -> Self {
        match outcome {
            Outcome::Distances(distances) => Self {
                source: Some(distances.source().index()),
                negative_cycle: false,
                distances: Some(values(distances.as_slice())),
            },
            Outcome::NegativeCycle(cycle) => Self {
                source: cycle.source().map(|source| source.index()),
                negative_cycle: true,
                distances: None,
            },
        }
    }
}

impl From<&Outcome<DistanceMatrix>> for JsonAllPairs {
    fn from(outcome: &Outcome<DistanceMatrix>) -> Self {
        Self {
            negative_cycle: outcome.is_negative_cycle(),
            distances: outcome
                .distances()
                .map(|matrix| matrix.rows().map(values).collect()),
        }
    }
}

fn values(row: &[Distance]) -> Vec<Option<f64>> {
    row.iter().copied().map(Distance::value).collect()
}
