//! Graph loader for the delimited text format.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info, instrument, warn};
use vecpath_core::{Graph, GraphError, NO_EDGE_SENTINEL};

use crate::{
    errors::CsvGraphError,
    parse::{EdgeLine, Header, parse_edge, parse_header},
};

/// A named graph loaded from `N,D` / `u,v,w1,...,wD` text.
#[derive(Clone, Debug)]
pub struct CsvGraphLoader {
    name: String,
    graph: Graph,
}

impl CsvGraphLoader {
    /// Loads a graph from buffered text.
    ///
    /// Every cell starts absent. Each non-blank line after the header
    /// declares one edge; a later line for the same pair replaces the
    /// earlier one. Missing trailing components are filled with
    /// [`NO_EDGE_SENTINEL`], so a line with no weights declares nothing.
    ///
    /// # Errors
    /// Returns [`CsvGraphError`] for a missing or malformed header, malformed
    /// or out-of-range vertices, malformed weights, surplus components, read
    /// failures, and tables the graph model rejects.
    ///
    /// # Examples
    /// ```
    /// use vecpath_core::VertexId;
    /// use vecpath_providers_csv::CsvGraphLoader;
    ///
    /// let loader = CsvGraphLoader::try_from_reader("demo", "2,2\n0,1,3,4\n".as_bytes())?;
    /// assert_eq!(loader.name(), "demo");
    /// assert_eq!(
    ///     loader.graph().edge(VertexId::new(0), VertexId::new(1)),
    ///     Some(&[3, 4][..]),
    /// );
    /// # Ok::<(), vecpath_providers_csv::CsvGraphError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, CsvGraphError> {
        let name = name.into();
        let graph = load_graph(&name, reader)?;
        Ok(Self { name, graph })
    }

    /// Loads a graph from the file at `path`.
    ///
    /// # Errors
    /// Returns [`CsvGraphError::Io`] when the file cannot be opened or read,
    /// plus every error of [`CsvGraphLoader::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, CsvGraphError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns the human-readable name of the loaded data.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the loaded graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the loader and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[instrument(name = "providers.csv.load", err, skip(reader, name), fields(data_source = %name))]
fn load_graph<R: BufRead>(name: &str, reader: R) -> Result<Graph, CsvGraphError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, text)| text.map(|text| (index + 1, text)));

    let header = loop {
        match lines.next().transpose()? {
            None => return Err(CsvGraphError::MissingHeader),
            Some((_, text)) if text.trim().is_empty() => {}
            Some((line, text)) => break parse_header(line, &text)?,
        }
    };
    debug!(
        vertices = header.vertex_count,
        dimension = header.dimension,
        "header parsed"
    );

    let mut table = SentinelTable::new(header)?;
    let mut declared = 0_usize;
    for entry in lines {
        let (line, text) = entry?;
        if text.trim().is_empty() {
            continue;
        }
        let edge = parse_edge(line, &text, header)?;
        if edge.weights.len() < header.dimension {
            warn!(
                line,
                found = edge.weights.len(),
                dimension = header.dimension,
                "missing weight components filled with the no-edge sentinel"
            );
        }
        table.write(&edge);
        declared += 1;
    }

    let graph = table.into_graph()?;
    info!(
        declared,
        edges = graph.edge_count(),
        vertices = graph.vertex_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Flat `N * N * D` buffer initialised to the sentinel in every component.
struct SentinelTable {
    header: Header,
    components: Vec<i32>,
}

impl SentinelTable {
    fn new(header: Header) -> Result<Self, GraphError> {
        let components = Graph::sentinel_buffer(header.vertex_count, header.dimension)?;
        Ok(Self { header, components })
    }

    fn write(&mut self, edge: &EdgeLine) {
        let Header {
            vertex_count,
            dimension,
        } = self.header;
        let start = (edge.source * vertex_count + edge.target) * dimension;
        let cell = &mut self.components[start..start + dimension];
        let (given, missing) = cell.split_at_mut(edge.weights.len());
        given.copy_from_slice(&edge.weights);
        missing.fill(NO_EDGE_SENTINEL);
    }

    fn into_graph(self) -> Result<Graph, GraphError> {
        Graph::from_sentinel_buffer(
            self.header.vertex_count,
            self.header.dimension,
            self.components,
        )
    }
}
