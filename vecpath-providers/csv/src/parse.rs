//! Line-level parsing for the delimited graph format.
use crate::errors::CsvGraphError;

/// Table shape declared by the header line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Header {
    pub(crate) vertex_count: usize,
    pub(crate) dimension: usize,
}

/// One `u,v,w1,...` line with its weights not yet padded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EdgeLine {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weights: Vec<i32>,
}

pub(crate) fn parse_header(line: usize, text: &str) -> Result<Header, CsvGraphError> {
    let invalid = || CsvGraphError::InvalidHeader {
        line,
        found: text.trim().to_owned(),
    };
    let mut fields = text.split(',').map(str::trim);
    let (Some(vertices), Some(dimension), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid());
    };
    let vertex_count = vertices.parse::<usize>().map_err(|_| invalid())?;
    let dimension = dimension.parse::<usize>().map_err(|_| invalid())?;
    if vertex_count == 0 || dimension == 0 {
        return Err(invalid());
    }
    Ok(Header {
        vertex_count,
        dimension,
    })
}

pub(crate) fn parse_edge(line: usize, text: &str, header: Header) -> Result<EdgeLine, CsvGraphError> {
    let mut fields = text.split(',').map(str::trim);
    let source = parse_vertex(line, fields.next(), header.vertex_count)?;
    let target = parse_vertex(line, fields.next(), header.vertex_count)?;
    let weights = fields
        .enumerate()
        .map(|(position, field)| {
            field
                .parse::<i32>()
                .map_err(|_| CsvGraphError::InvalidWeight {
                    line,
                    position,
                    found: field.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if weights.len() > header.dimension {
        return Err(CsvGraphError::TooManyComponents {
            line,
            dimension: header.dimension,
            actual: weights.len(),
        });
    }
    Ok(EdgeLine {
        source,
        target,
        weights,
    })
}

fn parse_vertex(line: usize, field: Option<&str>, vertex_count: usize) -> Result<usize, CsvGraphError> {
    let field = field.unwrap_or_default();
    let vertex = field
        .parse::<usize>()
        .map_err(|_| CsvGraphError::InvalidVertex {
            line,
            found: field.to_owned(),
        })?;
    if vertex >= vertex_count {
        return Err(CsvGraphError::VertexOutOfRange {
            line,
            vertex,
            vertex_count,
        });
    }
    Ok(vertex)
}
