use thiserror::Error;

/// Errors raised while reading a graph file.
///
/// Line numbers are 1-based and count every physical line, comments included.
#[derive(Debug, Error)]
pub enum GraphSourceError {
    /// The input ended without declaring the graph size.
    #[error("missing `p sp <vertices> <arcs>` problem line")]
    MissingProblemLine,
    /// An arc appeared before the problem line.
    #[error("line {line}: arc appears before the problem line")]
    ArcBeforeProblemLine { line: usize },
    /// A second problem line was found.
    #[error("line {line}: duplicate problem line")]
    DuplicateProblemLine { line: usize },
    /// The edge list has no vertex count header.
    #[error("missing vertex count header")]
    MissingVertexCount,
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    /// An arc referenced a vertex outside the declared range.
    #[error("line {line}: vertex {vertex} is outside the declared {vertex_count} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// The number of arcs differs from the count declared by the problem line.
    #[error("problem line declares {declared} arcs but {found} were read")]
    ArcCountMismatch { declared: usize, found: usize },
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
