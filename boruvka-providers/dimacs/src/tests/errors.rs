use std::io;

use rstest::rstest;

use crate::GraphSourceError;

#[rstest]
#[case::missing_problem(
    GraphSourceError::MissingProblemLine,
    "missing `p sp <vertices> <arcs>` problem line"
)]
#[case::malformed(
    GraphSourceError::Malformed { line: 7, reason: "missing weight".into() },
    "line 7: missing weight"
)]
#[case::out_of_range(
    GraphSourceError::VertexOutOfRange { line: 2, vertex: 9, vertex_count: 4 },
    "line 2: vertex 9 is outside the declared 4 vertices"
)]
#[case::mismatch(
    GraphSourceError::ArcCountMismatch { declared: 3, found: 2 },
    "problem line declares 3 arcs but 2 were read"
)]
fn errors_render_context(#[case] err: GraphSourceError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn io_errors_convert() {
    let err = GraphSourceError::from(io::Error::other("boom"));
    assert!(matches!(err, GraphSourceError::Io(_)));
}
