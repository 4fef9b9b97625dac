//! Reader for the DIMACS shortest-path (`.gr`) format.
//!
//! ```text
//! c comment
//! p sp <vertices> <arcs>
//! a <source> <target> <weight>
//! ```
//!
//! Vertex ids are 1-based. Road networks list each road once per direction;
//! the contraction loader collapses the resulting parallel edges.
use std::io::BufRead;

use crate::errors::GraphSourceError;
use crate::parse::Fields;

struct Problem {
    vertex_count: usize,
    arc_count: usize,
}

pub(crate) fn read<R: BufRead>(
    reader: R,
) -> Result<(usize, Vec<(usize, usize, f64)>), GraphSourceError> {
    let mut problem: Option<Problem> = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let text = line?;
        let mut fields = Fields::new(index + 1, &text);
        let Some(kind) = fields.kind() else {
            continue;
        };
        match kind {
            "c" => {}
            "p" => {
                if problem.is_some() {
                    return Err(GraphSourceError::DuplicateProblemLine {
                        line: fields.line(),
                    });
                }
                problem = Some(read_problem(fields)?);
            }
            "a" => {
                let Some(declared) = problem.as_ref() else {
                    return Err(GraphSourceError::ArcBeforeProblemLine {
                        line: fields.line(),
                    });
                };
                edges.push(read_arc(fields, declared.vertex_count)?);
            }
            other => return Err(fields.malformed(format!("unknown line type `{other}`"))),
        }
    }

    let Problem {
        vertex_count,
        arc_count,
    } = problem.ok_or(GraphSourceError::MissingProblemLine)?;
    if edges.len() != arc_count {
        return Err(GraphSourceError::ArcCountMismatch {
            declared: arc_count,
            found: edges.len(),
        });
    }
    Ok((vertex_count, edges))
}

fn read_problem(mut fields: Fields<'_>) -> Result<Problem, GraphSourceError> {
    let format: String = fields.next("problem format")?;
    if format != "sp" {
        return Err(fields.malformed(format!("unsupported problem format `{format}`")));
    }
    let vertex_count = fields.next("vertex count")?;
    let arc_count = fields.next("arc count")?;
    fields.finish()?;
    Ok(Problem {
        vertex_count,
        arc_count,
    })
}

fn read_arc(
    mut fields: Fields<'_>,
    vertex_count: usize,
) -> Result<(usize, usize, f64), GraphSourceError> {
    let source = zero_based(fields.next("source vertex")?, &fields, vertex_count)?;
    let target = zero_based(fields.next("target vertex")?, &fields, vertex_count)?;
    let weight = fields.weight()?;
    fields.finish()?;
    Ok((source, target, weight))
}

fn zero_based(
    vertex: usize,
    fields: &Fields<'_>,
    vertex_count: usize,
) -> Result<usize, GraphSourceError> {
    if vertex == 0 || vertex > vertex_count {
        return Err(GraphSourceError::VertexOutOfRange {
            line: fields.line(),
            vertex,
            vertex_count,
        });
    }
    Ok(vertex - 1)
}
