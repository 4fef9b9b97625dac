//! Reader for plain edge lists.
//!
//! The first non-comment line holds the vertex count; each further line is
//! `<source> <target> <weight>` with 0-based ids. `#` starts a comment line.
use std::io::BufRead;

use crate::errors::GraphSourceError;
use crate::parse::Fields;

pub(crate) fn read<R: BufRead>(
    reader: R,
) -> Result<(usize, Vec<(usize, usize, f64)>), GraphSourceError> {
    let mut vertex_count: Option<usize> = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let text = line?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut fields = Fields::new(index + 1, trimmed);
        let Some(count) = vertex_count else {
            let declared = fields.next("vertex count")?;
            fields.finish()?;
            vertex_count = Some(declared);
            continue;
        };

        let source = fields.next("source vertex")?;
        let target = fields.next("target vertex")?;
        let weight = fields.weight()?;
        fields.finish()?;
        if let Some(vertex) = [source, target].into_iter().find(|&v| v >= count) {
            return Err(GraphSourceError::VertexOutOfRange {
                line: index + 1,
                vertex,
                vertex_count: count,
            });
        }
        edges.push((source, target, weight));
    }

    let count = vertex_count.ok_or(GraphSourceError::MissingVertexCount)?;
    Ok((count, edges))
}
