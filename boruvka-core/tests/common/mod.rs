//! Shared graph fixtures for the integration tests.

use boruvka_core::{Graph, GraphBuilder};

/// Square from the worked example: the unique MST has weight 4.
pub fn square() -> Graph {
    GraphBuilder::new(4)
        .with_edge(0, 1, 1.0)
        .with_edge(1, 2, 2.0)
        .with_edge(2, 3, 1.0)
        .with_edge(0, 3, 5.0)
        .build()
        .expect("square must load")
}

/// `rows x cols` grid where horizontal edges weigh 1 and vertical edges 2, so
/// the MST is every horizontal edge plus one vertical edge per row pair.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut builder = GraphBuilder::new(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let vertex = row * cols + col;
            if col + 1 < cols {
                builder.add_edge(vertex, vertex + 1, 1.0);
            }
            if row + 1 < rows {
                builder.add_edge(vertex, vertex + cols, 2.0);
            }
        }
    }
    builder.build().expect("grid must load")
}
