//! Seeded synthetic graphs for benchmarking.
//!
//! [`SyntheticGraphConfig`] produces a connected random graph: a random
//! recursive tree guarantees connectivity and extra random chords add cycles.
//! [`grid_graph`] produces a road-network-like lattice.

mod errors;

use boruvka_core::GraphBuilder;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub use errors::SyntheticError;

/// Weight distribution of generated edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightProfile {
    /// Weights drawn uniformly from `[1, 1000)`; ties are practically absent.
    Uniform,
    /// Integer weights drawn from `1..=distinct`; ties are everywhere and many
    /// components pick the same cheapest neighbour, which maximises lock
    /// contention.
    Tied {
        /// Number of distinct weights.
        distinct: u32,
    },
}

impl WeightProfile {
    fn sample(self, rng: &mut SmallRng) -> f64 {
        match self {
            Self::Uniform => rng.gen_range(1.0..1_000.0),
            Self::Tied { distinct } => f64::from(rng.gen_range(1..=distinct)),
        }
    }
}

/// Configuration for a random connected graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Chords added per vertex on top of the spanning tree.
    pub chords_per_vertex: usize,
    /// Edge weight distribution.
    pub weights: WeightProfile,
    /// Generator seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Generates the graph described by this configuration.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] for a zero vertex count, an empty tied
    /// profile or an edge count that does not fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use boruvka_benches::source::{SyntheticGraphConfig, WeightProfile};
    ///
    /// let config = SyntheticGraphConfig {
    ///     vertex_count: 10,
    ///     chords_per_vertex: 2,
    ///     weights: WeightProfile::Uniform,
    ///     seed: 7,
    /// };
    /// let builder = config.generate().expect("config is valid");
    /// assert_eq!(builder.edge_count(), 9 + 20);
    /// ```
    pub fn generate(&self) -> Result<GraphBuilder, SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if matches!(self.weights, WeightProfile::Tied { distinct: 0 }) {
            return Err(SyntheticError::ZeroDistinctWeights);
        }
        let chords = self
            .vertex_count
            .checked_mul(self.chords_per_vertex)
            .ok_or(SyntheticError::Overflow)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut builder = GraphBuilder::new(self.vertex_count);
        for vertex in 1..self.vertex_count {
            let parent = rng.gen_range(0..vertex);
            let weight = self.weights.sample(&mut rng);
            builder.add_edge(parent, vertex, weight);
        }
        for _ in 0..chords {
            let source = rng.gen_range(0..self.vertex_count);
            let target = rng.gen_range(0..self.vertex_count);
            let weight = self.weights.sample(&mut rng);
            builder.add_edge(source, target, weight);
        }
        Ok(builder)
    }
}

/// Generates a `rows x columns` lattice with 4-neighbour edges and weights
/// drawn from `weights`.
///
/// # Errors
/// Returns [`SyntheticError::EmptyGrid`] when either dimension is zero and
/// [`SyntheticError::Overflow`] when the vertex count does not fit in `usize`.
pub fn grid_graph(
    rows: usize,
    columns: usize,
    weights: WeightProfile,
    seed: u64,
) -> Result<GraphBuilder, SyntheticError> {
    if rows == 0 || columns == 0 {
        return Err(SyntheticError::EmptyGrid { rows, columns });
    }
    if matches!(weights, WeightProfile::Tied { distinct: 0 }) {
        return Err(SyntheticError::ZeroDistinctWeights);
    }
    let vertex_count = rows.checked_mul(columns).ok_or(SyntheticError::Overflow)?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(vertex_count);
    for row in 0..rows {
        for column in 0..columns {
            let vertex = row * columns + column;
            if column + 1 < columns {
                builder.add_edge(vertex, vertex + 1, weights.sample(&mut rng));
            }
            if row + 1 < rows {
                builder.add_edge(vertex, vertex + columns, weights.sample(&mut rng));
            }
        }
    }
    Ok(builder)
}
