//! Benchmark parameter types.

use std::fmt;

/// Parameters for a contraction benchmark run.
#[derive(Clone, Debug)]
pub struct ContractionBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of worker threads.
    pub workers: usize,
}

impl fmt::Display for ContractionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},workers={}", self.vertex_count, self.workers)
    }
}
