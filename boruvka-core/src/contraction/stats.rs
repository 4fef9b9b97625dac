//! Counters describing how a contraction run unfolded.

use std::ops::AddAssign;

/// Per-worker counters collected during a contraction run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WorkerStats {
    pub(crate) popped: u64,
    pub(crate) merges: u64,
    pub(crate) contended: u64,
    pub(crate) stale: u64,
    pub(crate) discarded: u64,
    pub(crate) roots: u64,
    pub(crate) solved: u64,
}

impl WorkerStats {
    /// Components taken from the work queue.
    #[must_use]
    #[rustfmt::skip]
    pub const fn popped(&self) -> u64 { self.popped }

    /// Successful merges, one per absorbed component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> u64 { self.merges }

    /// Try-lock attempts that found the component or its neighbour held.
    #[must_use]
    #[rustfmt::skip]
    pub const fn contended(&self) -> u64 { self.contended }

    /// Attempts abandoned because the neighbour died after the edge scan.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stale_neighbours(&self) -> u64 { self.stale }

    /// Dead components discarded after being popped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn discarded(&self) -> u64 { self.discarded }

    /// Components retired with no remaining edges that do not span the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest_roots(&self) -> u64 { self.roots }

    /// Number of times this worker published the solution.
    #[must_use]
    #[rustfmt::skip]
    pub const fn solved(&self) -> u64 { self.solved }
}

impl AddAssign for WorkerStats {
    fn add_assign(&mut self, other: Self) {
        self.popped += other.popped;
        self.merges += other.merges;
        self.contended += other.contended;
        self.stale += other.stale;
        self.discarded += other.discarded;
        self.roots += other.roots;
        self.solved += other.solved;
    }
}

/// Aggregated counters for a whole contraction run.
///
/// # Examples
/// ```
/// use boruvka_core::{ContractionBuilder, GraphBuilder};
///
/// let graph = GraphBuilder::new(3)
///     .with_edge(0, 1, 1.0)
///     .with_edge(1, 2, 1.0)
///     .build()
///     .expect("graph is valid");
/// let engine = ContractionBuilder::new()
///     .with_workers(2)
///     .build()
///     .expect("engine builds");
/// let outcome = engine.run(graph).expect("run succeeds");
/// assert_eq!(outcome.stats().total().merges(), 2);
/// assert_eq!(outcome.stats().per_worker().len(), 2);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContractionStats {
    workers: Vec<WorkerStats>,
    total: WorkerStats,
}

impl ContractionStats {
    pub(crate) fn from_workers(workers: Vec<WorkerStats>) -> Self {
        let mut total = WorkerStats::default();
        for stats in &workers {
            total += *stats;
        }
        Self { workers, total }
    }

    /// Counters for each worker, indexed by worker.
    #[must_use]
    #[rustfmt::skip]
    pub fn per_worker(&self) -> &[WorkerStats] { &self.workers }

    /// Counters summed over all workers.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total(&self) -> WorkerStats { self.total }
}
