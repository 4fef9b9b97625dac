//! Concurrent Boruvka contraction.
//!
//! A [`ContractionEngine`] runs one worker per pool thread. Workers pop
//! components from a shared queue, take the component lock with a
//! non-blocking try-lock, find its cheapest outgoing edge and try-lock the
//! neighbour across it. When both locks are held the neighbour is absorbed and
//! the survivor is requeued; any failed try-lock requeues the component
//! instead of waiting, so no wait-for cycle can form between workers.
//!
//! A component with no outgoing edge that contains every vertex is published
//! to the solution slot, which stops the run. A component with no outgoing edge
//! that does not span the graph is the root of one tree of a spanning forest
//! and is retired.

mod backoff;
#[cfg(test)]
mod property;
mod queue;
mod solution;
mod stats;
mod worker;

use std::num::NonZeroUsize;
use std::thread;
#[cfg(feature = "metrics")]
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{info, instrument};

use crate::error::{ContractionError, Result};
use crate::forest::{ForestComponent, MinimumSpanningForest};
use crate::graph::{ComponentId, Graph};

use self::queue::WorkQueue;
use self::solution::SolutionSlot;
use self::worker::RunContext;

pub use self::backoff::BackoffPolicy;
pub use self::stats::{ContractionStats, WorkerStats};

const DEFAULT_SEED: u64 = 0x853C_49E6_748F_EA9B;
const DEFAULT_THREAD_NAME_PREFIX: &str = "boruvka-worker";

/// Configures and constructs [`ContractionEngine`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{BackoffPolicy, ContractionBuilder};
///
/// let engine = ContractionBuilder::new()
///     .with_workers(4)
///     .with_backoff(BackoffPolicy::disabled())
///     .with_seed(42)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(engine.workers().get(), 4);
/// assert_eq!(engine.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct ContractionBuilder {
    workers: Option<usize>,
    backoff: BackoffPolicy,
    seed: u64,
    thread_name_prefix: String,
}

impl Default for ContractionBuilder {
    fn default() -> Self {
        Self {
            workers: None,
            backoff: BackoffPolicy::default(),
            seed: DEFAULT_SEED,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_owned(),
        }
    }
}

impl ContractionBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BackoffPolicy, ContractionBuilder};
    ///
    /// let builder = ContractionBuilder::new();
    /// assert_eq!(builder.workers(), None);
    /// assert_eq!(builder.backoff(), BackoffPolicy::default());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads.
    ///
    /// Without an explicit count the engine uses the available parallelism.
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Returns the explicitly configured worker count, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn workers(&self) -> Option<usize> { self.workers }

    /// Sets the backoff applied after lock contention.
    #[must_use]
    pub const fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns the configured backoff policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn backoff(&self) -> BackoffPolicy { self.backoff }

    /// Seeds the per-worker jitter generators.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the name prefix for pool threads; threads are named
    /// `<prefix>-<index>`.
    #[must_use]
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Validates the configuration and builds the worker pool.
    ///
    /// # Errors
    ///
    /// Returns [`ContractionError::InvalidWorkerCount`] when zero workers are
    /// requested and [`ContractionError::ThreadPool`] when the pool cannot be
    /// created.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{ContractionBuilder, ContractionErrorCode};
    ///
    /// let err = ContractionBuilder::new()
    ///     .with_workers(0)
    ///     .build()
    ///     .expect_err("zero workers is invalid");
    /// assert_eq!(err.code(), ContractionErrorCode::InvalidWorkerCount);
    /// ```
    pub fn build(self) -> Result<ContractionEngine> {
        let workers = match self.workers {
            Some(count) => {
                NonZeroUsize::new(count).ok_or(ContractionError::InvalidWorkerCount { got: count })?
            }
            None => thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        };

        let prefix = self.thread_name_prefix;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(move |index| format!("{prefix}-{index}"))
            .build()
            .map_err(|error| ContractionError::ThreadPool {
                reason: error.to_string(),
            })?;

        Ok(ContractionEngine {
            pool,
            workers,
            backoff: self.backoff,
            seed: self.seed,
        })
    }
}

/// Runs Boruvka contraction on a dedicated worker pool.
#[derive(Debug)]
pub struct ContractionEngine {
    pool: ThreadPool,
    workers: NonZeroUsize,
    backoff: BackoffPolicy,
    seed: u64,
}

impl ContractionEngine {
    /// Returns the number of worker threads.
    #[must_use]
    #[rustfmt::skip]
    pub const fn workers(&self) -> NonZeroUsize { self.workers }

    /// Returns the backoff policy used by every worker.
    #[must_use]
    #[rustfmt::skip]
    pub const fn backoff(&self) -> BackoffPolicy { self.backoff }

    /// Returns the jitter seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Contracts `graph` into its minimum spanning forest.
    ///
    /// Every vertex starts as its own component on the work queue. The run
    /// ends when a spanning component is published or, for disconnected
    /// input, when every component has been retired as a forest root.
    ///
    /// # Errors
    ///
    /// Returns [`ContractionError::LockPoisoned`] when a worker panicked while
    /// holding a lock and [`ContractionError::InvariantViolation`] when the
    /// locking discipline was broken. The first error stops every worker.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{ContractionBuilder, GraphBuilder};
    ///
    /// let graph = GraphBuilder::new(4)
    ///     .with_edge(0, 1, 1.0)
    ///     .with_edge(1, 2, 2.0)
    ///     .with_edge(2, 3, 1.0)
    ///     .with_edge(0, 3, 5.0)
    ///     .build()
    ///     .expect("graph is valid");
    /// let engine = ContractionBuilder::new().with_workers(2).build().expect("engine builds");
    /// let outcome = engine.run(graph).expect("contraction succeeds");
    /// assert!(outcome.forest().is_tree());
    /// assert_eq!(outcome.forest().total_weight(), 4.0);
    /// assert!(outcome.solution().is_some());
    /// ```
    #[instrument(
        name = "core.contract",
        err,
        skip(self, graph),
        fields(
            workers = self.workers.get(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
        ),
    )]
    pub fn run(&self, graph: Graph) -> Result<ContractionOutcome> {
        #[cfg(feature = "metrics")]
        let started = Instant::now();

        let queue = WorkQueue::seeded(graph.vertex_count());
        let solution = SolutionSlot::new();
        let context = RunContext {
            graph: &graph,
            queue: &queue,
            solution: &solution,
            backoff: self.backoff,
            seed: self.seed,
        };

        let per_worker = self
            .pool
            .broadcast(|ctx| worker::work(&context, ctx.index()))
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        let stats = ContractionStats::from_workers(per_worker);

        let solution = solution.get();
        let forest = collect_forest(&graph, solution)?;

        #[cfg(feature = "metrics")]
        metrics::histogram!("boruvka_contraction_seconds").record(started.elapsed().as_secs_f64());

        info!(
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            merges = stats.total().merges(),
            contended = stats.total().contended(),
            "contraction completed"
        );
        Ok(ContractionOutcome {
            forest,
            solution,
            stats,
        })
    }
}

/// Reads the forest out of the arena once every worker has exited.
fn collect_forest(graph: &Graph, solution: Option<ComponentId>) -> Result<MinimumSpanningForest> {
    let mut edges = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut components = Vec::new();
    let mut covered = 0_usize;

    for component in graph.components() {
        let id = component.id();
        let state = component.lock()?;
        if state.is_dead() == graph.links().is_representative(id) {
            return Err(ContractionError::invariant(
                "a component is dead exactly when it is linked to an absorber",
                id,
            ));
        }
        if state.is_dead() {
            continue;
        }
        covered += state.vertex_count();
        edges.extend(
            state
                .tree_edges()
                .iter()
                .map(|&edge| *graph.edge(edge).key()),
        );
        components.push(ForestComponent::new(id, state.vertices().to_vec()));
    }

    if covered != graph.vertex_count() {
        return Err(ContractionError::invariant(
            "live components must partition the vertex set",
            ComponentId::new(0),
        ));
    }
    if let Some(root) = solution {
        if !matches!(components.as_slice(), [only] if only.root() == root) {
            return Err(ContractionError::invariant(
                "the published solution must be the only live component",
                root,
            ));
        }
    }

    Ok(MinimumSpanningForest::new(edges, components))
}

/// The result of a contraction run.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractionOutcome {
    forest: MinimumSpanningForest,
    solution: Option<ComponentId>,
    stats: ContractionStats,
}

impl ContractionOutcome {
    /// Returns the minimum spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &MinimumSpanningForest { &self.forest }

    /// Returns the component published to the solution slot.
    ///
    /// This is `None` exactly when the input graph is disconnected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn solution(&self) -> Option<ComponentId> { self.solution }

    /// Returns the run counters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> &ContractionStats { &self.stats }

    /// Consumes the outcome and returns the forest.
    #[must_use]
    pub fn into_forest(self) -> MinimumSpanningForest {
        self.forest
    }
}

/// Contracts `graph` with a default engine sized to the available
/// parallelism.
///
/// # Errors
///
/// Propagates engine construction and run errors; see
/// [`ContractionEngine::run`].
///
/// # Examples
/// ```
/// use boruvka_core::{GraphBuilder, contract};
///
/// let graph = GraphBuilder::new(1).build().expect("graph is valid");
/// let outcome = contract(graph).expect("contraction succeeds");
/// assert_eq!(outcome.forest().total_weight(), 0.0);
/// assert!(outcome.forest().is_tree());
/// ```
pub fn contract(graph: Graph) -> Result<ContractionOutcome> {
    ContractionBuilder::new().build()?.run(graph)
}
