//! The per-thread contraction loop.

use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::graph::{ComponentId, Graph};

use super::backoff::{Backoff, BackoffPolicy};
use super::queue::{CloseOnUnwind, WorkQueue};
use super::solution::SolutionSlot;
use super::stats::WorkerStats;

/// State shared by every worker of one run.
pub(super) struct RunContext<'a> {
    pub(super) graph: &'a Graph,
    pub(super) queue: &'a WorkQueue,
    pub(super) solution: &'a SolutionSlot,
    pub(super) backoff: BackoffPolicy,
    pub(super) seed: u64,
}

/// What a single attempt on a popped component achieved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    Merged { absorbed: ComponentId },
    Contended,
    StaleNeighbour,
    Dead,
    ForestRoot,
    Solved,
}

/// Drains the shared queue until it closes or runs out of work.
///
/// Any error closes the queue so sibling workers stop promptly.
#[instrument(name = "core.contraction_worker", level = "debug", skip(context), err)]
pub(super) fn work(context: &RunContext<'_>, worker: usize) -> Result<WorkerStats> {
    let _close = CloseOnUnwind(context.queue);
    let mut stats = WorkerStats::default();
    let mut backoff = Backoff::new(context.backoff, context.seed, worker);

    let result = drain(context, &mut stats, &mut backoff);
    if result.is_err() {
        context.queue.close();
    }
    result?;

    debug!(
        popped = stats.popped,
        merges = stats.merges,
        contended = stats.contended,
        stale = stats.stale,
        "worker finished"
    );
    Ok(stats)
}

fn drain(context: &RunContext<'_>, stats: &mut WorkerStats, backoff: &mut Backoff) -> Result<()> {
    let queue = context.queue;
    while !context.solution.is_set() {
        let Some(id) = queue.pop()? else {
            break;
        };
        stats.popped += 1;

        // Both component locks are released when `attempt` returns.
        match attempt(context, id)? {
            Step::Merged { absorbed } => {
                trace!(component = %id, absorbed = %absorbed, "merged");
                stats.merges += 1;
                record_merge();
                backoff.reset();
                queue.requeue(id)?;
            }
            Step::Contended => {
                trace!(component = %id, "lock contended, requeueing");
                stats.contended += 1;
                record_contention();
                queue.requeue(id)?;
                backoff.snooze();
            }
            Step::StaleNeighbour => {
                trace!(component = %id, "neighbour absorbed elsewhere, requeueing");
                stats.stale += 1;
                record_stale_neighbour();
                queue.requeue(id)?;
            }
            Step::Dead => {
                stats.discarded += 1;
                queue.retire(id)?;
            }
            Step::ForestRoot => {
                trace!(component = %id, "no outgoing edges, retiring forest root");
                stats.roots += 1;
                queue.retire(id)?;
            }
            Step::Solved => {
                debug!(component = %id, "published spanning tree root");
                stats.solved += 1;
                queue.close();
            }
        }
    }
    Ok(())
}

fn attempt(context: &RunContext<'_>, id: ComponentId) -> Result<Step> {
    let graph = context.graph;
    let Some(mut state) = graph.component(id)?.try_lock()? else {
        return Ok(Step::Contended);
    };
    if state.is_dead() {
        return Ok(Step::Dead);
    }

    let Some(cheapest) = state.cheapest_edge(id, graph)? else {
        if state.vertex_count() == graph.vertex_count() {
            context.solution.publish(id)?;
            return Ok(Step::Solved);
        }
        return Ok(Step::ForestRoot);
    };

    let Some(mut other) = graph.component(cheapest.neighbour)?.try_lock()? else {
        return Ok(Step::Contended);
    };
    if other.is_dead() {
        return Ok(Step::StaleNeighbour);
    }

    state.merge_into(id, &mut other, cheapest.neighbour, cheapest.edge, graph)?;
    Ok(Step::Merged {
        absorbed: cheapest.neighbour,
    })
}

#[cfg(feature = "metrics")]
fn record_merge() {
    metrics::counter!("boruvka_merges_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_merge() {}

#[cfg(feature = "metrics")]
fn record_contention() {
    metrics::counter!("boruvka_lock_contention_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_contention() {}

#[cfg(feature = "metrics")]
fn record_stale_neighbour() {
    metrics::counter!("boruvka_stale_neighbours_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_stale_neighbour() {}
