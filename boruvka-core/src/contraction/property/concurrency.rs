//! Concurrency stability: every worker count and every repetition yields the
//! same forest.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MinimumSpanningForest;
use crate::test_utils::concurrency_repetitions;

use super::types::{GraphFixture, engine};

pub(super) const WORKER_COUNTS: [usize; 4] = [1, 2, 4, 8];

/// The parts of a forest that must not depend on scheduling. Which component
/// id survives as a root is scheduling-dependent and is left out.
fn signature(forest: &MinimumSpanningForest) -> (Vec<(usize, usize, u64)>, Vec<Vec<usize>>, u64) {
    let edges = forest
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.sequence()))
        .collect();
    let components = forest
        .components()
        .iter()
        .map(|component| component.vertices().to_vec())
        .collect();
    (edges, components, forest.total_weight().to_bits())
}

pub(super) fn run_concurrency_stability_property(fixture: &GraphFixture) -> TestCaseResult {
    let repetitions = concurrency_repetitions();
    let mut baseline = None;

    for workers in WORKER_COUNTS {
        for run in 0..repetitions {
            let seed = u64::from(run);
            let outcome = engine(workers, seed).run(fixture.graph()).map_err(|error| {
                TestCaseError::fail(format!(
                    "workers={workers}, run={run}: contraction failed: {error} ({})",
                    fixture.context()
                ))
            })?;
            let observed = signature(outcome.forest());
            match &baseline {
                None => baseline = Some(observed),
                Some(expected) if *expected != observed => {
                    return Err(TestCaseError::fail(format!(
                        "workers={workers}, run={run}: forest diverged from baseline ({})",
                        fixture.context()
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
