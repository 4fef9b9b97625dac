//! Oracle equivalence: the engine finds exactly the forest that sequential
//! Kruskal accepts.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::{OracleEdge, sequential_kruskal};
use super::types::{GraphFixture, engine};

const WORKERS: usize = 4;

pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let outcome = engine(WORKERS, 0x0AC1E)
        .run(fixture.graph())
        .map_err(|error| {
            TestCaseError::fail(format!("contraction failed: {error} ({})", fixture.context()))
        })?;
    let forest = outcome.forest();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    let produced: Vec<OracleEdge> = forest
        .edges()
        .iter()
        .map(|edge| (edge.source(), edge.target(), edge.weight(), edge.sequence()))
        .collect();
    if produced != oracle.edges {
        return Err(TestCaseError::fail(format!(
            "edge set differs from oracle: engine={produced:?}, oracle={:?} ({})",
            oracle.edges,
            fixture.context(),
        )));
    }

    if forest.total_weight().to_bits() != oracle.total_weight.to_bits() {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: engine={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.context(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: engine={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.context(),
        )));
    }

    Ok(())
}
