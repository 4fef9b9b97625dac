//! Structural invariants of a contraction outcome.
//!
//! - every forest edge is canonical (`source < target`) and acyclic
//! - the forest has `n - c` edges for `c` components
//! - component vertex sets partition `0..n` and contain their own edges
//! - a solution is published exactly when one component remains
//! - one merge happens per absorbed component

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::ContractionOutcome;

use super::oracle::find_root;
use super::types::{GraphFixture, engine};

const WORKERS: usize = 3;

pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let outcome = engine(WORKERS, 7).run(fixture.graph()).map_err(|error| {
        TestCaseError::fail(format!("contraction failed: {error} ({})", fixture.context()))
    })?;

    let owners = validate_partition(fixture, &outcome)?;
    validate_edges(fixture, &outcome, &owners)?;
    validate_counts(fixture, &outcome)
}

/// Returns, per vertex, the index of the forest component holding it.
fn validate_partition(
    fixture: &GraphFixture,
    outcome: &ContractionOutcome,
) -> Result<Vec<usize>, TestCaseError> {
    let mut owners = vec![usize::MAX; fixture.vertex_count];
    for (index, component) in outcome.forest().components().iter().enumerate() {
        if !component.vertices().contains(&component.root().get()) {
            return Err(TestCaseError::fail(format!(
                "component {index} does not contain its root {} ({})",
                component.root(),
                fixture.context(),
            )));
        }
        for &vertex in component.vertices() {
            let slot = owners.get_mut(vertex).ok_or_else(|| {
                TestCaseError::fail(format!("vertex {vertex} out of range ({})", fixture.context()))
            })?;
            if *slot != usize::MAX {
                return Err(TestCaseError::fail(format!(
                    "vertex {vertex} appears in components {} and {index} ({})",
                    *slot,
                    fixture.context(),
                )));
            }
            *slot = index;
        }
    }
    if let Some(vertex) = owners.iter().position(|&owner| owner == usize::MAX) {
        return Err(TestCaseError::fail(format!(
            "vertex {vertex} belongs to no component ({})",
            fixture.context(),
        )));
    }
    Ok(owners)
}

fn validate_edges(
    fixture: &GraphFixture,
    outcome: &ContractionOutcome,
    owners: &[usize],
) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for edge in outcome.forest().edges() {
        let (source, target) = (edge.source(), edge.target());
        if source >= target {
            return Err(TestCaseError::fail(format!(
                "edge ({source}, {target}) is not canonical ({})",
                fixture.context(),
            )));
        }
        if owners[source] != owners[target] {
            return Err(TestCaseError::fail(format!(
                "edge ({source}, {target}) crosses components ({})",
                fixture.context(),
            )));
        }
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge ({source}, {target}) closes a cycle ({})",
                fixture.context(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_counts(fixture: &GraphFixture, outcome: &ContractionOutcome) -> TestCaseResult {
    let forest = outcome.forest();
    let components = forest.component_count();
    let expected_edges = fixture.vertex_count - components;
    if forest.edges().len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges, expected n - c = {expected_edges} ({})",
            forest.edges().len(),
            fixture.context(),
        )));
    }

    if outcome.solution().is_some() != forest.is_tree() {
        return Err(TestCaseError::fail(format!(
            "solution {:?} inconsistent with {components} components ({})",
            outcome.solution(),
            fixture.context(),
        )));
    }

    let totals = outcome.stats().total();
    let expected_merges = u64::try_from(expected_edges).unwrap_or(u64::MAX);
    if totals.merges() != expected_merges {
        return Err(TestCaseError::fail(format!(
            "{} merges recorded, expected {expected_merges} ({})",
            totals.merges(),
            fixture.context(),
        )));
    }
    if totals.solved() > 1 {
        return Err(TestCaseError::fail(format!(
            "solution published {} times ({})",
            totals.solved(),
            fixture.context(),
        )));
    }
    Ok(())
}
