//! Runners for the contraction properties: proptest over every graph shape,
//! pinned rstest seeds per shape, and unit tests for the oracle itself.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::test_utils::suite_proptest_config;

use super::concurrency::run_concurrency_stability_property;
use super::equivalence::run_oracle_equivalence_property;
use super::oracle::{OracleForest, sequential_kruskal};
use super::strategies::{fixture_strategy, generate_fixture};
use super::structural::run_structural_invariants_property;
use super::types::GraphShape;

/// Generates an rstest function running `$runner` on a pinned seed for every
/// graph shape.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::unique_42(GraphShape::Unique, 42)]
        #[case::unique_999(GraphShape::Unique, 999)]
        #[case::identical_42(GraphShape::ManyIdentical, 42)]
        #[case::identical_7777(GraphShape::ManyIdentical, 7777)]
        #[case::sparse_42(GraphShape::Sparse, 42)]
        #[case::sparse_999(GraphShape::Sparse, 999)]
        #[case::dense_42(GraphShape::Dense, 42)]
        #[case::disconnected_42(GraphShape::Disconnected, 42)]
        #[case::disconnected_999(GraphShape::Disconnected, 999)]
        #[case::multigraph_42(GraphShape::Multigraph, 42)]
        #[case::multigraph_999(GraphShape::Multigraph, 999)]
        fn $test_name(#[case] shape: GraphShape, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(shape, &mut rng);
            $runner(&fixture).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn contraction_matches_oracle(fixture in fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn contraction_structural_invariants(fixture in fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(24))]

    #[test]
    fn contraction_is_stable_across_worker_counts(fixture in fixture_strategy()) {
        run_concurrency_stability_property(&fixture)?;
    }
}

parameterised_property_test!(
    oracle_equivalence_rstest,
    run_oracle_equivalence_property,
    "oracle equivalence must hold"
);

parameterised_property_test!(
    structural_invariants_rstest,
    run_structural_invariants_property,
    "structural invariants must hold"
);

parameterised_property_test!(
    concurrency_stability_rstest,
    run_concurrency_stability_property,
    "forest must not depend on scheduling"
);

fn assert_oracle(result: &OracleForest, weight: f64, edges: usize, components: usize) {
    assert_eq!(result.total_weight, weight, "total weight");
    assert_eq!(result.edges.len(), edges, "edge count");
    assert_eq!(result.component_count, components, "component count");
}

#[test]
fn oracle_square_with_diagonal_weight() {
    let edges = [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 5.0)];
    let result = sequential_kruskal(4, &edges);
    assert_oracle(&result, 4.0, 3, 1);
    let pairs: Vec<_> = result.edges.iter().map(|edge| (edge.0, edge.1)).collect();
    assert_eq!(pairs, vec![(0, 1), (2, 3), (1, 2)]);
}

#[test]
fn oracle_prefers_lower_pair_on_equal_weights() {
    let edges = [(2, 1, 1.0), (0, 2, 1.0), (1, 0, 1.0)];
    let result = sequential_kruskal(3, &edges);
    assert_oracle(&result, 2.0, 2, 1);
    assert_eq!(result.edges[0].0, 0);
    assert_eq!(result.edges[0].1, 1);
    assert_eq!(result.edges[1].1, 2);
    assert_eq!(result.edges[1].0, 0);
}

#[test]
fn oracle_counts_isolated_vertices_as_components() {
    let edges = [(0, 1, 1.0), (2, 3, 2.0)];
    assert_oracle(&sequential_kruskal(5, &edges), 3.0, 2, 3);
}

#[test]
fn oracle_ignores_self_edges() {
    let edges = [(0, 0, -9.0), (0, 1, 2.0)];
    assert_oracle(&sequential_kruskal(2, &edges), 2.0, 1, 1);
}

#[test]
fn oracle_accepts_negative_weights() {
    let edges = [(0, 1, -3.0), (1, 2, -1.0), (0, 2, 0.5)];
    assert_oracle(&sequential_kruskal(3, &edges), -4.0, 2, 1);
}

#[test]
fn oracle_single_vertex() {
    assert_oracle(&sequential_kruskal(1, &[]), 0.0, 0, 1);
}
