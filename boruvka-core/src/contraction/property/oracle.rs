//! Sequential Kruskal oracle.
//!
//! Sorts edges by the same total order as [`crate::MstEdge`]
//! (`weight.total_cmp`, canonical pair, input position), so the accepted edge
//! list is exactly the unique minimum spanning forest the engine must find.

use std::cmp::Ordering;

/// An accepted oracle edge: canonical pair, weight and input position.
pub(super) type OracleEdge = (usize, usize, f64, u64);

#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Accepted edges in ascending order.
    pub edges: Vec<OracleEdge>,
    pub total_weight: f64,
    pub component_count: usize,
}

pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[(usize, usize, f64)]) -> OracleForest {
    let mut candidates: Vec<OracleEdge> = edges
        .iter()
        .zip(0_u64..)
        .filter(|((source, target, weight), _)| {
            source != target
                && *source < vertex_count
                && *target < vertex_count
                && weight.is_finite()
        })
        .map(|(&(source, target, weight), sequence)| {
            (source.min(target), source.max(target), weight, sequence)
        })
        .collect();
    candidates.sort_unstable_by(compare);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    for edge in candidates {
        let left = find_root(&mut parent, edge.0);
        let right = find_root(&mut parent, edge.1);
        if left != right {
            parent[left.max(right)] = left.min(right);
            accepted.push(edge);
        }
    }

    OracleForest {
        total_weight: accepted.iter().map(|edge| edge.2).sum(),
        component_count: vertex_count - accepted.len(),
        edges: accepted,
    }
}

fn compare(left: &OracleEdge, right: &OracleEdge) -> Ordering {
    left.2
        .total_cmp(&right.2)
        .then_with(|| left.0.cmp(&right.0))
        .then_with(|| left.1.cmp(&right.1))
        .then_with(|| left.3.cmp(&right.3))
}

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
