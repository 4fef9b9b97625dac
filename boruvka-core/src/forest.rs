//! Minimum spanning forest produced by a contraction run.

use std::cmp::Ordering;

use crate::error::{ContractionError, Result};
use crate::graph::ComponentId;

/// A single forest edge in canonical undirected form (`source < target`).
///
/// Edges are totally ordered by weight, then by the canonical vertex pair,
/// then by input position. Every weight in a loaded graph is finite, so the
/// order makes the minimum spanning forest unique.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: f64,
    sequence: u64,
}

impl MstEdge {
    pub(crate) const fn new(source: usize, target: usize, weight: f64, sequence: u64) -> Self {
        Self {
            source,
            target,
            weight,
            sequence,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the input position of the edge, used as the final tie-break.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }
}

impl Eq for MstEdge {}

impl Ord for MstEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for MstEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One connected component of the forest: the surviving super-node and the
/// input vertices it absorbed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForestComponent {
    root: ComponentId,
    vertices: Vec<usize>,
}

impl ForestComponent {
    pub(crate) fn new(root: ComponentId, mut vertices: Vec<usize>) -> Self {
        vertices.sort_unstable();
        Self { root, vertices }
    }

    /// Returns the id of the component that survived contraction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> ComponentId { self.root }

    /// Returns the absorbed vertex ids in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[usize] { &self.vertices }
}

/// The output of a contraction run.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<MstEdge>,
    components: Vec<ForestComponent>,
}

impl MinimumSpanningForest {
    /// Builds a forest, sorting edges by their total order and components by
    /// their smallest vertex.
    pub(crate) fn new(mut edges: Vec<MstEdge>, mut components: Vec<ForestComponent>) -> Self {
        edges.sort_unstable();
        components.sort_unstable_by_key(|component| component.vertices.first().copied());
        Self { edges, components }
    }

    /// Returns the forest edges in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the connected components, ordered by their smallest vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &[ForestComponent] { &self.components }

    /// Returns the number of connected components in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components.len() }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.components.len() == 1
    }

    /// Returns the sum of the edge weights.
    ///
    /// Weights are accumulated in edge order, so the result is bitwise
    /// identical across runs and worker counts.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{GraphBuilder, contract};
    ///
    /// let graph = GraphBuilder::new(3)
    ///     .with_edge(0, 1, 0.5)
    ///     .with_edge(1, 2, 1.5)
    ///     .with_edge(0, 2, 4.0)
    ///     .build()
    ///     .expect("graph is valid");
    /// let outcome = contract(graph).expect("contraction succeeds");
    /// assert_eq!(outcome.forest().total_weight(), 2.0);
    /// ```
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(MstEdge::weight).sum()
    }

    /// Converts the forest into a spanning tree.
    ///
    /// # Errors
    ///
    /// Returns [`ContractionError::Disconnected`] when more than one
    /// component remains.
    pub fn into_spanning_tree(self) -> Result<Self> {
        if self.is_tree() {
            Ok(self)
        } else {
            Err(ContractionError::Disconnected {
                component_count: self.components.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: usize, target: usize, weight: f64, sequence: u64) -> MstEdge {
        MstEdge::new(source, target, weight, sequence)
    }

    #[test]
    fn ordering_uses_weight_then_pair_then_sequence() {
        let mut edges = vec![
            edge(0, 3, 1.0, 4),
            edge(0, 2, 1.0, 1),
            edge(1, 2, -2.0, 9),
            edge(0, 2, 1.0, 0),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![
                edge(1, 2, -2.0, 9),
                edge(0, 2, 1.0, 0),
                edge(0, 2, 1.0, 1),
                edge(0, 3, 1.0, 4),
            ]
        );
    }

    #[test]
    fn forest_sorts_edges_and_components() {
        let forest = MinimumSpanningForest::new(
            vec![edge(2, 3, 2.0, 1), edge(0, 1, 1.0, 0)],
            vec![
                ForestComponent::new(ComponentId::new(3), vec![3, 2]),
                ForestComponent::new(ComponentId::new(1), vec![1, 0]),
            ],
        );
        assert_eq!(forest.edges()[0], edge(0, 1, 1.0, 0));
        assert_eq!(forest.components()[0].vertices(), &[0, 1]);
        assert_eq!(forest.components()[1].root(), ComponentId::new(3));
        assert!(!forest.is_tree());
        assert_eq!(forest.total_weight(), 3.0);
    }

    #[test]
    fn disconnected_forest_is_not_a_spanning_tree() {
        let forest = MinimumSpanningForest::new(
            Vec::new(),
            vec![
                ForestComponent::new(ComponentId::new(0), vec![0]),
                ForestComponent::new(ComponentId::new(1), vec![1]),
            ],
        );
        assert_eq!(
            forest.into_spanning_tree(),
            Err(ContractionError::Disconnected { component_count: 2 })
        );
    }

    #[test]
    fn single_component_is_a_spanning_tree() {
        let forest = MinimumSpanningForest::new(
            Vec::new(),
            vec![ForestComponent::new(ComponentId::new(0), vec![0])],
        );
        let tree = forest.into_spanning_tree().expect("single vertex is a tree");
        assert_eq!(tree.total_weight(), 0.0);
    }
}
