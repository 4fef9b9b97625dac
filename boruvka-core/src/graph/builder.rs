//! Sequential loader turning vertex/edge triples into the contraction arena.

use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;
use crate::forest::MstEdge;

use super::component::insert_cheapest;
use super::{Component, ComponentId, Edge, EdgeId, Graph};

/// Collects an undirected weighted graph before loading it into the arena.
///
/// Edges are `(source, target, weight)` triples over vertex ids in
/// `0..vertex_count`. Validation happens in [`GraphBuilder::build`].
///
/// # Examples
/// ```
/// use boruvka_core::GraphBuilder;
///
/// let graph = GraphBuilder::new(3)
///     .with_edge(0, 1, 1.0)
///     .with_edge(1, 2, 2.0)
///     .build()
///     .expect("graph is valid");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices and no
    /// edges.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Appends an edge and returns the builder.
    #[must_use]
    pub fn with_edge(mut self, source: usize, target: usize, weight: f64) -> Self {
        self.add_edge(source, target, weight);
        self
    }

    /// Appends an edge in place.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) -> &mut Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Appends every edge yielded by `edges`.
    pub fn extend_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges collected so far, self-edges included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Validates the collected edges and loads them into a [`Graph`].
    ///
    /// One component is created per vertex and one edge record per non-self
    /// edge. Each edge is registered with both endpoints; parallel edges
    /// between the same pair collapse to the cheapest in each endpoint's map.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - `vertex_count == 0`
    /// - an edge references a vertex id `>= vertex_count`
    /// - an edge weight is NaN or infinite
    pub fn build(self) -> Result<Graph, GraphError> {
        let vertex_count = self.vertex_count;
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut records = Vec::with_capacity(self.edges.len());
        let mut self_edges = 0_usize;
        for (sequence, (source, target, weight)) in self.edges.into_iter().enumerate() {
            match canonical_key(source, target, weight, sequence, vertex_count)? {
                Some(key) => records.push(Edge::new(key)),
                None => self_edges += 1,
            }
        }

        let mut maps: Vec<HashMap<ComponentId, EdgeId>> = vec![HashMap::new(); vertex_count];
        for (index, record) in records.iter().enumerate() {
            let id = EdgeId::new(index);
            let key = record.key();
            let source = ComponentId::new(key.source());
            let target = ComponentId::new(key.target());
            insert_cheapest(&mut maps[source.get()], target, id, &records);
            insert_cheapest(&mut maps[target.get()], source, id, &records);
        }

        let components = maps
            .into_iter()
            .enumerate()
            .map(|(index, edges)| Component::new(ComponentId::new(index), edges))
            .collect();

        debug!(
            vertices = vertex_count,
            edges = records.len(),
            self_edges,
            "graph loaded into contraction arena"
        );
        Ok(Graph::from_parts(components, records))
    }
}

fn canonical_key(
    source: usize,
    target: usize,
    weight: f64,
    sequence: usize,
    vertex_count: usize,
) -> Result<Option<MstEdge>, GraphError> {
    for vertex in [source, target] {
        if vertex >= vertex_count {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
    }

    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            source_vertex: source,
            target_vertex: target,
        });
    }

    if source == target {
        return Ok(None);
    }

    let (low, high) = if source <= target {
        (source, target)
    } else {
        (target, source)
    };
    let sequence = u64::try_from(sequence).unwrap_or(u64::MAX);
    Ok(Some(MstEdge::new(low, high, weight, sequence)))
}
