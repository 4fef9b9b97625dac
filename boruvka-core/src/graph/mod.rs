//! Arena holding the mutable contraction graph.
//!
//! Components and edges live in flat vectors addressed by index. Each
//! component guards its liveness flag and edge map with its own mutex, while
//! edge endpoints and absorber links are atomics so that a worker can resolve
//! a neighbour without taking the neighbour's lock.

mod builder;
mod component;
mod edge;
mod links;

use std::fmt;

use crate::error::{ContractionError, Result};

pub use self::builder::GraphBuilder;
pub(crate) use self::component::{CheapestEdge, Component, ComponentState};
pub(crate) use self::edge::Edge;
pub(crate) use self::links::AbsorberLinks;

/// Stable identity of a component in the contraction arena.
///
/// Components are created once per input vertex, so a component id equals
/// the index of the vertex it started from. Merges reuse the surviving
/// component and never allocate new ids.
///
/// # Examples
/// ```
/// use boruvka_core::ComponentId;
///
/// let id = ComponentId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Wraps a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct EdgeId(usize);

impl EdgeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// A weighted undirected graph loaded into the contraction arena.
///
/// Build one with [`GraphBuilder`]. A graph is consumed by
/// [`crate::ContractionEngine::run`]; it cannot be edited once a run starts.
#[derive(Debug)]
pub struct Graph {
    components: Vec<Component>,
    edges: Vec<Edge>,
    links: AbsorberLinks,
}

impl Graph {
    pub(crate) fn from_parts(components: Vec<Component>, edges: Vec<Edge>) -> Self {
        let links = AbsorberLinks::new(components.len());
        Self {
            components,
            edges,
            links,
        }
    }

    /// Returns the number of input vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.components.len() }

    /// Returns the number of retained input edges (self-edges are dropped at
    /// load time).
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    pub(crate) fn components(&self) -> &[Component] {
        &self.components
    }

    pub(crate) fn component(&self, id: ComponentId) -> Result<&Component> {
        self.components.get(id.get()).ok_or(ContractionError::invariant(
            "component id must be within the arena",
            id,
        ))
    }

    pub(crate) fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.get()]
    }

    pub(crate) fn edge_records(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn links(&self) -> &AbsorberLinks {
        &self.links
    }

    /// Resolves the live component on the far side of `edge` as seen from
    /// `near`, rewriting the stored endpoint when it lags behind a merge.
    pub(crate) fn far_endpoint(&self, near: ComponentId, edge: EdgeId) -> Result<ComponentId> {
        let record = self.edge(edge);
        let far = record.far_endpoint(near).ok_or(ContractionError::invariant(
            "edge must reference the component that owns it",
            near,
        ))?;
        let current = self.links.resolve(far);
        if current != far {
            record.replace_endpoint(far, current);
        }
        Ok(current)
    }
}
