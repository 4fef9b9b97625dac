//! Mergeable super-nodes and their lock-guarded state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::mem;
use std::sync::{Mutex, MutexGuard, TryLockError};

use crate::error::{ContractionError, Result};

use super::{ComponentId, Edge, EdgeId, Graph};

/// A super-node in the contraction arena.
///
/// The mutex guards the liveness flag and the edge map together; neither is
/// read or written without it.
#[derive(Debug)]
pub(crate) struct Component {
    id: ComponentId,
    state: Mutex<ComponentState>,
}

impl Component {
    pub(crate) fn new(id: ComponentId, edges: HashMap<ComponentId, EdgeId>) -> Self {
        Self {
            id,
            state: Mutex::new(ComponentState {
                dead: false,
                edges,
                vertices: vec![id.get()],
                tree: Vec::new(),
            }),
        }
    }

    pub(crate) const fn id(&self) -> ComponentId {
        self.id
    }

    /// Attempts to take the component lock without blocking.
    ///
    /// Returns `Ok(None)` when another worker holds the lock.
    pub(crate) fn try_lock(&self) -> Result<Option<MutexGuard<'_, ComponentState>>> {
        match self.state.try_lock() {
            Ok(guard) => Ok(Some(guard)),
            Err(TryLockError::WouldBlock) => Ok(None),
            Err(TryLockError::Poisoned(_)) => Err(ContractionError::LockPoisoned {
                resource: "component state",
            }),
        }
    }

    /// Takes the component lock, blocking if needed.
    ///
    /// Only used once every worker has exited, when nothing can contend.
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, ComponentState>> {
        self.state
            .lock()
            .map_err(|_| ContractionError::LockPoisoned {
                resource: "component state",
            })
    }
}

/// The cheapest edge leaving a component, with its resolved neighbour.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CheapestEdge {
    pub(crate) edge: EdgeId,
    pub(crate) neighbour: ComponentId,
}

#[derive(Debug)]
pub(crate) struct ComponentState {
    dead: bool,
    /// Cheapest known edge per neighbour. Keys may lag behind merges that
    /// happened elsewhere; [`Self::cheapest_edge`] re-resolves them.
    edges: HashMap<ComponentId, EdgeId>,
    vertices: Vec<usize>,
    tree: Vec<EdgeId>,
}

impl ComponentState {
    pub(crate) const fn is_dead(&self) -> bool {
        self.dead
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub(crate) fn tree_edges(&self) -> &[EdgeId] {
        &self.tree
    }

    #[cfg(test)]
    pub(crate) fn neighbour_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the minimum edge to another live component, or `None` when no
    /// such edge remains.
    ///
    /// Stale neighbour keys are resolved through the absorber links first:
    /// self-loops are dropped and parallel edges collapse to their minimum.
    pub(crate) fn cheapest_edge(
        &mut self,
        owner: ComponentId,
        graph: &Graph,
    ) -> Result<Option<CheapestEdge>> {
        self.refresh(owner, graph)?;
        Ok(self
            .edges
            .iter()
            .map(|(&neighbour, &edge)| CheapestEdge { edge, neighbour })
            .min_by(|left, right| {
                graph
                    .edge(left.edge)
                    .key()
                    .cmp(graph.edge(right.edge).key())
            }))
    }

    fn refresh(&mut self, owner: ComponentId, graph: &Graph) -> Result<()> {
        let mut entries = Vec::with_capacity(self.edges.len());
        let mut stale = false;
        for (&key, &edge) in &self.edges {
            let neighbour = graph.far_endpoint(owner, edge)?;
            stale |= neighbour != key;
            entries.push((neighbour, edge));
        }
        if !stale {
            return Ok(());
        }

        self.edges.clear();
        for (neighbour, edge) in entries {
            if neighbour != owner {
                insert_cheapest(&mut self.edges, neighbour, edge, graph.edge_records());
            }
        }
        Ok(())
    }

    /// Absorbs `other` into this component along `connecting`.
    ///
    /// Both locks must be held by the caller. Every edge leaving `other` is
    /// rewritten to reference `owner` before `other` is linked and marked
    /// dead; edges that become self-loops are dropped and parallel edges
    /// collapse to their minimum.
    pub(crate) fn merge_into(
        &mut self,
        owner: ComponentId,
        other: &mut Self,
        other_id: ComponentId,
        connecting: EdgeId,
        graph: &Graph,
    ) -> Result<()> {
        if self.dead {
            return Err(ContractionError::invariant(
                "a dead component cannot absorb another",
                owner,
            ));
        }
        if other.dead {
            return Err(ContractionError::invariant(
                "a component must be absorbed at most once",
                other_id,
            ));
        }

        let absorbed = mem::take(&mut other.edges);
        for &edge in absorbed.values() {
            graph.edge(edge).replace_endpoint(other_id, owner);
        }
        graph.links().link(other_id, owner);
        other.dead = true;

        self.edges.remove(&other_id);
        for edge in absorbed.into_values() {
            let neighbour = graph.far_endpoint(owner, edge)?;
            if neighbour != owner {
                insert_cheapest(&mut self.edges, neighbour, edge, graph.edge_records());
            }
        }

        append_smaller(&mut self.vertices, &mut other.vertices);
        append_smaller(&mut self.tree, &mut other.tree);
        self.tree.push(connecting);
        Ok(())
    }
}

/// Inserts `edge` under `neighbour`, keeping the cheaper of two parallel
/// edges.
pub(super) fn insert_cheapest(
    edges: &mut HashMap<ComponentId, EdgeId>,
    neighbour: ComponentId,
    edge: EdgeId,
    arena: &[Edge],
) {
    match edges.entry(neighbour) {
        Entry::Vacant(slot) => {
            slot.insert(edge);
        }
        Entry::Occupied(mut slot) => {
            if arena[edge.get()].key() < arena[slot.get().get()].key() {
                slot.insert(edge);
            }
        }
    }
}

fn append_smaller<T>(target: &mut Vec<T>, source: &mut Vec<T>) {
    if source.len() > target.len() {
        mem::swap(target, source);
    }
    target.append(source);
}
