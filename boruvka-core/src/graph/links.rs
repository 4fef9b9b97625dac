//! Absorber links used to resolve stale component references.
//!
//! Every component starts linked to itself. When a merge kills a component
//! the absorbing thread links it to the survivor while holding both locks.
//! Links only ever point at a component that was live when the link was
//! written, so following them always ends at a live component (or at one
//! whose merge is still in flight, which the worker protocol detects when it
//! tries the lock). Readers compress paths by halving, as any ancestor on the
//! chain is a valid link target.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::ComponentId;

#[derive(Debug)]
pub(crate) struct AbsorberLinks {
    links: Vec<AtomicUsize>,
}

impl AbsorberLinks {
    pub(crate) fn new(component_count: usize) -> Self {
        let links = (0..component_count).map(AtomicUsize::new).collect();
        Self { links }
    }

    /// Records that `absorbed` now lives inside `absorber`.
    ///
    /// Callers must hold the locks of both components.
    pub(crate) fn link(&self, absorbed: ComponentId, absorber: ComponentId) {
        self.links[absorbed.get()].store(absorber.get(), Ordering::Release);
    }

    pub(crate) fn is_representative(&self, id: ComponentId) -> bool {
        self.links[id.get()].load(Ordering::Acquire) == id.get()
    }

    /// Follows absorber links from `id` to the component currently holding
    /// its vertices.
    pub(crate) fn resolve(&self, id: ComponentId) -> ComponentId {
        let mut current = id.get();
        loop {
            let parent = self.links[current].load(Ordering::Acquire);

            if parent == current {
                return ComponentId::new(current);
            }

            let grandparent = self.links[parent].load(Ordering::Acquire);

            if grandparent != parent {
                self.links[current].store(grandparent, Ordering::Release);
            }

            current = parent;
        }
    }
}
