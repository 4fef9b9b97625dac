//! Edge records shared between the two components they connect.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::forest::MstEdge;

use super::ComponentId;

/// An input edge whose endpoints follow the components that absorb them.
///
/// The weight and original vertex pair never change. Each endpoint slot is
/// rewritten only by the thread holding the lock of the component named in
/// that slot, or lazily by a reader that resolved the slot through the
/// absorber links. Both writers move a slot forward along the same absorber
/// chain, so a compare-exchange is enough to keep them consistent.
#[derive(Debug)]
pub(crate) struct Edge {
    endpoints: [AtomicUsize; 2],
    key: MstEdge,
}

impl Edge {
    pub(crate) fn new(key: MstEdge) -> Self {
        Self {
            endpoints: [
                AtomicUsize::new(key.source()),
                AtomicUsize::new(key.target()),
            ],
            key,
        }
    }

    /// Returns the immutable ordering key (weight, canonical pair, sequence).
    pub(crate) const fn key(&self) -> &MstEdge {
        &self.key
    }

    pub(crate) fn endpoints(&self) -> (ComponentId, ComponentId) {
        let [left, right] = &self.endpoints;
        (
            ComponentId::new(left.load(Ordering::Acquire)),
            ComponentId::new(right.load(Ordering::Acquire)),
        )
    }

    /// Returns the endpoint opposite `near`, or `None` when neither slot
    /// names `near`.
    pub(crate) fn far_endpoint(&self, near: ComponentId) -> Option<ComponentId> {
        let (left, right) = self.endpoints();
        if left == near {
            Some(right)
        } else if right == near {
            Some(left)
        } else {
            None
        }
    }

    /// Rewrites every slot currently naming `from` so it names `to`.
    ///
    /// Returns `true` when at least one slot changed.
    pub(crate) fn replace_endpoint(&self, from: ComponentId, to: ComponentId) -> bool {
        let mut replaced = false;
        for slot in &self.endpoints {
            replaced |= slot
                .compare_exchange(from.get(), to.get(), Ordering::AcqRel, Ordering::Acquire)
                .is_ok();
        }
        replaced
    }
}
