//! Write-once holder for the component that survives contraction.

use std::sync::OnceLock;

use crate::error::{ContractionError, Result};
use crate::graph::ComponentId;

#[derive(Debug, Default)]
pub(crate) struct SolutionSlot {
    root: OnceLock<ComponentId>,
}

impl SolutionSlot {
    pub(crate) const fn new() -> Self {
        Self {
            root: OnceLock::new(),
        }
    }

    /// Publishes `id` as the surviving component.
    ///
    /// Returns `Ok(true)` for the first publication and `Ok(false)` when the
    /// same component was already published.
    ///
    /// # Errors
    ///
    /// Returns [`ContractionError::InvariantViolation`] when a different
    /// component was published first.
    pub(crate) fn publish(&self, id: ComponentId) -> Result<bool> {
        let mut won = false;
        let winner = *self.root.get_or_init(|| {
            won = true;
            id
        });
        if winner == id {
            Ok(won)
        } else {
            Err(ContractionError::invariant(
                "only one component may be published as the solution",
                id,
            ))
        }
    }

    #[rustfmt::skip]
    pub(crate) fn get(&self) -> Option<ComponentId> { self.root.get().copied() }

    #[rustfmt::skip]
    pub(crate) fn is_set(&self) -> bool { self.root.get().is_some() }
}
