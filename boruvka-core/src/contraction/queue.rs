//! Shared worklist of components awaiting a contraction attempt.
//!
//! The queue tracks outstanding work (components that are queued or held by a
//! worker) so that an empty queue can be told apart from a finished run. A
//! worker popping from an empty queue waits while other workers still hold
//! components they may requeue; once outstanding work reaches zero, or the
//! queue is closed, every waiting worker is released.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::error::{ContractionError, Result};
use crate::graph::ComponentId;

#[derive(Debug)]
struct QueueState {
    items: VecDeque<ComponentId>,
    queued: Vec<bool>,
    outstanding: usize,
    closed: bool,
}

#[derive(Debug)]
pub(crate) struct WorkQueue {
    state: Mutex<QueueState>,
    ready: Condvar,
}

impl WorkQueue {
    /// Creates a queue holding every component id in `0..component_count`.
    pub(crate) fn seeded(component_count: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: (0..component_count).map(ComponentId::new).collect(),
                queued: vec![true; component_count],
                outstanding: component_count,
                closed: false,
            }),
            ready: Condvar::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, QueueState>> {
        self.state
            .lock()
            .map_err(|_| ContractionError::LockPoisoned {
                resource: "work queue",
            })
    }

    /// Takes the next component, waiting while the queue is empty but other
    /// workers still hold components.
    ///
    /// Returns `Ok(None)` once the queue is closed or no work is outstanding.
    /// The popped component stays outstanding until it is requeued or
    /// retired.
    pub(crate) fn pop(&self) -> Result<Option<ComponentId>> {
        let mut state = self.lock()?;
        loop {
            if state.closed {
                return Ok(None);
            }
            if let Some(id) = state.items.pop_front() {
                state.queued[id.get()] = false;
                return Ok(Some(id));
            }
            if state.outstanding == 0 {
                return Ok(None);
            }
            state = self
                .ready
                .wait(state)
                .map_err(|_| ContractionError::LockPoisoned {
                    resource: "work queue",
                })?;
        }
    }

    /// Returns a popped component to the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`ContractionError::InvariantViolation`] when `id` is already
    /// queued.
    pub(crate) fn requeue(&self, id: ComponentId) -> Result<()> {
        let mut state = self.lock()?;
        if state.closed {
            return Ok(());
        }
        let queued = state
            .queued
            .get_mut(id.get())
            .ok_or(ContractionError::invariant(
                "component id must be within the arena",
                id,
            ))?;
        if *queued {
            return Err(ContractionError::invariant(
                "a component is queued at most once at a time",
                id,
            ));
        }
        *queued = true;
        state.items.push_back(id);
        drop(state);
        self.ready.notify_one();
        Ok(())
    }

    /// Drops a popped component from the outstanding count.
    pub(crate) fn retire(&self, id: ComponentId) -> Result<()> {
        let mut state = self.lock()?;
        state.outstanding = state
            .outstanding
            .checked_sub(1)
            .ok_or(ContractionError::invariant(
                "only outstanding components can be retired",
                id,
            ))?;
        let drained = state.outstanding == 0;
        drop(state);
        if drained {
            self.ready.notify_all();
        }
        Ok(())
    }

    /// Releases every waiting worker and makes future pops return `None`.
    ///
    /// Closing never fails, so it is safe to call while unwinding.
    pub(crate) fn close(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.closed = true;
        drop(state);
        self.ready.notify_all();
    }

    #[cfg(test)]
    pub(crate) fn outstanding(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .outstanding
    }
}

/// Closes the queue if the owning worker unwinds, so siblings blocked in
/// [`WorkQueue::pop`] are released.
pub(crate) struct CloseOnUnwind<'a>(pub(crate) &'a WorkQueue);

impl Drop for CloseOnUnwind<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.close();
        }
    }
}
