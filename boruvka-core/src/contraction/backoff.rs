//! Randomised exponential backoff applied after a failed try-lock.

use std::hint;
use std::thread;

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Bounds for the spin window used after lock contention.
///
/// After each failed try-lock a worker spins for a random number of
/// iterations drawn from `0..=window`. The window starts at `initial_spins`
/// and doubles up to `max_spins`; once saturated the worker also yields its
/// thread. A successful merge resets the window.
///
/// # Examples
/// ```
/// use boruvka_core::BackoffPolicy;
///
/// let policy = BackoffPolicy::new(8, 2);
/// assert_eq!(policy.initial_spins(), 8);
/// assert_eq!(policy.max_spins(), 8, "max is clamped to initial");
/// assert!(BackoffPolicy::disabled().is_disabled());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BackoffPolicy {
    initial_spins: u32,
    max_spins: u32,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_spins: 4,
            max_spins: 1024,
        }
    }
}

impl BackoffPolicy {
    /// Creates a policy, raising `max_spins` to `initial_spins` when smaller.
    #[must_use]
    pub const fn new(initial_spins: u32, max_spins: u32) -> Self {
        let max_spins = if max_spins < initial_spins {
            initial_spins
        } else {
            max_spins
        };
        Self {
            initial_spins,
            max_spins,
        }
    }

    /// A policy that retries immediately without spinning or yielding.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            initial_spins: 0,
            max_spins: 0,
        }
    }

    /// Returns the starting spin window.
    #[must_use]
    #[rustfmt::skip]
    pub const fn initial_spins(&self) -> u32 { self.initial_spins }

    /// Returns the largest spin window.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_spins(&self) -> u32 { self.max_spins }

    /// Returns `true` when the policy never waits.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.max_spins == 0
    }
}

#[derive(Debug)]
pub(crate) struct Backoff {
    policy: BackoffPolicy,
    window: u32,
    rng: SmallRng,
}

impl Backoff {
    pub(crate) fn new(policy: BackoffPolicy, seed: u64, worker: usize) -> Self {
        let worker = u64::try_from(worker).unwrap_or(u64::MAX);
        Self {
            policy,
            window: policy.initial_spins,
            rng: SmallRng::seed_from_u64(seed ^ worker.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        }
    }

    /// Waits after a failed lock attempt and widens the window.
    pub(crate) fn snooze(&mut self) {
        if self.policy.is_disabled() {
            return;
        }
        let spins = self.rng.gen_range(0..=self.window);
        for _ in 0..spins {
            hint::spin_loop();
        }
        if self.window >= self.policy.max_spins {
            thread::yield_now();
        } else {
            self.window = self
                .window
                .saturating_mul(2)
                .clamp(1, self.policy.max_spins);
        }
    }

    pub(crate) const fn reset(&mut self) {
        self.window = self.policy.initial_spins;
    }

    #[cfg(test)]
    const fn window(&self) -> u32 {
        self.window
    }
}
