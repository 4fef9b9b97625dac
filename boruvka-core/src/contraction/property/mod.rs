//! Property-based tests for the concurrent contraction engine.
//!
//! Checks the engine against a sequential Kruskal oracle, validates the
//! forest's structural invariants (acyclicity, `n - c` edges, vertex
//! partition) and runs each input repeatedly across worker counts to catch
//! scheduling-dependent results.

mod concurrency;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod tests;
mod types;
