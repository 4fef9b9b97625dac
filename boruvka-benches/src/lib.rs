//! Benchmark support crate for boruvka.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! contraction benchmarks.

pub mod error;
pub mod params;
pub mod source;
