//! Benchmark setup error type.
//!
//! Aggregates failures from graph generation and engine setup so benchmark
//! setup functions can propagate them with `?` instead of `.expect()`.

use boruvka_core::{ContractionError, GraphError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated graph could not be loaded.
    #[error("graph loading failed: {0}")]
    Graph(#[from] GraphError),
    /// Engine construction or a warm-up run failed.
    #[error("contraction failed: {0}")]
    Contraction(#[from] ContractionError),
}
