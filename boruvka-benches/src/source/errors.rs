//! Error types for synthetic graph generation.

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested grid had a zero dimension.
    #[error("grid dimensions must be greater than zero (got {rows}x{columns})")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// A tied weight profile requested no distinct weights.
    #[error("tied weight profile needs at least one distinct weight")]
    ZeroDistinctWeights,
    /// The requested edge count overflowed `usize`.
    #[error("requested edge count overflows usize")]
    Overflow,
}
