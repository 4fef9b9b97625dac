//! Error types for the Boruvka core library.
//!
//! Defines the error enums exposed by the public API together with their
//! stable machine-readable codes.

use std::fmt;

use thiserror::Error;

use crate::graph::ComponentId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while loading an input graph into the contraction arena.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The caller requested a graph without any vertices.
    #[error("cannot contract an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The invalid vertex id referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({source_vertex}, {target_vertex}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as provided by the caller.
        source_vertex: usize,
        /// Second endpoint as provided by the caller.
        target_vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The caller requested a graph without any vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a vertex id that is not present in the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Errors returned while configuring or running a contraction.
///
/// Lock contention is never reported here: a failed try-lock is retried by
/// the worker protocol. Only configuration problems, poisoned locks and
/// broken invariants surface to the caller.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ContractionError {
    /// The engine was configured without any worker threads.
    #[error("worker count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// The worker thread pool could not be created.
    #[error("failed to build the worker pool: {reason}")]
    ThreadPool {
        /// Description reported by the pool builder.
        reason: String,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
    /// The locking discipline was broken; the run is abandoned.
    #[error("contraction invariant violated: {invariant} (component {component})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The component observed in the inconsistent state.
        component: ComponentId,
    },
    /// The input graph is not connected, so no spanning tree exists.
    #[error("graph is disconnected: contraction left {component_count} components")]
    Disconnected {
        /// Number of components remaining after contraction.
        component_count: usize,
    },
    /// The input graph could not be loaded.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`ContractionError`] variants.
    enum ContractionErrorCode for ContractionError {
        /// The engine was configured without any worker threads.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "CONTRACTION_INVALID_WORKER_COUNT",
        /// The worker thread pool could not be created.
        ThreadPool => ThreadPool { .. } => "CONTRACTION_THREAD_POOL",
        /// A synchronisation primitive became poisoned after a panic.
        LockPoisoned => LockPoisoned { .. } => "CONTRACTION_LOCK_POISONED",
        /// The locking discipline was broken.
        InvariantViolation => InvariantViolation { .. } => "CONTRACTION_INVARIANT_VIOLATION",
        /// The input graph is not connected.
        Disconnected => Disconnected { .. } => "CONTRACTION_DISCONNECTED",
        /// The input graph could not be loaded.
        GraphFailure => Graph(..) => "CONTRACTION_GRAPH_FAILURE",
    }
}

impl ContractionError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated while
    /// loading the graph.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) const fn invariant(invariant: &'static str, component: ComponentId) -> Self {
        Self::InvariantViolation {
            invariant,
            component,
        }
    }
}

/// Convenient alias for results returned by the contraction API.
pub type Result<T> = core::result::Result<T, ContractionError>;
