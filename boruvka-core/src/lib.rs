//! Boruvka core library.
//!
//! Loads a weighted undirected graph into a lock-per-component arena and
//! contracts it into its minimum spanning forest with a pool of workers.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod contraction;
mod error;
mod forest;
mod graph;

#[cfg(test)]
mod test_utils;

pub use crate::{
    contraction::{
        BackoffPolicy, ContractionBuilder, ContractionEngine, ContractionOutcome,
        ContractionStats, WorkerStats, contract,
    },
    error::{ContractionError, ContractionErrorCode, GraphError, GraphErrorCode, Result},
    forest::{ForestComponent, MinimumSpanningForest, MstEdge},
    graph::{ComponentId, Graph, GraphBuilder},
};
