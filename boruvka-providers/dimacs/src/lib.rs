//! Graph providers for DIMACS shortest-path files and plain edge lists.
//!
//! Both formats load into a named [`GraphSource`] which hands its vertices and
//! edges to a [`boruvka_core::GraphBuilder`].

mod dimacs;
mod edge_list;
mod errors;
mod parse;
mod source;

pub use errors::GraphSourceError;
pub use source::GraphSource;
