//! Named graph loaded from a file, ready to hand to the contraction engine.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use boruvka_core::GraphBuilder;

use crate::errors::GraphSourceError;
use crate::{dimacs, edge_list};

/// An undirected weighted graph read from an external source.
///
/// Edges are `(source, target, weight)` triples over 0-based vertex ids, in
/// file order. Self-edges and parallel edges are kept as read; the contraction
/// loader discards and collapses them.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSource {
    name: String,
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl GraphSource {
    /// Creates a source from in-memory parts.
    ///
    /// # Examples
    /// ```
    /// use boruvka_providers_dimacs::GraphSource;
    ///
    /// let source = GraphSource::new("pair", 2, vec![(0, 1, 3.5)]);
    /// assert_eq!(source.name(), "pair");
    /// assert_eq!(source.edge_count(), 1);
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        vertex_count: usize,
        edges: Vec<(usize, usize, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            edges,
        }
    }

    /// Reads a DIMACS shortest-path file.
    ///
    /// # Errors
    /// Returns [`GraphSourceError`] when the input is unreadable or does not
    /// follow the format.
    ///
    /// # Examples
    /// ```
    /// use boruvka_providers_dimacs::GraphSource;
    ///
    /// let text = "c demo\np sp 3 2\na 1 2 4\na 2 3 1\n";
    /// let source = GraphSource::from_dimacs_reader("demo", text.as_bytes())
    ///     .expect("valid DIMACS input");
    /// assert_eq!(source.vertex_count(), 3);
    /// assert_eq!(source.edges(), &[(0, 1, 4.0), (1, 2, 1.0)]);
    /// ```
    pub fn from_dimacs_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, GraphSourceError> {
        let (vertex_count, edges) = dimacs::read(reader)?;
        Ok(Self::new(name, vertex_count, edges))
    }

    /// Reads a DIMACS shortest-path file from `path`.
    ///
    /// # Errors
    /// Returns [`GraphSourceError::Io`] when the file cannot be opened, and
    /// any error of [`GraphSource::from_dimacs_reader`].
    pub fn from_dimacs_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, GraphSourceError> {
        let file = File::open(path)?;
        Self::from_dimacs_reader(name, BufReader::new(file))
    }

    /// Reads a plain edge list.
    ///
    /// # Errors
    /// Returns [`GraphSourceError`] when the input is unreadable, lacks the
    /// vertex count header or contains a malformed edge.
    ///
    /// # Examples
    /// ```
    /// use boruvka_providers_dimacs::GraphSource;
    ///
    /// let text = "# triangle\n3\n0 1 1.5\n1 2 2\n2 0 0.5\n";
    /// let source = GraphSource::from_edge_list_reader("triangle", text.as_bytes())
    ///     .expect("valid edge list");
    /// assert_eq!(source.vertex_count(), 3);
    /// assert_eq!(source.edge_count(), 3);
    /// ```
    pub fn from_edge_list_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, GraphSourceError> {
        let (vertex_count, edges) = edge_list::read(reader)?;
        Ok(Self::new(name, vertex_count, edges))
    }

    /// Reads a plain edge list from `path`.
    ///
    /// # Errors
    /// Returns [`GraphSourceError::Io`] when the file cannot be opened, and
    /// any error of [`GraphSource::from_edge_list_reader`].
    pub fn from_edge_list_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, GraphSourceError> {
        let file = File::open(path)?;
        Self::from_edge_list_reader(name, BufReader::new(file))
    }

    /// Returns the source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the edges in file order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }

    /// Returns the number of edges read.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Copies the graph into a [`GraphBuilder`].
    ///
    /// # Examples
    /// ```
    /// use boruvka_providers_dimacs::GraphSource;
    ///
    /// let source = GraphSource::new("pair", 2, vec![(0, 1, 3.5)]);
    /// let graph = source.to_builder().build().expect("graph is valid");
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    #[must_use]
    pub fn to_builder(&self) -> GraphBuilder {
        let mut builder = GraphBuilder::new(self.vertex_count);
        builder.extend_edges(self.edges.iter().copied());
        builder
    }

    /// Moves the graph into a [`GraphBuilder`].
    #[must_use]
    pub fn into_builder(self) -> GraphBuilder {
        let mut builder = GraphBuilder::new(self.vertex_count);
        builder.extend_edges(self.edges);
        builder
    }
}
