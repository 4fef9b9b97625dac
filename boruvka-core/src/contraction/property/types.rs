//! Fixture types shared by the contraction property suites.

use test_strategy::Arbitrary;

use crate::{ContractionBuilder, ContractionEngine, Graph, GraphBuilder};

/// Shape of a generated input graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Distinct continuous weights.
    #[weight(2)]
    Unique,
    /// Few distinct weights shared by many edges, stressing tie-breaks.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges, with negative
    /// weights allowed.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph.
    #[weight(2)]
    Dense,
    /// Several islands with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Repeated vertex pairs in both directions plus self-edges.
    #[weight(2)]
    Multigraph,
}

/// A generated input graph in raw triple form.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub shape: GraphShape,
}

impl GraphFixture {
    pub(super) fn graph(&self) -> Graph {
        let mut builder = GraphBuilder::new(self.vertex_count);
        builder.extend_edges(self.edges.iter().copied());
        builder.build().expect("generated fixtures are valid graphs")
    }

    /// Summary appended to failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "shape={:?}, vertices={}, edges={}",
            self.shape,
            self.vertex_count,
            self.edges.len()
        )
    }
}

pub(super) fn engine(workers: usize, seed: u64) -> ContractionEngine {
    ContractionBuilder::new()
        .with_workers(workers)
        .with_seed(seed)
        .with_thread_name_prefix("boruvka-prop")
        .build()
        .expect("property engine must build")
}
