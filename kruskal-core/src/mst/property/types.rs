//! Fixture types for MST property tests.

use crate::Edge;

/// Shape of a generated graph.
///
/// Each shape stresses a different part of the engine: tie handling, early
/// termination, forest output, or inputs that need no normalisation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Every edge has a distinct weight, so the MST is unique.
    Unique,
    /// Edges draw from a pool of one to three weights.
    ManyIdentical,
    /// A random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Two to five components with no edges between them.
    Disconnected,
    /// Self-loops, parallel edges, reversed endpoints and zero weights.
    Multigraph,
}

/// A generated graph together with the shape that produced it, kept for
/// failure diagnostics.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub node_count: usize,
    /// Generated edges in generation order.
    pub edges: Vec<Edge<u32>>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

impl MstFixture {
    /// Short context string appended to property failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, nodes={}, edges={}",
            self.shape,
            self.node_count,
            self.edges.len()
        )
    }
}

/// A small signed-weight graph that brute force can solve exactly.
#[derive(Clone, Debug)]
pub(super) struct SmallGraph {
    /// Number of vertices, at most six.
    pub node_count: usize,
    /// Edges, at most twelve so that `2^m` subsets stay cheap.
    pub edges: Vec<Edge<i64>>,
}
