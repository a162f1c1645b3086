//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are ordered by weight with a stable sort, then accepted greedily
//! whenever they join two different components of a [`UnionFind`]. The scan
//! stops as soon as `n - 1` edges are accepted. A disconnected input simply
//! runs out of edges first and yields a minimum spanning forest.

use tracing::{debug, instrument, warn};

use crate::{MstError, UnionFind, Weight};

/// An undirected weighted edge `(weight, a, b)`.
///
/// Endpoints are kept exactly as supplied; `(w, u, v)` and `(w, v, u)`
/// describe the same edge for MST purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    weight: W,
    source: usize,
    target: usize,
}

impl<W> Edge<W> {
    /// Creates an edge between `source` and `target` with `weight`.
    #[must_use]
    pub const fn new(weight: W, source: usize, target: usize) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }
}

impl<W> From<(W, usize, usize)> for Edge<W> {
    fn from((weight, source, target): (W, usize, usize)) -> Self {
        Self::new(weight, source, target)
    }
}

impl<W> From<Edge<W>> for (W, usize, usize) {
    fn from(edge: Edge<W>) -> Self {
        (edge.weight, edge.source, edge.target)
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    node_count: usize,
    component_count: usize,
    edges_examined: usize,
}

impl<W: Weight> MinimumSpanningForest<W> {
    fn empty(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            total_weight: W::zero(),
            node_count,
            component_count: node_count,
            edges_examined: 0,
        }
    }

    /// Returns the accepted edges in acceptance order (non-decreasing weight).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W { self.total_weight }

    /// Returns the vertex count the forest was computed for.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns how many sorted edges were inspected before the scan stopped.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_examined(&self) -> usize { self.edges_examined }

    /// Returns `true` when the forest is a single spanning tree.
    ///
    /// Graphs with zero or one vertex are trivially spanned.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// Splits the forest into its accepted edges and total weight.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_weight)
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// The caller's slice is left untouched; a list of references is sorted
/// instead. Equal weights, including `-0.0` and `0.0`, keep their input
/// order. For `node_count <= 1` the result is empty whatever `edges`
/// contains.
///
/// # Errors
///
/// Returns an error when:
/// - an edge endpoint is `>= node_count`
/// - an edge weight is NaN or infinite
/// - the total weight of the accepted edges does not fit `W`
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, kruskal_mst};
///
/// let edges = [Edge::new(3, 0, 2), Edge::new(1, 0, 1), Edge::new(2, 1, 2)];
/// let forest = kruskal_mst(3, &edges)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert_eq!(forest.edges(), &[Edge::new(1, 0, 1), Edge::new(2, 1, 2)]);
/// assert!(forest.is_spanning_tree());
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[instrument(level = "debug", skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal_mst<W: Weight>(
    node_count: usize,
    edges: &[Edge<W>],
) -> Result<MinimumSpanningForest<W>, MstError> {
    if node_count <= 1 {
        return Ok(MinimumSpanningForest::empty(node_count));
    }

    validate_edges(node_count, edges)?;

    let mut order: Vec<(usize, &Edge<W>)> = edges.iter().enumerate().collect();
    order.sort_by(|(_, left), (_, right)| left.weight.weight_cmp(&right.weight));
    grow_forest(node_count, order)
}

/// Computes a minimum spanning forest, sorting `edges` in place.
///
/// Behaves like [`kruskal_mst`] but reorders the caller's slice by weight
/// (stably) instead of allocating a separate ordering. The slice is left
/// unsorted when `node_count <= 1` or validation fails.
///
/// # Errors
///
/// Same conditions as [`kruskal_mst`]. A [`MstError::WeightOverflow`] index
/// refers to the sorted slice.
#[instrument(level = "debug", skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal_mst_in_place<W: Weight>(
    node_count: usize,
    edges: &mut [Edge<W>],
) -> Result<MinimumSpanningForest<W>, MstError> {
    if node_count <= 1 {
        return Ok(MinimumSpanningForest::empty(node_count));
    }

    validate_edges(node_count, edges)?;

    edges.sort_by(|left, right| left.weight.weight_cmp(&right.weight));
    grow_forest(node_count, edges.iter().enumerate())
}

fn validate_edges<W: Weight>(node_count: usize, edges: &[Edge<W>]) -> Result<(), MstError> {
    for (edge_index, edge) in edges.iter().enumerate() {
        if let Some(node) = [edge.source, edge.target]
            .into_iter()
            .find(|&node| node >= node_count)
        {
            return Err(rejected(MstError::InvalidEdgeEndpoint {
                edge_index,
                node,
                node_count,
            }));
        }
        if !edge.weight.is_valid() {
            return Err(rejected(MstError::InvalidWeight {
                edge_index,
                left: edge.source,
                right: edge.target,
            }));
        }
    }
    Ok(())
}

fn rejected(error: MstError) -> MstError {
    warn!(code = %error.code(), error = %error, "rejecting edge list");
    error
}

/// Scans `sorted` in order, keeping every edge that joins two components.
///
/// Each edge carries its index for error reporting. Requires
/// `node_count >= 2` and endpoints already validated.
fn grow_forest<'a, W: Weight + 'a>(
    node_count: usize,
    sorted: impl IntoIterator<Item = (usize, &'a Edge<W>)>,
) -> Result<MinimumSpanningForest<W>, MstError> {
    let tree_size = node_count - 1;
    let mut components = UnionFind::new(node_count);
    let mut accepted = Vec::with_capacity(tree_size);
    let mut total_weight = W::zero();
    let mut edges_examined = 0;

    for (edge_index, edge) in sorted {
        edges_examined += 1;
        if components.union(edge.source, edge.target) {
            total_weight = total_weight
                .checked_add(edge.weight)
                .ok_or_else(|| rejected(MstError::WeightOverflow { edge_index }))?;
            accepted.push(*edge);
            if accepted.len() == tree_size {
                break;
            }
        }
    }

    let forest = MinimumSpanningForest {
        edges: accepted,
        total_weight,
        node_count,
        component_count: components.set_count(),
        edges_examined,
    };
    debug!(
        accepted = forest.edges.len(),
        examined = forest.edges_examined,
        components = forest.component_count,
        total_weight = ?forest.total_weight,
        "minimum spanning forest complete"
    );
    record_metrics(&forest);
    Ok(forest)
}

#[cfg(feature = "metrics")]
fn record_metrics<W>(forest: &MinimumSpanningForest<W>) {
    let as_count = |value: usize| u64::try_from(value).unwrap_or(u64::MAX);
    metrics::counter!("kruskal_runs_total").increment(1);
    metrics::counter!("kruskal_edges_examined_total").increment(as_count(forest.edges_examined));
    metrics::counter!("kruskal_edges_accepted_total").increment(as_count(forest.edges.len()));
}

#[cfg(not(feature = "metrics"))]
const fn record_metrics<W>(_forest: &MinimumSpanningForest<W>) {}
