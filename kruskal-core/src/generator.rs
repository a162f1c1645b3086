//! Random complete graphs for benchmarks and experiments.
//!
//! Every unordered vertex pair `i < j` receives exactly one edge whose weight
//! is drawn uniformly from an inclusive range.

use std::ops::RangeInclusive;

use rand::{
    SeedableRng,
    distributions::{Distribution, Uniform, uniform::SampleUniform},
    rngs::SmallRng,
};
use thiserror::Error;
use tracing::instrument;

use crate::{Edge, Weight, error::define_error_codes};

/// Errors raised while generating a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The weight range is empty, has a non-finite bound, or is wider than
    /// the weight type can represent.
    #[error("weight range must be non-empty with finite bounds and width")]
    InvalidWeightRange,
    /// A complete graph on this many vertices has more edges than can be
    /// counted or allocated.
    #[error("a complete graph on {node_count} vertices has too many edges")]
    TooManyEdges {
        /// Requested vertex count.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The weight range cannot be sampled.
        InvalidWeightRange => InvalidWeightRange => "GENERATOR_INVALID_WEIGHT_RANGE",
        /// The edge list cannot be counted or allocated.
        TooManyEdges => TooManyEdges { .. } => "GENERATOR_TOO_MANY_EDGES",
    }
}

/// Number of edges in a complete graph on `node_count` vertices.
///
/// # Errors
/// Returns [`GeneratorError::TooManyEdges`] when `n(n-1)/2` overflows.
///
/// # Examples
/// ```
/// use kruskal_core::generator::complete_edge_count;
///
/// assert_eq!(complete_edge_count(5)?, 10);
/// assert_eq!(complete_edge_count(1)?, 0);
/// # Ok::<(), kruskal_core::generator::GeneratorError>(())
/// ```
pub fn complete_edge_count(node_count: usize) -> Result<usize, GeneratorError> {
    // One of n and n-1 is even, so halve that factor first.
    let (even, other) = if node_count % 2 == 0 {
        (node_count, node_count.saturating_sub(1))
    } else {
        (node_count.saturating_sub(1), node_count)
    };
    (even / 2)
        .checked_mul(other)
        .ok_or(GeneratorError::TooManyEdges { node_count })
}

/// Generates the complete graph on `node_count` vertices.
///
/// Edges are emitted in lexicographic `(i, j)` order with `i < j`.
///
/// # Errors
/// Returns [`GeneratorError::InvalidWeightRange`] when `weights` is empty,
/// has a non-finite bound or a non-finite width, and
/// [`GeneratorError::TooManyEdges`] when the edge list cannot be counted or
/// allocated.
#[instrument(level = "debug", skip(weights, rng))]
pub fn complete_graph<W, R>(
    node_count: usize,
    weights: RangeInclusive<W>,
    rng: &mut R,
) -> Result<Vec<Edge<W>>, GeneratorError>
where
    W: Weight + SampleUniform,
    R: rand::Rng + ?Sized,
{
    let (low, high) = weights.into_inner();
    if !low.is_valid()
        || !high.is_valid()
        || low.weight_cmp(&high).is_gt()
        || !low.has_finite_span(high)
    {
        return Err(GeneratorError::InvalidWeightRange);
    }

    let sampler = Uniform::new_inclusive(low, high);
    let mut edges = Vec::new();
    edges
        .try_reserve_exact(complete_edge_count(node_count)?)
        .map_err(|_| GeneratorError::TooManyEdges { node_count })?;
    for source in 0..node_count {
        for target in source + 1..node_count {
            edges.push(Edge::new(sampler.sample(rng), source, target));
        }
    }
    Ok(edges)
}

/// Generates a complete graph from a `SmallRng` seeded with `seed`.
///
/// The same seed, vertex count and range always yield the same edges.
///
/// # Errors
/// Same conditions as [`complete_graph`].
///
/// # Examples
/// ```
/// use kruskal_core::generator::seeded_complete_graph;
///
/// let edges = seeded_complete_graph(4, 1_u32..=100, 7)?;
/// assert_eq!(edges.len(), 6);
/// assert!(edges.iter().all(|edge| (1..=100).contains(&edge.weight())));
/// # Ok::<(), kruskal_core::generator::GeneratorError>(())
/// ```
pub fn seeded_complete_graph<W>(
    node_count: usize,
    weights: RangeInclusive<W>,
    seed: u64,
) -> Result<Vec<Edge<W>>, GeneratorError>
where
    W: Weight + SampleUniform,
{
    let mut rng = SmallRng::seed_from_u64(seed);
    complete_graph(node_count, weights, &mut rng)
}
