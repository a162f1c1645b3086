//! Graph generators for MST property tests.
//!
//! Fixtures are built from a seeded `SmallRng` so that proptest only has to
//! shrink the `(shape, seed)` pair, and rstest cases can pin exact graphs.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphShape, MstFixture, SmallGraph};

const MIN_NODES: usize = 8;
const MAX_NODES: usize = 64;
/// Dense graphs stay smaller to keep the edge count near 500.
const DENSE_MAX_NODES: usize = 32;
const WEIGHT_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Fixtures over every [`GraphShape`], biased towards `ManyIdentical`.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (graph_shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

fn graph_shape_strategy() -> impl Strategy<Value = GraphShape> {
    prop_oneof![
        2 => Just(GraphShape::Unique),
        3 => Just(GraphShape::ManyIdentical),
        2 => Just(GraphShape::Sparse),
        2 => Just(GraphShape::Dense),
        2 => Just(GraphShape::Disconnected),
        2 => Just(GraphShape::Multigraph),
    ]
}

/// Small graphs with signed weights, self-loops and parallel edges, sized for
/// brute-force enumeration.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = SmallGraph> {
    (1_usize..=6).prop_flat_map(|node_count| {
        prop::collection::vec((-5_i64..=20, 0..node_count, 0..node_count), 0..=12).prop_map(
            move |raw| SmallGraph {
                node_count,
                edges: raw.into_iter().map(Edge::from).collect(),
            },
        )
    })
}

/// Builds the fixture for `shape` from `rng`.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let (node_count, edges) = match shape {
        GraphShape::Unique => unique_weights(rng),
        GraphShape::ManyIdentical => identical_weights(rng),
        GraphShape::Sparse => sparse(rng),
        GraphShape::Dense => {
            let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            let probability = rng.gen_range(0.7..=0.95);
            let edges = random_pairs(rng, 0..node_count, probability, |r| r.gen_range(WEIGHT_RANGE));
            (node_count, edges)
        }
        GraphShape::Disconnected => disconnected(rng),
        GraphShape::Multigraph => multigraph(rng),
    };
    MstFixture {
        node_count,
        edges,
        shape,
    }
}

/// Includes each pair `i < j` drawn from `nodes` with `probability`.
fn random_pairs(
    rng: &mut SmallRng,
    nodes: std::ops::Range<usize>,
    probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> Vec<Edge<u32>> {
    let mut edges = Vec::new();
    for source in nodes.clone() {
        for target in source + 1..nodes.end {
            if rng.gen_bool(probability) {
                let w = weight(&mut *rng);
                edges.push(Edge::new(w, source, target));
            }
        }
    }
    edges
}

fn unique_weights(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let probability = rng.gen_range(0.2..=0.6);
    let mut edges = random_pairs(rng, 0..node_count, probability, |_| 0);
    let mut pool: Vec<u32> = (1..).take(edges.len()).collect();
    pool.shuffle(rng);
    for (edge, weight) in edges.iter_mut().zip(pool) {
        *edge = Edge::new(weight, edge.source(), edge.target());
    }
    (node_count, edges)
}

fn identical_weights(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let probability = rng.gen_range(0.3..=0.7);
    let pool: Vec<u32> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let edges = random_pairs(rng, 0..node_count, probability, |r| {
        pool.choose(r).copied().unwrap_or(1)
    });
    (node_count, edges)
}

fn sparse(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<Edge<u32>> = order
        .windows(2)
        .map(|pair| Edge::new(rng.gen_range(WEIGHT_RANGE), pair[0], pair[1]))
        .collect();

    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source != target {
            edges.push(Edge::new(rng.gen_range(WEIGHT_RANGE), source, target));
        }
    }
    (node_count, edges)
}

fn disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;

    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        let mut component =
            random_pairs(rng, offset..offset + size, probability, |r| r.gen_range(WEIGHT_RANGE));
        if component.is_empty() {
            component.push(Edge::new(rng.gen_range(WEIGHT_RANGE), offset, offset + 1));
        }
        edges.append(&mut component);
        offset += size;
    }
    (offset, edges)
}

fn multigraph(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_count = rng.gen_range(node_count..=node_count * 3);
    let edges = (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..node_count);
            // One edge in eight is a self-loop.
            let target = if rng.gen_ratio(1, 8) {
                source
            } else {
                rng.gen_range(0..node_count)
            };
            Edge::new(rng.gen_range(0..=5), source, target)
        })
        .collect();
    (node_count, edges)
}
