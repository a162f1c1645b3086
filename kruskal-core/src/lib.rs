//! Kruskal minimum spanning trees over a rank-balanced union-find.
//!
//! [`kruskal_mst`] sorts edges by weight and greedily keeps every edge that
//! joins two components of a [`UnionFind`]. Connected inputs produce a
//! minimum spanning tree; disconnected inputs produce a minimum spanning
//! forest with one tree per component. Weights may be any primitive integer
//! or finite float, see [`Weight`].
//!
//! With the default `generator` feature, [`generator`] builds random complete
//! graphs for benchmarks and command-line experiments. The `metrics` feature
//! emits `kruskal_runs_total`, `kruskal_edges_examined_total` and
//! `kruskal_edges_accepted_total` counters through the `metrics` facade.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
pub mod generator;
mod mst;
mod union_find;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{MstError, MstErrorCode},
    mst::{Edge, MinimumSpanningForest, kruskal_mst, kruskal_mst_in_place},
    union_find::UnionFind,
    weight::Weight,
};
