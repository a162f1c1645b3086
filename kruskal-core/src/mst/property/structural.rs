//! Structural invariants of every produced forest.
//!
//! - **Acyclicity**: accepted edges never close a cycle.
//! - **Edge count**: `n - c` edges for `c` input components, so a connected
//!   input yields a spanning tree.
//! - **Weight accounting**: the reported total is the sum of the edges.
//! - **Provenance**: every accepted edge appears in the input, unchanged.
//! - **Ordering**: edges are accepted in non-decreasing weight order.
//! - **Early exit**: a completed tree never examines more than `m` edges,
//!   and a forest examines all of them.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal_mst;

use super::oracle::{input_components, is_acyclic};
use super::types::MstFixture;

/// Runs the structural invariant property for `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal_mst(fixture.node_count, &fixture.edges).map_err(|err| {
        TestCaseError::fail(format!("kruskal_mst failed: {err} ({})", fixture.describe()))
    })?;
    let accepted = forest.edges();
    let fail = |what: String| Err(TestCaseError::fail(format!("{what} ({})", fixture.describe())));

    if !is_acyclic(fixture.node_count, accepted) {
        return fail("accepted edges contain a cycle".to_owned());
    }

    let components = input_components(fixture.node_count, &fixture.edges);
    let expected_edges = fixture.node_count - components;
    if accepted.len() != expected_edges {
        return fail(format!(
            "accepted {} edges, expected n - c = {expected_edges}",
            accepted.len()
        ));
    }
    if forest.component_count() != components {
        return fail(format!(
            "reported {} components, input has {components}",
            forest.component_count()
        ));
    }
    if forest.is_spanning_tree() != (components == 1) {
        return fail("spanning tree flag disagrees with input connectivity".to_owned());
    }

    let sum: u32 = accepted.iter().map(|edge| edge.weight()).sum();
    if forest.total_weight() != sum {
        return fail(format!(
            "total weight {} differs from edge sum {sum}",
            forest.total_weight()
        ));
    }

    if let Some(stray) = accepted.iter().find(|edge| !fixture.edges.contains(edge)) {
        return fail(format!("accepted edge {stray:?} is not in the input"));
    }

    if accepted.windows(2).any(|pair| pair[0].weight() > pair[1].weight()) {
        return fail("edges were not accepted in weight order".to_owned());
    }

    let examined = forest.edges_examined();
    if components > 1 && examined != fixture.edges.len() {
        return fail(format!(
            "forest stopped after {examined} of {} edges",
            fixture.edges.len()
        ));
    }
    if examined > fixture.edges.len() {
        return fail(format!("examined {examined} edges out of {}", fixture.edges.len()));
    }

    Ok(())
}
