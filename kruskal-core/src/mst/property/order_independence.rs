//! Input order does not change the answer.
//!
//! Shuffled copies of the same edge multiset must produce the same total
//! weight and component count; only the choice among equal-weight edges may
//! differ. The in-place variant must agree exactly with the copying one.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{kruskal_mst, kruskal_mst_in_place};

use super::types::MstFixture;

/// Number of shuffled permutations compared against the original order.
const SHUFFLES: u64 = 3;

/// Runs the order-independence property for `fixture`.
pub(super) fn run_order_independence_property(fixture: &MstFixture) -> TestCaseResult {
    let solve_failed = |err: crate::MstError| {
        TestCaseError::fail(format!("kruskal_mst failed: {err} ({})", fixture.describe()))
    };
    let baseline = kruskal_mst(fixture.node_count, &fixture.edges).map_err(solve_failed)?;

    for seed in 0..SHUFFLES {
        let mut shuffled = fixture.edges.clone();
        shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
        let forest = kruskal_mst(fixture.node_count, &shuffled).map_err(solve_failed)?;

        if forest.total_weight() != baseline.total_weight() {
            return Err(TestCaseError::fail(format!(
                "shuffle {seed}: total weight {} vs {} ({})",
                forest.total_weight(),
                baseline.total_weight(),
                fixture.describe(),
            )));
        }
        if forest.component_count() != baseline.component_count() {
            return Err(TestCaseError::fail(format!(
                "shuffle {seed}: {} components vs {} ({})",
                forest.component_count(),
                baseline.component_count(),
                fixture.describe(),
            )));
        }
    }

    let mut sorted = fixture.edges.clone();
    let in_place = kruskal_mst_in_place(fixture.node_count, &mut sorted).map_err(solve_failed)?;
    if in_place != baseline {
        return Err(TestCaseError::fail(format!(
            "in-place result differs from copying result ({})",
            fixture.describe()
        )));
    }
    if sorted.windows(2).any(|pair| pair[0].weight() > pair[1].weight()) {
        return Err(TestCaseError::fail(format!(
            "in-place variant left the slice unsorted ({})",
            fixture.describe()
        )));
    }

    Ok(())
}
