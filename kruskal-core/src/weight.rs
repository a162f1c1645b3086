//! Edge weight abstraction.
//!
//! Kruskal only needs to order weights and add them up. Integers already have
//! a total order; floats are ordered with IEEE 754 `totalOrder` after mapping
//! `-0.0` to `0.0`, and NaN or infinite values are rejected before sorting so
//! that ordering never has to interpret them.

use std::{cmp::Ordering, fmt};

use num_traits::{CheckedAdd, Zero};

/// A numeric type usable as an edge weight.
///
/// The zero value seeds the running total and [`Weight::checked_add`]
/// accumulates accepted weights, so a tree whose total does not fit the type
/// is reported instead of wrapping.
pub trait Weight: Copy + fmt::Debug + Zero {
    /// Total order used to sort edges. Values that are numerically equal
    /// compare equal.
    fn weight_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` for values that must not enter the sort.
    fn is_valid(&self) -> bool;

    /// Returns `self + other`, or `None` when the sum overflows (integers) or
    /// is not finite (floats).
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns `false` when `high - low` cannot be represented, which rules
    /// the range out for uniform sampling.
    fn has_finite_span(self, _high: Self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn is_valid(&self) -> bool {
                    true
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    // Adding zero turns -0.0 into 0.0 so signed zeros tie.
                    (*self + 0.0).total_cmp(&(*other + 0.0))
                }

                #[inline]
                fn is_valid(&self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                #[inline]
                fn has_finite_span(self, high: Self) -> bool {
                    (high - self).is_finite()
                }
            }
        )+
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
