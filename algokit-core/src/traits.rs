//! Element type constraints for the accumulating structures
//!
//! The sum trees are generic over the accumulated value rather than
//! hard-coded to integers, so string concatenation, modular sums and
//! similar monoids work unchanged. The identity ("zero") element is
//! supplied by the caller at construction.

use core::ops::{Add, Sub};

/// Value that can be accumulated with `+`
///
/// Sufficient for the segment tree, which only ever combines values.
pub trait Summable: Clone + Add<Output = Self> {}

impl<T> Summable for T where T: Clone + Add<Output = T> {}

/// Value forming a group under `+` / `-`
///
/// Required by the Fenwick tree, which derives range sums and single
/// elements as differences of prefix sums.
pub trait GroupElement: Summable + Sub<Output = Self> {}

impl<T> GroupElement for T where T: Summable + Sub<Output = T> {}
