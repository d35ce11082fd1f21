//! Marker traits for edge weights and capacities
//!
//! Blanket impls make every ordered additive numeric type usable without
//! explicit opt-in, in the same spirit as `algokit_core::Summable`.

use core::ops::{Add, Sub};

/// Edge weight: ordered, addable, cheap to clone
///
/// Satisfied by the integer types, and by wrappers such as
/// `ordered_float`-style types that impose a total order.
pub trait Weight: Clone + Ord + Add<Output = Self> {}

impl<T: Clone + Ord + Add<Output = T>> Weight for T {}

/// Flow capacity: a weight that also supports subtraction
pub trait Capacity: Weight + Sub<Output = Self> {}

impl<T: Weight + Sub<Output = T>> Capacity for T {}
