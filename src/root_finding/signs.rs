//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if the product of two values is strictly negative

/// Returns `true` if `x` and `y` have strictly opposite signs.
///
/// A zero or NaN operand never counts as a sign change.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x * y < 0.0
}
