//! The triangle. Has no bundle, import [`dimension`] by name.

use crate::Float;

/// Given a triangle's three sides, returns its dimension: the sum of the
/// squares of the sides.
#[must_use]
pub fn dimension(side1: Float, side2: Float, side3: Float) -> Float {
    side1 * side1 + side2 * side2 + side3 * side3
}

#[cfg_attr(not(test), allow(dead_code))]
fn triangle_dimension(side1: Float, side2: Float, side3: Float) -> Float {
    dimension(side1, side2, side3)
}
