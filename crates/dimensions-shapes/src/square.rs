//! The square.

use crate::Float;

/// Name of the shape.
pub const NAME: &str = "SQUARE";

/// Given a square's width and height, returns its dimension.
#[must_use]
pub fn dimension(width: Float, height: Float) -> Float {
    width * height
}

// Not re-exported, so it stays private to this module.
#[cfg_attr(not(test), allow(dead_code))]
fn square_dimension(width: Float, height: Float) -> Float {
    dimension(width, height)
}

/// Every public member of this module, gathered in one value.
#[derive(Debug, Clone, Copy)]
pub struct Exports {
    pub dimension: fn(Float, Float) -> Float,
    pub name: &'static str,
}

/// The square bundle. Re-exported at the crate root as [`crate::SQUARE`].
pub const EXPORTS: Exports = Exports {
    dimension,
    name: NAME,
};
