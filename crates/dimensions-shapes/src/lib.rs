//! Shape modules. Each one exposes its members by name; `square` additionally
//! bundles them into [`SQUARE`], the symbol to reach for when you want the
//! whole module through a single import.

#![warn(clippy::pedantic)]

pub mod square;
pub mod triangle;

pub use square::EXPORTS as SQUARE;

pub type Float = f64;
