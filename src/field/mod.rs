//! Pointer-distorted dot field.

pub mod dot;
pub mod grid;

pub use dot::{Dot, DotForces, DotStroke};
pub use grid::DotGrid;
