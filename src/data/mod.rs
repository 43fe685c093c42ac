//! Core data structures: the unit bezier curve and its point type.

pub mod curve;
pub mod macros;
pub mod point;

pub use curve::{Axis, UnitBezier};
pub use point::Point;
