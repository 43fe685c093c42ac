//! Algorithm modules operating on the unit bezier curve.

pub mod divide;
pub mod export;
pub mod solve;
