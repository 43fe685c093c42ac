//! Inversion: recover the curve parameter that produces a coordinate
//!
//! See [`root_find`] for the hybrid Newton/bisection solver.

pub mod root_find;
