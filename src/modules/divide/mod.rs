//! Subdivision of a curve into two curves of the same family
//!
//! See [`de_casteljau`] for the splitting algorithm.

pub mod de_casteljau;
