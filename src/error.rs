//! Error types for unit bezier operations.

use crate::data::curve::Axis;

/// Convenience alias for results of fallible bezier operations
pub type BezierResult<T> = Result<T, BezierError>;

/// Errors that can occur when constructing or operating on a unit bezier
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum BezierError {
    /// A scalar argument fell outside its required domain. `name` identifies
    /// which argument, `value` is the offending input.
    #[error("{name} = {value} is outside its required range")]
    OutOfRange { name: &'static str, value: f64 },

    /// Division at `t` produced a division point sitting exactly on an axis
    /// boundary, so the sub-curves cannot be renormalized to the unit square.
    #[error("division point at t = {t} lies on the {axis} axis boundary (coordinate = {value})")]
    DegenerateDivision { t: f64, axis: Axis, value: f64 },
}
