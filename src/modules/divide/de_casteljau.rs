//! Curve subdivision via De Casteljau's algorithm.
//!
//! Splitting at parameter `t` yields a left curve covering [0,t] and a
//! right curve covering [t,1], each renormalized so its own domain runs
//! from (0,0) to (1,1) again: the left half is scaled by the reciprocal of
//! the division point, the right half is affinely remapped from the
//! remaining span. The division point itself is the exact point on the
//! curve at `t` and becomes the shared endpoint of both halves.
//!
//! # Example
//!
//! ```rust
//! use unit_bezier_rs::modules::divide::de_casteljau::divide_at_parameter;
//! use unit_bezier_rs::UnitBezier;
//!
//! let curve = UnitBezier::ease_in();
//! let (left, _right) = divide_at_parameter(&curve, 0.5).unwrap();
//!
//! // The left half traces the original curve: its midpoint, scaled back by
//! // the division point, is the original curve at t = 0.25.
//! let joint = curve.point_for_t(0.5).unwrap();
//! let quarter = curve.point_for_t(0.25).unwrap();
//! let local = left.point_for_t(0.5).unwrap();
//! assert!((local.x * joint.x - quarter.x).abs() < 1e-12);
//! assert!((local.y * joint.y - quarter.y).abs() < 1e-12);
//! ```

use crate::data::curve::{check_unit_range, Axis, UnitBezier};
use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use crate::modules::solve::root_find::{parameter_for_x, parameter_for_y};

/// Split `curve` at parameter `t` into two new independently-owned curves.
///
/// `t` must lie in [0,1]. At the boundaries no geometric division occurs:
/// the empty side degenerates to the identity curve and the other side is
/// an exact clone of the original. A division point that lands exactly on
/// an axis boundary (reachable through floating point rounding near the
/// ends) fails with [`BezierError::DegenerateDivision`] instead of
/// producing non-finite control points.
pub fn divide_at_parameter(curve: &UnitBezier, t: f64) -> BezierResult<(UnitBezier, UnitBezier)> {
    check_unit_range("t", t)?;

    if t == 0.0 {
        return Ok((UnitBezier::linear(), curve.clone()));
    }
    if t == 1.0 {
        return Ok((curve.clone(), UnitBezier::linear()));
    }

    let origin = Point::new(0.0, 0.0);
    let end = Point::new(1.0, 1.0);

    // First-level interpolation among the four control points.
    let i0 = origin.lerp(&curve.p1(), t);
    let i1 = curve.p1().lerp(&curve.p2(), t);
    let i2 = curve.p2().lerp(&end, t);

    // Second level.
    let j0 = i0.lerp(&i1, t);
    let j1 = i1.lerp(&i2, t);

    // The division point, on the curve at `t`.
    let k = j0.lerp(&j1, t);

    for (axis, value) in [(Axis::X, k.x), (Axis::Y, k.y)] {
        if value == 0.0 || value == 1.0 {
            return Err(BezierError::DegenerateDivision { t, axis, value });
        }
    }

    // Renormalize each half onto its own (0,0)-(1,1) domain.
    let left = UnitBezier::new(i0.x / k.x, i0.y / k.y, j0.x / k.x, j0.y / k.y)?;
    let right = UnitBezier::new(
        (j1.x - k.x) / (1.0 - k.x),
        (j1.y - k.y) / (1.0 - k.y),
        (i2.x - k.x) / (1.0 - k.x),
        (i2.y - k.y) / (1.0 - k.y),
    )?;

    Ok((left, right))
}

/// Invert `x` to a parameter within `epsilon`, then split there
pub fn divide_at_x(
    curve: &UnitBezier,
    x: f64,
    epsilon: f64,
) -> BezierResult<(UnitBezier, UnitBezier)> {
    let t = parameter_for_x(curve, x, epsilon)?;
    divide_at_parameter(curve, t)
}

/// Invert `y` to a parameter within `epsilon`, then split there
pub fn divide_at_y(
    curve: &UnitBezier,
    y: f64,
    epsilon: f64,
) -> BezierResult<(UnitBezier, UnitBezier)> {
    let t = parameter_for_y(curve, y, epsilon)?;
    divide_at_parameter(curve, t)
}

impl UnitBezier {
    /// Split the curve at parameter `t`. See [`divide_at_parameter`].
    pub fn divide_at_parameter(&self, t: f64) -> BezierResult<(UnitBezier, UnitBezier)> {
        divide_at_parameter(self, t)
    }

    /// Split the curve where it reaches the `x` coordinate
    pub fn divide_at_x(&self, x: f64, epsilon: f64) -> BezierResult<(UnitBezier, UnitBezier)> {
        divide_at_x(self, x, epsilon)
    }

    /// Split the curve where it reaches the `y` coordinate
    pub fn divide_at_y(&self, y: f64, epsilon: f64) -> BezierResult<(UnitBezier, UnitBezier)> {
        divide_at_y(self, y, epsilon)
    }
}
