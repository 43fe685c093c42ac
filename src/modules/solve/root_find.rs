//! Inversion of the unit bezier: coordinate to parameter.
//!
//! Finds the parameter `t` whose coordinate on one axis matches a target
//! value, to within a caller-supplied tolerance. A short Newton iteration
//! handles well-behaved curves in a handful of steps; when the local
//! derivative is too flat for a Newton step to be trusted, a bisection of
//! the unit interval takes over. Both axes of a valid timing-function curve
//! are monotonic increasing, which the bisection relies upon.
//!
//! Non-convergence is deliberately not an error: the solver returns its
//! last estimate, since a best-effort parameter is still usable for
//! sampling.
//!
//! # Example
//!
//! ```rust
//! use unit_bezier_rs::modules::solve::root_find::parameter_for_x;
//! use unit_bezier_rs::UnitBezier;
//!
//! let curve = UnitBezier::ease_in_out();
//! let t = parameter_for_x(&curve, 0.5, 1e-7).unwrap();
//! assert!((t - 0.5).abs() < 1e-6);
//! ```

use crate::constants::{BISECTION_ITERATIONS, FLAT_DERIVATIVE_GUARD, NEWTON_ITERATIONS};
use crate::data::curve::{Axis, UnitBezier};
use crate::error::{BezierError, BezierResult};

/// Find `t` in [0,1] whose `axis` coordinate is within `epsilon` of
/// `target`.
///
/// `epsilon` must be finite and positive. Targets below or above the
/// curve's reachable range resolve to the nearer boundary parameter.
pub fn parameter_for_coordinate(
    curve: &UnitBezier,
    target: f64,
    axis: Axis,
    epsilon: f64,
) -> BezierResult<f64> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(BezierError::OutOfRange {
            name: "epsilon",
            value: epsilon,
        });
    }

    // Fast path: Newton's method seeded at the target itself, a reasonable
    // first guess on a monotonic axis.
    let mut t = target;
    for _ in 0..NEWTON_ITERATIONS {
        let residual = curve.coordinate_for_t(t, axis) - target;
        if residual.abs() < epsilon {
            return Ok(t);
        }
        let slope = curve.derivative_for_t(t, axis);
        if slope.abs() < FLAT_DERIVATIVE_GUARD {
            break;
        }
        t -= residual / slope;
    }

    // Slow path: bisection. Reseed from the target; outside the unit
    // interval the coordinate is unreachable on that side, so clamp.
    let mut t = target;
    if t < 0.0 {
        return Ok(0.0);
    }
    if t > 1.0 {
        return Ok(1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..BISECTION_ITERATIONS {
        if lo >= hi {
            break;
        }
        let sampled = curve.coordinate_for_t(t, axis);
        if (sampled - target).abs() < epsilon {
            return Ok(t);
        }
        if target > sampled {
            lo = t;
        } else {
            hi = t;
        }
        t = (hi - lo) / 2.0 + lo;
    }

    // Out of iterations: hand back the last estimate instead of failing.
    Ok(t)
}

/// Find the parameter producing the given `x` coordinate
pub fn parameter_for_x(curve: &UnitBezier, x: f64, epsilon: f64) -> BezierResult<f64> {
    parameter_for_coordinate(curve, x, Axis::X, epsilon)
}

/// Find the parameter producing the given `y` coordinate
pub fn parameter_for_y(curve: &UnitBezier, y: f64, epsilon: f64) -> BezierResult<f64> {
    parameter_for_coordinate(curve, y, Axis::Y, epsilon)
}

impl UnitBezier {
    /// Find the parameter whose `axis` coordinate is within `epsilon` of
    /// `target`. See [`parameter_for_coordinate`].
    pub fn parameter_for_coordinate(
        &self,
        target: f64,
        axis: Axis,
        epsilon: f64,
    ) -> BezierResult<f64> {
        parameter_for_coordinate(self, target, axis, epsilon)
    }

    /// Find the parameter producing the given `x` coordinate
    pub fn parameter_for_x(&self, x: f64, epsilon: f64) -> BezierResult<f64> {
        parameter_for_x(self, x, epsilon)
    }

    /// Find the parameter producing the given `y` coordinate
    pub fn parameter_for_y(&self, y: f64, epsilon: f64) -> BezierResult<f64> {
        parameter_for_y(self, y, epsilon)
    }
}
