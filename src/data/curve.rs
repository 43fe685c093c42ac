//! The unit cubic Bezier curve: a CSS-style timing function.
//!
//! The curve is pinned to the endpoints (0,0) and (1,1); only the two
//! interior control points are stored, and both of their coordinates must
//! lie in [0,1]. The polynomial coefficients for each axis are derived once
//! at construction, so sampling is a couple of multiply-adds.
//!
//! # Example
//!
//! ```rust
//! use unit_bezier_rs::UnitBezier;
//!
//! // The CSS `ease` curve
//! let curve = UnitBezier::new(0.25, 0.1, 0.25, 1.0).unwrap();
//!
//! let mid = curve.point_for_t(0.5).unwrap();
//! assert!((mid.x - 0.3125).abs() < 1e-9);
//! assert!((mid.y - 0.5375).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};

/// Selects one coordinate axis of the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Cached Horner coefficients for one axis, such that the coordinate at
/// parameter t is `((a*t + b)*t + c)*t`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisCoefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl AxisCoefficients {
    /// Derive the coefficients from the interior control values of one axis,
    /// with the endpoints fixed at 0 and 1.
    fn derive(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn sample(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

/// A 2D cubic Bezier curve from (0,0) to (1,1), the canonical representation
/// of a CSS-style timing function.
///
/// Immutable after construction; every operation either reads the curve or
/// returns new curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ControlPoints", into = "ControlPoints")]
pub struct UnitBezier {
    p1: Point,
    p2: Point,
    x: AxisCoefficients,
    y: AxisCoefficients,
}

/// Serialized form of a curve: just the two interior control points.
/// Deserialization goes back through [`UnitBezier::new`] so the range
/// invariant is re-checked and the coefficients re-derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ControlPoints {
    p1: Point,
    p2: Point,
}

impl TryFrom<ControlPoints> for UnitBezier {
    type Error = BezierError;

    fn try_from(points: ControlPoints) -> BezierResult<Self> {
        Self::new(points.p1.x, points.p1.y, points.p2.x, points.p2.y)
    }
}

impl From<UnitBezier> for ControlPoints {
    fn from(curve: UnitBezier) -> Self {
        Self {
            p1: curve.p1,
            p2: curve.p2,
        }
    }
}

/// Check that a scalar argument lies in [0,1] inclusive. NaN is rejected.
pub(crate) fn check_unit_range(name: &'static str, value: f64) -> BezierResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BezierError::OutOfRange { name, value })
    }
}

impl UnitBezier {
    /// Create a curve from the coordinates of its two interior control
    /// points. Fails with [`BezierError::OutOfRange`] when any coordinate
    /// falls outside [0,1]; construction is the only place invalid control
    /// points can enter, since the curve is immutable afterwards.
    pub fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> BezierResult<Self> {
        check_unit_range("p1x", p1x)?;
        check_unit_range("p1y", p1y)?;
        check_unit_range("p2x", p2x)?;
        check_unit_range("p2y", p2y)?;
        Ok(Self::from_control_points(
            Point::new(p1x, p1y),
            Point::new(p2x, p2y),
        ))
    }

    /// Build a curve from control points already known to be in range.
    fn from_control_points(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            x: AxisCoefficients::derive(p1.x, p2.x),
            y: AxisCoefficients::derive(p1.y, p2.y),
        }
    }

    fn from_preset((p1x, p1y, p2x, p2y): (f64, f64, f64, f64)) -> Self {
        Self::from_control_points(Point::new(p1x, p1y), Point::new(p2x, p2y))
    }

    /// The identity curve: `point_for_t(t)` is `(t, t)` for every t
    pub fn linear() -> Self {
        Self::from_preset(constants::LINEAR)
    }

    /// The CSS `ease` curve
    pub fn ease() -> Self {
        Self::from_preset(constants::EASE)
    }

    /// The CSS `ease-in` curve
    pub fn ease_in() -> Self {
        Self::from_preset(constants::EASE_IN)
    }

    /// The CSS `ease-out` curve
    pub fn ease_out() -> Self {
        Self::from_preset(constants::EASE_OUT)
    }

    /// The CSS `ease-in-out` curve
    pub fn ease_in_out() -> Self {
        Self::from_preset(constants::EASE_IN_OUT)
    }

    /// First interior control point
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Second interior control point
    pub fn p2(&self) -> Point {
        self.p2
    }

    fn coefficients(&self, axis: Axis) -> &AxisCoefficients {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Evaluate one axis of the curve at parameter `t` using the cached
    /// Horner coefficients.
    ///
    /// No range check is performed; callers are responsible for supplying a
    /// `t` in [0,1]. This is the branchless primitive shared by evaluation
    /// and root finding.
    pub fn coordinate_for_t(&self, t: f64, axis: Axis) -> f64 {
        self.coefficients(axis).sample(t)
    }

    /// Analytic derivative of one axis at parameter `t`: `(3a*t + 2b)*t + c`.
    ///
    /// Like [`coordinate_for_t`](Self::coordinate_for_t), unchecked.
    pub fn derivative_for_t(&self, t: f64, axis: Axis) -> f64 {
        self.coefficients(axis).slope(t)
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// `t == 0` and `t == 1` return the exact endpoints without touching the
    /// polynomial, so the boundaries carry no floating point drift. Any
    /// other `t` must lie strictly inside (0,1).
    pub fn point_for_t(&self, t: f64) -> BezierResult<Point> {
        if t == 0.0 || t == 1.0 {
            return Ok(Point::new(t, t));
        }
        check_unit_range("t", t)?;
        Ok(Point::new(
            self.coordinate_for_t(t, Axis::X),
            self.coordinate_for_t(t, Axis::Y),
        ))
    }
}
