//! This module provides convenient macros for creating points and curves.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a unit cubic bezier curve from the coordinates of its
/// two interior control points. Expands to a [`BezierResult`] since the
/// coordinates are validated.
///
/// [`BezierResult`]: crate::BezierResult
#[macro_export]
macro_rules! unit_bezier {
    ($p1x:expr, $p1y:expr, $p2x:expr, $p2y:expr) => {
        $crate::data::UnitBezier::new($p1x as f64, $p1y as f64, $p2x as f64, $p2y as f64)
    };
}
