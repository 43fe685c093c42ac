//! Numeric constants shared across the crate.

/// Maximum Newton iterations before the root finder falls back to bisection.
pub const NEWTON_ITERATIONS: usize = 8;

/// Derivative magnitudes below this make a Newton step unstable.
pub const FLAT_DERIVATIVE_GUARD: f64 = 1e-6;

/// Bisection halvings of the unit interval before the root finder gives up
/// and returns its last estimate.
pub const BISECTION_ITERATIONS: usize = 64;

/// Control points of the identity timing function. Traces the same
/// diagonal as CSS `cubic-bezier(0, 0, 1, 1)`, but with uniform parameter
/// speed: the point at parameter t is exactly (t, t).
pub const LINEAR: (f64, f64, f64, f64) = (1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

/// Control points of the CSS `ease` timing function.
pub const EASE: (f64, f64, f64, f64) = (0.25, 0.1, 0.25, 1.0);

/// Control points of the CSS `ease-in` timing function.
pub const EASE_IN: (f64, f64, f64, f64) = (0.42, 0.0, 1.0, 1.0);

/// Control points of the CSS `ease-out` timing function.
pub const EASE_OUT: (f64, f64, f64, f64) = (0.0, 0.0, 0.58, 1.0);

/// Control points of the CSS `ease-in-out` timing function.
pub const EASE_IN_OUT: (f64, f64, f64, f64) = (0.42, 0.0, 0.58, 1.0);
