//! CSS export for unit bezier curves
//!
//! Renders a curve in the canonical 4-argument `cubic-bezier()` functional
//! notation. The numbers use Rust's shortest round-trip formatting, so
//! feeding the rendered values back through [`UnitBezier::new`] rebuilds
//! the identical curve.
//!
//! # Example
//!
//! ```rust
//! use unit_bezier_rs::modules::export::css::ToCssBezier;
//! use unit_bezier_rs::UnitBezier;
//!
//! let ease = UnitBezier::ease();
//! assert_eq!(ease.to_css_bezier(), "cubic-bezier(0.25, 0.1, 0.25, 1)");
//!
//! // `Display` delegates to the same rendering
//! assert_eq!(format!("{}", ease), "cubic-bezier(0.25, 0.1, 0.25, 1)");
//! ```

use std::fmt;

use crate::data::curve::UnitBezier;

/// Trait for types with a canonical `cubic-bezier()` rendering
pub trait ToCssBezier {
    /// Render as the canonical 4-argument `cubic-bezier()` notation
    fn to_css_bezier(&self) -> String;
}

impl ToCssBezier for UnitBezier {
    fn to_css_bezier(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.p1().x,
            self.p1().y,
            self.p2().x,
            self.p2().y
        )
    }
}

impl fmt::Display for UnitBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_bezier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_bezier;

    /// Rebuild a curve from its rendering, the way a CSS-syntax parser
    /// collaborator would hand the numbers back to the constructor.
    fn reconstruct(rendering: &str) -> UnitBezier {
        let inner = rendering
            .strip_prefix("cubic-bezier(")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap();
        let values: Vec<f64> = inner
            .split(", ")
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 4);
        UnitBezier::new(values[0], values[1], values[2], values[3]).unwrap()
    }

    #[test]
    fn test_css_rendering_of_the_presets() {
        struct RenderingTestCase<'a> {
            name: &'a str,
            curve: UnitBezier,
            expected: &'a str,
        }

        let test_cases = [
            RenderingTestCase {
                name: "ease",
                curve: UnitBezier::ease(),
                expected: "cubic-bezier(0.25, 0.1, 0.25, 1)",
            },
            RenderingTestCase {
                name: "ease_in",
                curve: UnitBezier::ease_in(),
                expected: "cubic-bezier(0.42, 0, 1, 1)",
            },
            RenderingTestCase {
                name: "ease_in_out",
                curve: UnitBezier::ease_in_out(),
                expected: "cubic-bezier(0.42, 0, 0.58, 1)",
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                test_case.curve.to_css_bezier(),
                test_case.expected,
                "Test case: {}",
                test_case.name
            );
        }
    }

    #[test]
    fn test_rendering_round_trips_through_the_constructor() {
        let curves = [
            UnitBezier::linear(),
            UnitBezier::ease_out(),
            unit_bezier!(0.1234567, 0.25, 0.75, 0.9876543).unwrap(),
        ];

        for curve in curves {
            let rebuilt = reconstruct(&curve.to_css_bezier());
            assert_eq!(curve, rebuilt);
        }
    }

    #[test]
    fn test_display_delegates_to_the_css_rendering() {
        let curve = unit_bezier!(0.3, 0.2, 0.7, 0.8).unwrap();
        assert_eq!(format!("{}", curve), curve.to_css_bezier());
    }
}
