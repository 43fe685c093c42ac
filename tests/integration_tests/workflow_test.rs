use unit_bezier_rs::modules::export::css::ToCssBezier;
use unit_bezier_rs::{unit_bezier, Axis, UnitBezier};

#[test]
fn test_complete_workflow() {
    // Build the standard ease-in curve from explicit control points
    let curve = unit_bezier!(0.42, 0.0, 1.0, 1.0).unwrap();

    // Sample a point, then recover its parameter from either coordinate
    let point = curve.point_for_t(0.35).unwrap();
    let from_x = curve.parameter_for_x(point.x, 1e-9).unwrap();
    let from_y = curve.parameter_for_y(point.y, 1e-9).unwrap();
    assert!((from_x - 0.35).abs() < 1e-6);
    assert!((from_y - 0.35).abs() < 1e-6);

    // Split the curve where it reaches that x coordinate
    let (left, right) = curve.divide_at_x(point.x, 1e-9).unwrap();

    // Both halves stay within the timing-function family: interior control
    // points in the unit square, exact endpoints at (0,0) and (1,1)
    for half in [&left, &right] {
        for value in [half.p1().x, half.p1().y, half.p2().x, half.p2().y] {
            assert!((0.0..=1.0).contains(&value), "control value {}", value);
        }
        assert_eq!(half.point_for_t(0.0).unwrap().x, 0.0);
        assert_eq!(half.point_for_t(1.0).unwrap().y, 1.0);
    }

    // The left half, scaled back through the division point, reproduces the
    // original trajectory at the matching global parameter
    let quarter_local = left.point_for_t(0.5).unwrap();
    let original = curve.point_for_t(0.175).unwrap();
    assert!((quarter_local.x * point.x - original.x).abs() < 1e-6);
    assert!((quarter_local.y * point.y - original.y).abs() < 1e-6);

    // Render both halves and rebuild them through the constructor
    for half in [left, right] {
        let rendering = half.to_css_bezier();
        assert!(rendering.starts_with("cubic-bezier("));

        let inner = rendering
            .strip_prefix("cubic-bezier(")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap();
        let values: Vec<f64> = inner.split(", ").map(|v| v.parse().unwrap()).collect();
        let rebuilt = UnitBezier::new(values[0], values[1], values[2], values[3]).unwrap();
        assert_eq!(rebuilt, half);
    }
}

#[test]
fn test_presets_are_usable_end_to_end() {
    // Every preset inverts its own midpoint coordinate consistently
    let presets = [
        UnitBezier::linear(),
        UnitBezier::ease(),
        UnitBezier::ease_in(),
        UnitBezier::ease_out(),
        UnitBezier::ease_in_out(),
    ];

    for curve in presets {
        let mid = curve.point_for_t(0.5).unwrap();
        let t = curve.parameter_for_x(mid.x, 1e-9).unwrap();
        assert!((curve.coordinate_for_t(t, Axis::X) - mid.x).abs() < 1e-9);
    }
}
