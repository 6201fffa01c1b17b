use mindcanvas_core::{synthesize, Point, ShapeStyle};

fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn every_style_is_deterministic_for_same_seed() {
    let center = Point::new(0.5, 0.5);
    for style in ShapeStyle::ALL {
        let first = synthesize(style, center, 0.2, 1234);
        let second = synthesize(style, center, 0.2, 1234);
        assert_eq!(first, second, "{style} drifted between calls");
        assert!(!first.is_empty(), "{style} produced no points");
    }
}

#[test]
fn seed_only_matters_for_randomized_styles() {
    let center = Point::new(0.4, 0.6);
    for style in ShapeStyle::ALL {
        let a = synthesize(style, center, 0.25, 1);
        let b = synthesize(style, center, 0.25, 2);
        if style.is_randomized() {
            assert_ne!(a, b, "{style} ignored the seed");
        } else {
            assert_eq!(a, b, "{style} should not depend on the seed");
        }
    }
}

#[test]
fn polygon_has_six_vertices_on_the_radius() {
    let center = Point::new(0.5, 0.5);
    let points = synthesize(ShapeStyle::GeometricPolygon, center, 0.3, 0);
    assert_eq!(points.len(), 6);
    for point in points {
        assert!((distance(point, center) - 0.3).abs() < 1e-9);
    }
}

#[test]
fn circular_wobble_stays_within_its_band() {
    let center = Point::new(0.5, 0.5);
    let size = 0.2;
    let points = synthesize(ShapeStyle::CircularWobble, center, size, 77);
    assert_eq!(points.len(), 200);
    for point in points {
        let radius = distance(point, center);
        assert!(radius >= size * 0.9 - 1e-12 && radius < size * 1.1 + 1e-12);
    }
}

#[test]
fn sharp_outline_never_dips_below_base_radius() {
    let center = Point::new(0.5, 0.5);
    let points = synthesize(ShapeStyle::AngularSharp, center, 0.2, 0);
    assert_eq!(points.len(), 100);
    for point in points {
        let radius = distance(point, center);
        assert!(radius >= 0.2 - 1e-12 && radius <= 0.3 + 1e-12);
    }
}

#[test]
fn sample_counts_match_style() {
    let center = Point::new(0.5, 0.5);
    let counts = [
        (ShapeStyle::Heart, 100),
        (ShapeStyle::FlowingWave, 150),
        (ShapeStyle::SpiralSwirl, 200),
        (ShapeStyle::AscendingArc, 100),
        (ShapeStyle::DefaultWobble, 200),
    ];
    for (style, expected) in counts {
        assert_eq!(synthesize(style, center, 0.2, 5).len(), expected, "{style}");
    }
}

#[test]
fn heart_is_closed_and_zero_size_collapses() {
    let center = Point::new(0.3, 0.7);
    let points = synthesize(ShapeStyle::Heart, center, 0.2, 0);
    let first = points[0];
    let last = points[points.len() - 1];
    assert!(distance(first, last) < 1e-9);

    for style in ShapeStyle::ALL {
        for point in synthesize(style, center, 0.0, 9) {
            if style == ShapeStyle::AscendingArc {
                assert!((point.x - center.x).abs() < 1e-12);
            } else {
                assert!(distance(point, center) < 1e-12, "{style} did not collapse");
            }
        }
    }
}

#[test]
fn motif_names_resolve_to_styles() {
    assert_eq!(ShapeStyle::from_tag("swirls"), ShapeStyle::SpiralSwirl);
    assert_eq!(ShapeStyle::from_tag("HEARTS"), ShapeStyle::Heart);
    assert_eq!(ShapeStyle::from_tag("clouds"), ShapeStyle::DefaultWobble);
}
