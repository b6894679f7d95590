use kurbo::ParamCurve;

use super::*;

fn arc(from: (f64, f64), to: (f64, f64), r: f64, large_arc: bool, sweep: bool) -> EllipticalArc {
    EllipticalArc {
        from: Point::new(from.0, from.1),
        to: Point::new(to.0, to.1),
        radii: Vec2::new(r, r),
        x_rotation_deg: 0.0,
        large_arc,
        sweep,
    }
}

fn assert_close(a: Point, b: Point, eps: f64) {
    assert!((a - b).hypot() <= eps, "{a:?} vs {b:?}");
}

#[test]
fn zero_radius_degrades_to_line() {
    let mut a = arc((0.0, 0.0), (10.0, 5.0), 10.0, false, true);
    a.radii = Vec2::new(0.0, 10.0);
    let segs = a.to_segments();
    assert_eq!(segs.len(), 1);
    assert_eq!(
        segs[0],
        PathSeg::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0)))
    );
}

#[test]
fn coincident_endpoints_degrade_to_line() {
    let segs = arc((3.0, 3.0), (3.0, 3.0), 10.0, true, true).to_segments();
    assert_eq!(segs.len(), 1);
    assert!(matches!(segs[0], PathSeg::Line(_)));
}

#[test]
fn semicircle_is_two_cubics_through_the_top() {
    let segs = arc((0.0, 0.0), (100.0, 0.0), 50.0, false, true).to_segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].start(), Point::new(0.0, 0.0));
    assert_eq!(segs[1].end(), Point::new(100.0, 0.0));
    assert_eq!(segs[0].end(), segs[1].start());
    assert_close(segs[0].end(), Point::new(50.0, -50.0), 1e-9);

    let center = Point::new(50.0, 0.0);
    for seg in &segs {
        for i in 0..=8 {
            let p = seg.eval(i as f64 / 8.0);
            assert!(((p - center).hypot() - 50.0).abs() < 0.05);
        }
    }
}

#[test]
fn sweep_flag_flips_side() {
    let segs = arc((0.0, 0.0), (100.0, 0.0), 50.0, false, false).to_segments();
    assert_close(segs[0].end(), Point::new(50.0, 50.0), 1e-9);
}

#[test]
fn large_arc_uses_more_segments() {
    let small = arc((0.0, 0.0), (50.0, 50.0), 50.0, false, true).to_segments();
    let large = arc((0.0, 0.0), (50.0, 50.0), 50.0, true, true).to_segments();
    assert_eq!(small.len(), 1);
    assert_eq!(large.len(), 3);
    assert_eq!(large.last().unwrap().end(), Point::new(50.0, 50.0));
}

#[test]
fn undersized_radii_are_scaled_up() {
    let a = arc((0.0, 0.0), (100.0, 0.0), 10.0, false, true);
    let center = a.center_parameterization().unwrap();
    assert!((center.radii.x - 50.0).abs() < 1e-9);
    assert_close(center.center, Point::new(50.0, 0.0), 1e-9);
    assert_eq!(a.to_segments().len(), 2);
}

#[test]
fn nearly_coincident_endpoints_degrade_to_line() {
    let a = arc((0.0, 0.0), (1e-12, 0.0), 10.0, false, true);
    assert!(a.center_parameterization().is_none());
    let segs = a.to_segments();
    assert_eq!(
        segs,
        vec![PathSeg::Line(Line::new(Point::new(0.0, 0.0), Point::new(1e-12, 0.0)))]
    );
}

#[test]
fn tiny_large_arc_is_still_a_loop() {
    // The complementary sweep of the same endpoints is nearly a full turn.
    let segs = arc((0.0, 0.0), (1e-6, 0.0), 10.0, true, true).to_segments();
    assert_eq!(segs.len(), 4);
    for seg in &segs {
        let PathSeg::Cubic(c) = seg else {
            panic!("expected cubic, got {seg:?}");
        };
        for p in [c.p0, c.p1, c.p2, c.p3] {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}
