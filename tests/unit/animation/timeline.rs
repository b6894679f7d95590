use super::*;

fn reveal(t: &mut Timeline, delay: f64) {
    t.wait(delay)
        .animate_to(1.0, 1000.0, Easing::CubicInOut)
        .complete()
        .wait(2000.0)
        .animate_to(0.05, 1000.0, Easing::CubicInOut);
}

#[test]
fn new_timeline_is_idle_and_holds_value() {
    let mut t = Timeline::new(0.25);
    assert!(t.is_idle());
    t.update(10_000.0);
    assert_eq!(t.value(), 0.25);
}

#[test]
fn wait_holds_then_animation_starts_at_exact_value() {
    let mut t = Timeline::new(0.05);
    t.cancel(0.0);
    reveal(&mut t, 350.0);

    t.update(349.0);
    assert_eq!(t.value(), 0.05);
    t.update(350.0);
    assert_eq!(t.value(), 0.05);
    t.update(850.0);
    assert!((t.value() - 0.525).abs() < 1e-12);
    t.update(1350.0);
    assert_eq!(t.value(), 1.0);
    t.update(3349.0);
    assert_eq!(t.value(), 1.0);
    t.update(4350.0);
    assert_eq!(t.value(), 0.05);
    assert!(t.is_idle());
}

#[test]
fn coarse_and_fine_sampling_agree() {
    let mut coarse = Timeline::new(0.05);
    let mut fine = Timeline::new(0.05);
    coarse.cancel(0.0);
    fine.cancel(0.0);
    reveal(&mut coarse, 100.0);
    reveal(&mut fine, 100.0);

    let mut now = 0.0;
    while now < 3600.0 {
        fine.update(now);
        now += 16.0;
    }
    fine.update(3600.0);
    coarse.update(3600.0);
    assert_eq!(coarse.value(), fine.value());
    assert_eq!(coarse.pending(), fine.pending());
}

#[test]
fn large_jump_retires_several_steps() {
    let mut t = Timeline::new(0.0);
    t.cancel(0.0);
    t.wait(10.0).animate_to(2.0, 10.0, Easing::Linear).wait(10.0);
    t.update(25.0);
    assert_eq!(t.value(), 2.0);
    assert_eq!(t.pending(), 1);
    t.update(30.0);
    assert!(t.is_idle());
}

#[test]
fn complete_snaps_to_last_target() {
    let mut t = Timeline::new(0.0);
    t.cancel(0.0);
    t.animate_to(0.5, 0.0, Easing::Linear).complete();
    t.update(0.0);
    assert_eq!(t.value(), 0.5);
    assert!(t.is_idle());
}

#[test]
fn complete_without_animation_keeps_value() {
    let mut t = Timeline::new(0.3);
    t.cancel(0.0);
    t.complete();
    t.update(0.0);
    assert_eq!(t.value(), 0.3);
    assert!(t.is_idle());
}

#[test]
fn cancel_keeps_value_and_reschedules_from_now() {
    let mut t = Timeline::new(0.0);
    t.cancel(0.0);
    t.animate_to(1.0, 1000.0, Easing::Linear);
    t.update(500.0);
    assert!((t.value() - 0.5).abs() < 1e-12);

    t.restart(
        500.0,
        [Step::AnimateTo {
            target: 0.0,
            over_ms: 500.0,
            easing: Easing::Linear,
        }],
    );
    assert!((t.value() - 0.5).abs() < 1e-12);
    t.update(750.0);
    assert!((t.value() - 0.25).abs() < 1e-12);
    t.update(1000.0);
    assert_eq!(t.value(), 0.0);
}

#[test]
fn negative_durations_are_clamped() {
    let mut t = Timeline::new(0.0);
    t.cancel(100.0);
    t.wait(-50.0).animate_to(1.0, -5.0, Easing::Linear);
    t.update(100.0);
    assert_eq!(t.value(), 1.0);
    assert!(t.is_idle());
}
