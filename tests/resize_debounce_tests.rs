//! Resize coordination tests: burst suppression and viewport application.

use canvas_boot::engine::{RecordingViewport, ResizeCoordinator};
use canvas_boot::types::{Platform, ViewportMetrics, RESIZE_DEBOUNCE_TOUCH_MS};

fn metrics() -> ViewportMetrics {
    ViewportMetrics::new(1024.0, 768.0, 1.0)
}

#[test]
fn test_rapid_signals_apply_exactly_once() {
    // Signals every 10 units for a duration shorter than the touch window.
    let mut c = ResizeCoordinator::new(Platform::TouchHandheld, true);
    let mut vp = RecordingViewport::new();

    let mut applications = 0;
    let mut now = 0;
    while now < 200 {
        c.signal(now);
        if c.poll(now, metrics(), &mut vp).is_some() {
            applications += 1;
        }
        now += 10;
    }
    assert_eq!(applications, 0, "burst must be suppressed");

    // Quiet period: the effective signal fires one window after the last
    // raw signal (at 190), and only once.
    let last_signal = 190;
    for t in (now..last_signal + 2 * RESIZE_DEBOUNCE_TOUCH_MS).step_by(10) {
        if c.poll(t, metrics(), &mut vp).is_some() {
            applications += 1;
            assert!(t >= last_signal + RESIZE_DEBOUNCE_TOUCH_MS);
        }
    }
    assert_eq!(applications, 1);

    // Exactly one resize call and one zoom call reached the engine.
    assert_eq!(vp.calls.len(), 2);
}

#[test]
fn test_each_quiet_period_applies_again() {
    let mut c = ResizeCoordinator::new(Platform::Desktop, true);
    let mut vp = RecordingViewport::new();

    c.signal(0);
    assert!(c.poll(50, metrics(), &mut vp).is_some());

    c.signal(1000);
    assert!(c.poll(1050, metrics(), &mut vp).is_some());

    assert_eq!(vp.calls.len(), 4);
}

#[test]
fn test_applied_geometry_matches_calculator_output() {
    let mut c = ResizeCoordinator::new(Platform::Desktop, true);
    let mut vp = RecordingViewport::new();

    c.signal(0);
    let landscape = ViewportMetrics::new(1280.0, 720.0, 1.0);
    let profile = c.poll(50, landscape, &mut vp).expect("fires after window");

    assert!(profile.is_landscape);
    assert_eq!(vp.last_resize(), Some((540, 720)));
    assert_eq!(vp.last_zoom(), Some(1.0));
}

#[test]
fn test_auto_resize_flag_gates_everything() {
    let mut c = ResizeCoordinator::new(Platform::TouchHandheld, false);
    let mut vp = RecordingViewport::new();

    assert!(!c.enabled());
    for now in 0..10 {
        c.signal(now * 100);
    }
    assert!(c.poll(100_000, metrics(), &mut vp).is_none());
    assert!(vp.calls.is_empty());
}
