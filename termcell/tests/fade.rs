use std::time::{Duration, Instant};

use termcell::{Easing, Fade};

// =============================================================================
// Easing Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_ease_in_is_slow_at_start() {
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

// =============================================================================
// Fade Tests
// =============================================================================

#[test]
fn test_fade_starts_opaque() {
    let start = Instant::now();
    let fade = Fade::out(start, Duration::from_millis(100), Easing::Linear);

    assert_eq!(fade.opacity(start), 1.0);
    assert!(!fade.is_done(start));
}

#[test]
fn test_fade_linear_midpoint() {
    let start = Instant::now();
    let fade = Fade::out(start, Duration::from_millis(100), Easing::Linear);

    let mid = fade.opacity(start + Duration::from_millis(50));
    assert!((mid - 0.5).abs() < 0.001);
}

#[test]
fn test_fade_ease_in_stays_visible_longer() {
    let start = Instant::now();
    let fade = Fade::out(start, Duration::from_millis(100), Easing::EaseIn);

    // 1 - 0.5^2
    let mid = fade.opacity(start + Duration::from_millis(50));
    assert!((mid - 0.75).abs() < 0.001);
}

#[test]
fn test_fade_done_at_deadline() {
    let start = Instant::now();
    let fade = Fade::out(start, Duration::from_millis(100), Easing::EaseIn);

    assert_eq!(fade.deadline(), start + Duration::from_millis(100));
    assert!(fade.is_done(fade.deadline()));
    assert_eq!(fade.opacity(start + Duration::from_secs(1)), 0.0);
}

#[test]
fn test_zero_duration_fade_is_done_immediately() {
    let start = Instant::now();
    let fade = Fade::out(start, Duration::ZERO, Easing::Linear);

    assert!(fade.is_done(start));
    assert_eq!(fade.opacity(start), 0.0);
}

#[test]
fn test_fade_ignores_time_before_start() {
    let start = Instant::now() + Duration::from_secs(1);
    let fade = Fade::out(start, Duration::from_millis(100), Easing::Linear);

    assert_eq!(fade.progress(Instant::now()), 0.0);
}
