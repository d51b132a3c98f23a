use std::time::{Duration, Instant};

use panedom::animation::collect_element_ids;
use panedom::{AnimationState, Easing, Element, Size, TransitionConfig, Transitions};

fn panel(height: u16) -> Element {
    Element::col()
        .id("root")
        .child(
            Element::col()
                .id("panel")
                .height(Size::Fixed(height))
                .transitions(Transitions::new().height(Duration::from_millis(100), Easing::Linear)),
        )
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_midpoints() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn test_easing_from_json() {
    let easing: Easing = serde_json::from_str("\"ease-in-out\"").unwrap();
    assert_eq!(easing, Easing::EaseInOut);
}

#[test]
fn test_transition_config_new() {
    let config = TransitionConfig::new(Duration::from_millis(300), Easing::EaseOut);
    assert_eq!(config.duration, Duration::from_millis(300));
    assert_eq!(config.easing, Easing::EaseOut);
    assert!(Transitions::new().height(config.duration, config.easing).has_any());
    assert!(!Transitions::new().has_any());
}

// =============================================================================
// AnimationState Tests
// =============================================================================

#[test]
fn test_first_frame_does_not_animate() {
    let mut anim = AnimationState::new();
    anim.update_at(&panel(10), Instant::now());
    assert!(!anim.has_active_transitions());
}

#[test]
fn test_height_change_interpolates() {
    let mut anim = AnimationState::new();
    let t0 = Instant::now();
    anim.update_at(&panel(0), t0);
    anim.update_at(&panel(10), t0);

    assert!(anim.has_active_transitions());
    assert_eq!(anim.height_at("panel", t0), Some(0));
    assert_eq!(anim.height_at("panel", t0 + Duration::from_millis(50)), Some(5));
    assert_eq!(anim.height_at("panel", t0 + Duration::from_millis(100)), Some(10));
}

#[test]
fn test_completed_transition_is_pruned() {
    let mut anim = AnimationState::new();
    let t0 = Instant::now();
    anim.update_at(&panel(0), t0);
    anim.update_at(&panel(10), t0);
    anim.update_at(&panel(10), t0 + Duration::from_millis(150));

    assert!(!anim.has_active_transitions());
    assert_eq!(anim.height_at("panel", t0 + Duration::from_millis(150)), None);
}

#[test]
fn test_retarget_mid_flight_starts_from_current_value() {
    let mut anim = AnimationState::new();
    let t0 = Instant::now();
    anim.update_at(&panel(0), t0);
    anim.update_at(&panel(10), t0);

    // Halfway up, collapse again
    let t1 = t0 + Duration::from_millis(50);
    anim.update_at(&panel(0), t1);

    assert_eq!(anim.height_at("panel", t1), Some(5));
    assert_eq!(anim.height_at("panel", t1 + Duration::from_millis(20)), Some(4));
    assert_eq!(anim.height_at("panel", t1 + Duration::from_millis(100)), Some(0));
}

#[test]
fn test_no_transition_without_config() {
    let mut anim = AnimationState::new();
    let root = |h| Element::col().id("plain").height(Size::Fixed(h));
    anim.update_at(&root(0), Instant::now());
    anim.update_at(&root(8), Instant::now());
    assert!(!anim.has_active_transitions());
}

#[test]
fn test_reduced_motion() {
    let mut anim = AnimationState::new();
    anim.set_reduced_motion(true);
    let t0 = Instant::now();
    anim.update_at(&panel(0), t0);
    anim.update_at(&panel(10), t0);
    assert!(!anim.has_active_transitions());
}

#[test]
fn test_cleanup_removes_missing_elements() {
    let mut anim = AnimationState::new();
    let t0 = Instant::now();
    anim.update_at(&panel(0), t0);
    anim.update_at(&panel(10), t0);

    anim.cleanup(&collect_element_ids(&Element::col().id("root")));
    assert!(!anim.has_active_transitions());
}
