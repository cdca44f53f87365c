// Host-side tests for viewport sizing.

use toon_scroll::viewport::*;

#[test]
fn aspect_and_surface_follow_css_size() {
    let vp = ViewportState::new(1920.0, 1080.0, 1.0, 2.0);
    let r = vp.current();
    assert!((r.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    assert_eq!((r.surface_width, r.surface_height), (1920, 1080));
}

#[test]
fn pixel_ratio_is_capped() {
    let mut vp = ViewportState::new(800.0, 600.0, 3.0, 2.0);
    assert_eq!(vp.pixel_ratio, 2.0);
    assert_eq!(vp.surface_size(), (1600, 1200));

    let r = vp.resize(800.0, 600.0, 1.5);
    assert_eq!(vp.pixel_ratio, 1.5);
    assert_eq!((r.surface_width, r.surface_height), (1200, 900));
}

#[test]
fn resize_with_same_dimensions_is_idempotent() {
    let mut vp = ViewportState::new(1024.0, 768.0, 2.0, 2.0);
    let first = vp.resize(1280.0, 720.0, 2.0);
    let snapshot = vp;
    let second = vp.resize(1280.0, 720.0, 2.0);
    assert_eq!(first, second);
    assert_eq!(vp, snapshot);
}

#[test]
fn surface_is_never_zero_sized() {
    let vp = ViewportState::new(0.0, 0.0, 1.0, 2.0);
    assert_eq!(vp.surface_size(), (1, 1));
}
