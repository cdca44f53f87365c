// Host-side tests for constants and their relationships.

use toon_scroll::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_positive() {
    assert!(OBJECTS_DISTANCE > 0.0);
    assert!(OBJECT_X_OFFSET > 0.0);
    assert!(PARTICLE_SPREAD > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(SECTION_COUNT > 0);
    assert!(PARTICLE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_have_logical_relationships() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // smoothing must not overshoot at common refresh rates
    assert!(CAMERA_SMOOTH_COEF * (1.0 / 30.0) < 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_sane() {
    assert!(PULSE_DURATION_SEC > 0.0);
    assert!(PULSE_DELTA.iter().all(|d| *d > 0.0));
    assert!(SPIN_RATE_X > 0.0 && SPIN_RATE_Y > 0.0);
    assert!(LIGHT_INTENSITY > 0.0);
    assert!(FALLBACK_GRADIENT_STEPS >= 2);
}

#[test]
fn default_color_and_gradient_are_usable() {
    assert!(DEFAULT_MATERIAL_COLOR.parse::<toon_scroll::color::Color>().is_ok());
    assert!(DEFAULT_GRADIENT_URL.ends_with(".png"));
}
