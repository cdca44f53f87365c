// Host-side tests for query-string configuration.

use toon_scroll::color::Color;
use toon_scroll::config::*;

#[test]
fn defaults_match_the_page() {
    let c = SceneConfig::default();
    assert_eq!(c.objects_distance, 4.0);
    assert_eq!(c.particle_count, 200);
    assert_eq!(c.material_color.to_hex(), "#ffeded");
    assert_eq!(c.gradient_url, "textures/gradients/3.png");
    assert_eq!(c.camera_smoothing, CameraSmoothing::PerFrame);
    assert_eq!(c.max_pixel_ratio, 2.0);
}

#[test]
fn query_overrides_known_keys() {
    let mut c = SceneConfig::default();
    let errors = c.apply_query(
        "?color=ff0000&smoothing=exponential&particles=50&distance=5&gradient=textures/gradients/5.jpg",
    );
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(c.material_color, Color::new(1.0, 0.0, 0.0));
    assert_eq!(c.camera_smoothing, CameraSmoothing::Exponential);
    assert_eq!(c.particle_count, 50);
    assert_eq!(c.objects_distance, 5.0);
    assert_eq!(c.gradient_url, "textures/gradients/5.jpg");
}

#[test]
fn bad_values_keep_defaults() {
    let mut c = SceneConfig::default();
    let errors = c.apply_query("particles=abc&distance=-1&smoothing=fast&color=zz&gradient=");
    assert_eq!(errors.len(), 5);
    assert!(matches!(errors[3], ConfigError::Color(_)));
    assert_eq!(c, SceneConfig::default());
}

#[test]
fn unknown_keys_and_empty_query_are_ignored() {
    let mut c = SceneConfig::default();
    assert!(c.apply_query("").is_empty());
    assert!(c.apply_query("?").is_empty());
    assert!(c.apply_query("utm_source=mail&&debug").is_empty());
    assert_eq!(c, SceneConfig::default());
}
