// Host-side tests for the per-frame update driven with explicit timestamps.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use toon_scroll::color::Color;
use toon_scroll::config::SceneConfig;
use toon_scroll::state::AppState;
use toon_scroll::viewport::ViewportState;

fn app_at(scroll_y: f32) -> AppState {
    let viewport = ViewportState::new(1920.0, 1080.0, 1.0, 2.0);
    AppState::new(
        &SceneConfig::default(),
        viewport,
        scroll_y,
        &mut StdRng::seed_from_u64(7),
    )
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn opening_mid_page_adopts_section_without_pulse() {
    let app = app_at(2160.0);
    assert_eq!(app.scroll.current_section, 2);
    assert!(app.pulses.is_idle());
}

#[test]
fn section_change_pulses_the_entered_object() {
    let mut app = app_at(0.0);
    let change = app.handle_scroll(1080.0, 0.0).expect("section change");
    assert_eq!(change.current, 1);
    assert_eq!(app.pulses.active().len(), 1);
    assert_eq!(app.pulses.active()[0].target, 1);

    let dt = app.advance(2.0);
    assert_eq!(dt, 2.0);
    assert!(app.pulses.is_idle());

    // pulse delta plus two seconds of idle spin
    let spin = Vec3::new(0.2, 0.24, 0.0);
    assert!(approx(app.scene.objects[1].rotation, Vec3::new(6.0, 3.0, 1.5) + spin));
    assert!(approx(app.scene.objects[0].rotation, spin));
    assert!(approx(app.scene.objects[2].rotation, spin));
}

#[test]
fn staying_in_a_section_does_not_pulse() {
    let mut app = app_at(0.0);
    assert!(app.handle_scroll(200.0, 0.0).is_none());
    assert!(app.handle_scroll(400.0, 0.1).is_none());
    assert!(app.pulses.is_idle());
}

#[test]
fn quick_back_and_forth_stacks_pulses() {
    let mut app = app_at(0.0);
    app.handle_scroll(1080.0, 0.0);
    app.handle_scroll(0.0, 0.3);
    app.handle_scroll(1080.0, 0.6);
    assert_eq!(app.pulses.active().len(), 3);

    let mut t = 0.0;
    while t < 3.0 {
        t += 1.0 / 60.0;
        app.advance(t);
    }
    assert!(app.pulses.is_idle());

    let spin = Vec3::new(0.1, 0.12, 0.0) * app.scene.objects[2].rotation.x / 0.1;
    let delta = Vec3::new(6.0, 3.0, 1.5);
    assert!(approx(app.scene.objects[1].rotation, delta * 2.0 + spin));
    assert!(approx(app.scene.objects[0].rotation, delta + spin));
}

#[test]
fn camera_follows_scroll_on_next_frame() {
    let mut app = app_at(0.0);
    app.handle_scroll(540.0, 0.0);
    app.advance(0.016);
    assert_eq!(app.rig.group_y, -2.0);
}

#[test]
fn resize_updates_camera_aspect() {
    let mut app = app_at(0.0);
    let r = app.handle_resize(1000.0, 1000.0, 3.0);
    assert_eq!(r.aspect_ratio, 1.0);
    assert_eq!((r.surface_width, r.surface_height), (2000, 2000));
    assert_eq!(app.rig.camera.aspect, 1.0);
}

#[test]
fn pointer_moves_use_current_viewport() {
    let mut app = app_at(0.0);
    app.handle_pointer(1920.0, 0.0);
    assert_eq!((app.pointer.x, app.pointer.y), (0.5, -0.5));
}

#[test]
fn snapshot_keeps_materials_in_sync() {
    let mut app = app_at(0.0);
    let c = Color::from_hex("#33aa77").unwrap();
    app.set_material_color(c);
    let snap = app.snapshot();
    assert_eq!(snap.mesh_color, c);
    assert_eq!(snap.particle_color, c);
    assert_eq!(snap.models.len(), 3);
    assert_eq!(snap.light_intensity, 3.0);
}

#[test]
fn snapshot_camera_basis_is_axis_aligned() {
    let app = app_at(0.0);
    let snap = app.snapshot();
    assert!(approx(snap.camera_right, Vec3::X));
    assert!(approx(snap.camera_up, Vec3::Y));
    assert!(snap.particle_world_size > 0.0);
}

#[test]
fn snapshot_uses_rig_view_projection() {
    let mut app = app_at(0.0);
    app.handle_pointer(100.0, 900.0);
    app.handle_scroll(700.0, 0.0);
    app.advance(0.5);
    assert_eq!(app.snapshot().view_proj, app.rig.view_proj());
}
