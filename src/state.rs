//! Application state shared by the event handlers and the frame loop.
//!
//! Nothing here touches the browser, so the whole per-frame update can be
//! driven from host tests with explicit timestamps.

use crate::camera::{point_sprite_world_size, CameraRig};
use crate::color::Color;
use crate::config::SceneConfig;
use crate::constants::{PULSE_DELTA, PULSE_DURATION_SEC};
use crate::input::{PointerState, ScrollState, SectionChange};
use crate::scene::Scene;
use crate::tween::{Ease, PulseAnimator, RotationPulse};
use crate::viewport::{Resize, ViewportState};
use glam::{Mat4, Vec3};
use instant::Instant;
use rand::Rng;

/// Monotonic seconds since scene start.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub view_proj: Mat4,
    pub camera_right: Vec3,
    pub camera_up: Vec3,
    pub models: Vec<Mat4>,
    pub mesh_color: Color,
    pub particle_color: Color,
    pub particle_world_size: f32,
    pub light_direction: Vec3,
    pub light_color: Color,
    pub light_intensity: f32,
}

pub struct AppState {
    pub viewport: ViewportState,
    pub pointer: PointerState,
    pub scroll: ScrollState,
    pub scene: Scene,
    pub rig: CameraRig,
    pub pulses: PulseAnimator,
    previous_elapsed: f32,
}

impl AppState {
    pub fn new<R: Rng>(
        config: &SceneConfig,
        viewport: ViewportState,
        scroll_y: f32,
        rng: &mut R,
    ) -> Self {
        let scene = Scene::new(config, rng);
        let rig = CameraRig::new(viewport.aspect_ratio(), config.camera_smoothing);
        let mut scroll = ScrollState::default();
        // The page may open mid-scroll; adopt its section without a pulse.
        _ = scroll.update(scroll_y, &viewport);
        Self {
            viewport,
            pointer: PointerState::default(),
            scroll,
            scene,
            rig,
            pulses: PulseAnimator::new(),
            previous_elapsed: 0.0,
        }
    }

    pub fn handle_resize(&mut self, width: f32, height: f32, device_pixel_ratio: f64) -> Resize {
        let resize = self.viewport.resize(width, height, device_pixel_ratio);
        self.rig.set_aspect(resize.aspect_ratio);
        resize
    }

    pub fn handle_pointer(&mut self, client_x: f32, client_y: f32) {
        self.pointer.update(client_x, client_y, &self.viewport);
    }

    /// Record a scroll offset; on a section change, start the pulse for the
    /// section just entered at time `now`.
    pub fn handle_scroll(&mut self, scroll_y: f32, now: f32) -> Option<SectionChange> {
        let change = self.scroll.update(scroll_y, &self.viewport)?;
        log::info!(
            "section changed {} -> {}",
            change.previous,
            change.current
        );
        self.start_pulse(change.current, now);
        Some(change)
    }

    fn start_pulse(&mut self, section: i32, now: f32) {
        let target = match usize::try_from(section) {
            Ok(i) if i < self.scene.objects.len() => i,
            _ => {
                debug_assert!(false, "section {section} has no scene object");
                log::error!(
                    "section {} has no scene object ({} provisioned)",
                    section,
                    self.scene.objects.len()
                );
                return;
            }
        };
        self.pulses.start(RotationPulse::new(
            target,
            now,
            PULSE_DURATION_SEC,
            Ease::Power2InOut,
            Vec3::from_array(PULSE_DELTA),
        ));
    }

    pub fn set_material_color(&mut self, color: Color) {
        self.scene.set_material_color(color);
    }

    /// One frame of animation at `elapsed` seconds. Returns the delta time.
    pub fn advance(&mut self, elapsed: f32) -> f32 {
        let dt = elapsed - self.previous_elapsed;
        self.previous_elapsed = elapsed;

        let mut rotations = self.scene.rotations();
        self.pulses.tick(elapsed, &mut rotations);
        self.scene.set_rotations(&rotations);

        self.scene.spin(dt);
        self.rig.update(
            dt,
            self.scroll.scroll_y,
            self.viewport.height,
            self.scene.objects_distance,
            &self.pointer,
        );
        dt
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let view = self.rig.view_matrix();
        let mesh = self.scene.mesh_material();
        let points = self.scene.particle_material();
        let particle_world_size = point_sprite_world_size(points.size, self.rig.camera.fovy_radians);
        FrameSnapshot {
            view_proj: self.rig.view_proj(),
            camera_right: view.row(0).truncate(),
            camera_up: view.row(1).truncate(),
            models: self.scene.model_matrices(),
            mesh_color: mesh.color,
            particle_color: points.color,
            particle_world_size,
            light_direction: self.scene.light.direction(),
            light_color: self.scene.light.color,
            light_intensity: self.scene.light.intensity,
        }
    }
}
