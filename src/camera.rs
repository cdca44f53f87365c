use crate::config::CameraSmoothing;
use crate::constants::*;
use crate::input::PointerState;
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera with no rotation, looking down -Z.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Position relative to the rig group.
    pub local: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            local: Vec3::new(0.0, 0.0, CAMERA_Z),
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
}

/// Camera nested in a group that only translates vertically.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub group_y: f32,
    pub camera: Camera,
    pub smoothing: CameraSmoothing,
}

impl CameraRig {
    pub fn new(aspect: f32, smoothing: CameraSmoothing) -> Self {
        Self {
            group_y: 0.0,
            camera: Camera::new(aspect),
            smoothing,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    /// Per-frame update: scroll maps directly onto the group, the pointer
    /// pulls the camera toward a parallax target.
    pub fn update(
        &mut self,
        dt: f32,
        scroll_y: f32,
        viewport_height: f32,
        objects_distance: f32,
        pointer: &PointerState,
    ) {
        self.group_y = -scroll_y / viewport_height * objects_distance;

        let target = parallax_target(pointer);
        let alpha = smoothing_factor(self.smoothing, dt);
        let local = self.camera.local.truncate();
        let next = local + (target - local) * alpha;
        self.camera.local.x = next.x;
        self.camera.local.y = next.y;
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, self.group_y, 0.0) + self.camera.local
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }
}

#[inline]
pub fn parallax_target(pointer: &PointerState) -> Vec2 {
    Vec2::new(pointer.x * PARALLAX_COEF, -pointer.y * PARALLAX_COEF)
}

#[inline]
pub fn smoothing_factor(mode: CameraSmoothing, dt: f32) -> f32 {
    match mode {
        CameraSmoothing::PerFrame => CAMERA_SMOOTH_COEF * dt,
        CameraSmoothing::Exponential => 1.0 - (-CAMERA_SMOOTH_COEF * dt).exp(),
    }
}

/// World-space edge length of a point sprite so that it covers
/// `size * (viewport_height / 2) / depth` pixels, like attenuated GL points.
#[inline]
pub fn point_sprite_world_size(size: f32, fovy_radians: f32) -> f32 {
    size * (fovy_radians * 0.5).tan()
}
