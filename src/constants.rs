//! Scene layout, motion and rendering tuning constants.

// Scene layout
pub const OBJECTS_DISTANCE: f32 = 4.0; // vertical spacing between section meshes
pub const SECTION_COUNT: usize = 3;
pub const OBJECT_X_OFFSET: f32 = 2.0; // sign alternates per section, starting positive

// Particles
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 10.0; // full width of the x/z spread
pub const PARTICLE_SIZE: f32 = 0.03; // world units at unit distance

// Idle spin (radians per second)
pub const SPIN_RATE_X: f32 = 0.1;
pub const SPIN_RATE_Y: f32 = 0.12;

// Section pulse
pub const PULSE_DURATION_SEC: f32 = 1.5;
pub const PULSE_DELTA: [f32; 3] = [6.0, 3.0, 1.5]; // added to (x, y, z) rotation

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const PARALLAX_COEF: f32 = 0.2;
pub const CAMERA_SMOOTH_COEF: f32 = 0.05;

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Lighting
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 3.0;

// Material
pub const DEFAULT_MATERIAL_COLOR: &str = "#ffeded";
pub const DEFAULT_GRADIENT_URL: &str = "textures/gradients/3.png";
pub const FALLBACK_GRADIENT_STEPS: u32 = 3;
