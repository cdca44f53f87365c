use crate::color::{Color, ColorTarget, SharedColor};
use crate::config::SceneConfig;
use crate::constants::*;
use crate::geometry::Shape;
use glam::{Mat4, Vec3};
use rand::Rng;

/// One mesh per scroll section.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
}

impl SceneObject {
    pub fn for_section(shape: Shape, index: usize, objects_distance: f32) -> Self {
        let side = if index % 2 == 0 { 1.0 } else { -1.0 };
        Self {
            shape,
            position: Vec3::new(
                OBJECT_X_OFFSET * side,
                -objects_distance * index as f32,
                0.0,
            ),
            rotation: Vec3::ZERO,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }
}

/// Color-carrying material state read by the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToonMaterial {
    pub color: Color,
}

impl ColorTarget for ToonMaterial {
    fn apply_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    pub color: Color,
    /// Attenuated by distance, see `camera::point_sprite_world_size`.
    pub size: f32,
}

impl ColorTarget for PointsMaterial {
    fn apply_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
}

impl ParticleField {
    /// Scatter `count` points over the vertical extent of all sections.
    pub fn generate<R: Rng>(
        rng: &mut R,
        count: usize,
        objects_distance: f32,
        section_count: usize,
    ) -> Self {
        let scene_height = objects_distance * section_count as f32;
        let top = objects_distance * 0.5;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    top - rng.gen::<f32>() * scene_height,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                )
            })
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the origin toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(LIGHT_POSITION),
            color: Color::WHITE,
            intensity: LIGHT_INTENSITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub particles: ParticleField,
    pub light: DirectionalLight,
    pub objects_distance: f32,
    color: SharedColor,
    mesh_material: ToonMaterial,
    particle_material: PointsMaterial,
}

impl Scene {
    pub fn new<R: Rng>(config: &SceneConfig, rng: &mut R) -> Self {
        let objects: Vec<SceneObject> = Shape::section_shapes()
            .into_iter()
            .enumerate()
            .map(|(i, shape)| SceneObject::for_section(shape, i, config.objects_distance))
            .collect();
        let particles = ParticleField::generate(
            rng,
            config.particle_count,
            config.objects_distance,
            objects.len(),
        );
        let color = SharedColor::new(config.material_color);
        Self {
            objects,
            particles,
            light: DirectionalLight::default(),
            objects_distance: config.objects_distance,
            mesh_material: ToonMaterial { color: color.get() },
            particle_material: PointsMaterial {
                color: color.get(),
                size: PARTICLE_SIZE,
            },
            color,
        }
    }

    pub fn material_color(&self) -> Color {
        self.color.get()
    }

    pub fn mesh_material(&self) -> &ToonMaterial {
        &self.mesh_material
    }

    pub fn particle_material(&self) -> &PointsMaterial {
        &self.particle_material
    }

    /// Update the shared color and every material that follows it.
    pub fn set_material_color(&mut self, color: Color) {
        let mut targets: [&mut dyn ColorTarget; 2] =
            [&mut self.mesh_material, &mut self.particle_material];
        self.color.set(color, &mut targets);
    }

    /// Constant idle spin applied to every object.
    pub fn spin(&mut self, dt: f32) {
        for obj in &mut self.objects {
            obj.rotation.x += dt * SPIN_RATE_X;
            obj.rotation.y += dt * SPIN_RATE_Y;
        }
    }

    pub fn rotations(&self) -> Vec<Vec3> {
        self.objects.iter().map(|o| o.rotation).collect()
    }

    pub fn set_rotations(&mut self, rotations: &[Vec3]) {
        for (obj, r) in self.objects.iter_mut().zip(rotations) {
            obj.rotation = *r;
        }
    }

    pub fn model_matrices(&self) -> Vec<Mat4> {
        self.objects.iter().map(SceneObject::model_matrix).collect()
    }
}
