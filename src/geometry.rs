//! Indexed triangle meshes for the three section shapes.
//!
//! Layouts follow the usual parametric constructions: a `(rows + 1) x
//! (cols + 1)` vertex grid with the seam duplicated so normals stay smooth.
//! Every triangle is counter-clockwise when seen from outside the surface.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

impl Shape {
    /// The ring, cone and knot placed at sections 0, 1 and 2.
    pub fn section_shapes() -> [Shape; 3] {
        [
            Shape::Torus {
                radius: 1.0,
                tube: 0.4,
                radial_segments: 16,
                tubular_segments: 60,
            },
            Shape::Cone {
                radius: 1.0,
                height: 2.0,
                radial_segments: 32,
            },
            Shape::TorusKnot {
                radius: 0.8,
                tube: 0.35,
                tubular_segments: 100,
                radial_segments: 16,
                p: 2,
                q: 3,
            },
        ]
    }

    pub fn build(&self) -> MeshData {
        match *self {
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => cone(radius, height, radial_segments),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }
}

/// Quad strip indices over a `(rows + 1) x (cols + 1)` vertex grid.
fn grid_indices(indices: &mut Vec<u32>, base: u32, rows: u32, cols: u32) {
    let stride = cols + 1;
    for j in 1..=rows {
        for i in 1..=cols {
            let a = base + stride * j + i - 1;
            let b = base + stride * (j - 1) + i - 1;
            let c = base + stride * (j - 1) + i;
            let d = base + stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
}

/// Swap the last two corners of every triangle.
fn reverse_winding(indices: &mut [u32]) {
    for tri in indices.chunks_exact_mut(3) {
        tri.swap(1, 2);
    }
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(p, p - center);
        }
    }
    grid_indices(&mut mesh.indices, 0, radial_segments, tubular_segments);
    mesh
}

/// Cone with its apex at `+height / 2` and a closed base.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let slope = radius / height;
    let ring = radial_segments + 1;

    // mantle: row 0 is the apex ring, row 1 the base ring
    for row in 0..=1u32 {
        let r = row as f32 * radius;
        let y = half - row as f32 * height;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            mesh.push(Vec3::new(r * s, y, r * c), Vec3::new(s, slope, c));
        }
    }
    for x in 0..radial_segments {
        let b = ring + x;
        let c = ring + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // base cap
    let centers = mesh.vertices.len() as u32;
    for _ in 0..radial_segments {
        mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y);
    }
    let rim = mesh.vertices.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (s, c) = theta.sin_cos();
        mesh.push(Vec3::new(radius * s, -half, radius * c), Vec3::NEG_Y);
    }
    for x in 0..radial_segments {
        mesh.indices
            .extend_from_slice(&[rim + x + 1, rim + x, centers + x]);
    }
    mesh
}

pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let (p, q) = (p as f32, q as f32);
    let curve = |u: f32| {
        let qu = q / p * u;
        let cs = qu.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu.sin() * 0.5,
        )
    };
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n);
        let n = b.cross(t).normalize();
        let b = b.normalize();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.push(pos, pos - p1);
        }
    }
    grid_indices(&mut mesh.indices, 0, tubular_segments, radial_segments);
    // the tube ring turns clockwise about the curve tangent
    reverse_winding(&mut mesh.indices);
    mesh
}
