use crate::gradient::GradientRamp;
use crate::scene::Scene;
use crate::state::FrameSnapshot;
use glam::Mat4;
use web_sys as web;

mod helpers;
mod points;
mod targets;
mod toon;

use points::{create_points_resources, PointsResources};
use targets::DepthTarget;
use toon::{GpuMesh, ObjectUniforms};

// Shaders bundled as string constants
pub static TOON_WGSL: &str = include_str!("../shaders/toon.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_right: [f32; 4], // w = particle world size
    camera_up: [f32; 4],
    light_dir: [f32; 4], // w = intensity
    light_color: [f32; 4],
    mesh_color: [f32; 4],
    particle_color: [f32; 4],
}

impl SceneUniforms {
    fn from_snapshot(s: &FrameSnapshot) -> Self {
        let rgb1 = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        Self {
            view_proj: s.view_proj.to_cols_array_2d(),
            camera_right: s.camera_right.extend(s.particle_world_size).to_array(),
            camera_up: s.camera_up.extend(0.0).to_array(),
            light_dir: s.light_direction.extend(s.light_intensity).to_array(),
            light_color: rgb1(s.light_color.to_linear()),
            // both materials are written from the same snapshot in one upload
            mesh_color: rgb1(s.mesh_color.to_linear()),
            particle_color: rgb1(s.particle_color.to_linear()),
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the swapchain texture; differs from config.format on web
    view_format: wgpu::TextureFormat,
    depth: DepthTarget,

    scene_bgl: wgpu::BindGroupLayout,
    scene_uniforms: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    gradient_sampler: wgpu::Sampler,
    gradient_tex: wgpu::Texture,
    gradient_view: wgpu::TextureView,

    toon_pipeline: wgpu::RenderPipeline,
    meshes: Vec<GpuMesh>,
    points: PointsResources,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        scene: &Scene,
        ramp: &GradientRamp,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let view_format = format.add_srgb_suffix();
        // transparent canvas so the page background shows through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?} alpha={:?}",
            width,
            height,
            format,
            view_format,
            alpha_mode
        );

        let depth = DepthTarget::new(&device, width, height);

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let gradient_sampler = helpers::create_nearest_sampler(&device);
        let (gradient_tex, gradient_view) =
            helpers::create_gradient_texture(&device, &queue, ramp);
        let scene_bg = create_scene_bind_group(
            &device,
            &scene_bgl,
            &scene_uniforms,
            &gradient_view,
            &gradient_sampler,
        );

        let object_bgl = toon::create_object_bgl(&device);
        let toon_pipeline =
            toon::create_toon_pipeline(&device, &scene_bgl, &object_bgl, view_format);
        let meshes = scene
            .objects
            .iter()
            .enumerate()
            .map(|(i, obj)| {
                let label = format!("section_mesh_{i}");
                GpuMesh::new(&device, &object_bgl, &label, &obj.shape.build())
            })
            .collect();
        let points =
            create_points_resources(&device, &scene_bgl, view_format, &scene.particles.positions);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth,
            scene_bgl,
            scene_uniforms,
            scene_bg,
            gradient_sampler,
            gradient_tex,
            gradient_view,
            toon_pipeline,
            meshes,
            points,
            width,
            height,
        })
    }

    /// Swap in a newly decoded gradient ramp.
    pub fn set_gradient(&mut self, ramp: &GradientRamp) {
        (self.gradient_tex, self.gradient_view) =
            helpers::create_gradient_texture(&self.device, &self.queue, ramp);
        self.scene_bg = create_scene_bind_group(
            &self.device,
            &self.scene_bgl,
            &self.scene_uniforms,
            &self.gradient_view,
            &self.gradient_sampler,
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, snapshot: &FrameSnapshot) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        self.queue.write_buffer(
            &self.scene_uniforms,
            0,
            bytemuck::bytes_of(&SceneUniforms::from_snapshot(snapshot)),
        );
        for (mesh, model) in self.meshes.iter().zip(&snapshot.models) {
            write_object_uniforms(&self.queue, mesh, model);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.toon_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            for mesh in &self.meshes {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            if self.points.count > 0 {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_bind_group(0, &self.scene_bg, &[]);
                rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.points.count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn write_object_uniforms(queue: &wgpu::Queue, mesh: &GpuMesh, model: &Mat4) {
    let u = ObjectUniforms {
        model: model.to_cols_array_2d(),
    };
    queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&u));
}

fn create_scene_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    gradient_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(gradient_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
