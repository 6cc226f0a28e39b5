//! Luminous scene bodies: the four star spheres and the accretion disk.
//!
//! Stars are lit spheres; the disk is an emissive, alpha-blended annulus
//! lying flat in the x-z plane whose brightness swirls over time.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;

/// Positions and colors of the static star bodies.
const STARS: [([f32; 3], [f32; 3]); 4] = [
    ([6.5, 2.2, -9.0], [1.0, 0.95, 0.2]),  // yellow
    ([-7.0, 3.0, -12.0], [1.0, 0.4, 0.3]), // red/orange
    ([10.0, 1.0, -14.0], [0.6, 0.8, 1.0]), // blue-white
    ([-4.0, -1.0, -8.0], [1.0, 1.0, 1.0]), // white
];

/// Star sphere radius in world units.
const STAR_RADIUS: f32 = 0.6;
/// Accretion disk inner and outer radii.
const DISK_RADII: (f32, f32) = (2.5, 6.5);
/// Disk opacity.
const DISK_ALPHA: f32 = 0.7;

const SPHERE_SLICES: u32 = 32;
const SPHERE_STACKS: u32 = 24;
const DISK_SEGMENTS: u32 = 128;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct BodyVertex {
    position: [f32; 3],
    normal: [f32; 3],
    color: [f32; 4],
    emissive: f32,
}

impl BodyVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 12,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 24,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x4,
        },
        wgpu::VertexAttribute {
            offset: 40,
            shader_location: 3,
            format: wgpu::VertexFormat::Float32,
        },
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Per-frame shading parameters for the bodies pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct SceneParams {
    light_pos: [f32; 3],
    time: f32,
}

/// Renders the star spheres and accretion disk from a static mesh.
pub struct BodiesRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    params_buffer: wgpu::Buffer,
    params_bind_group: wgpu::BindGroup,
    /// Number of mesh indices.
    pub index_count: u32,
}

impl BodiesRenderer {
    /// Build the star and disk geometry and the shared pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let (vertices, indices) = build_scene_mesh();

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Bodies Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Bodies Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let params = SceneParams {
            light_pos: [0.0, 5.0, 5.0],
            time: 0.0,
        };
        let params_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Bodies Params Buffer"),
                contents: bytemuck::cast_slice(&[params]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let params_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Bodies Params Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );
        let params_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Bodies Params Bind Group"),
                    layout: &params_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: params_buffer.as_entire_binding(),
                    }],
                });

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Bodies Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/bodies.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Bodies Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &params_layout],
                immediate_size: 0,
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Bodies Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[BodyVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    // The disk annulus is visible from both sides
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(super::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            },
        );

        #[allow(clippy::cast_possible_truncation)]
        let index_count = indices.len() as u32;

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            params_buffer,
            params_bind_group,
            index_count,
        }
    }

    /// Upload the current animation time.
    pub fn update(&self, queue: &wgpu::Queue, time: f32) {
        let params = SceneParams {
            light_pos: [0.0, 5.0, 5.0],
            time,
        };
        queue.write_buffer(
            &self.params_buffer,
            0,
            bytemuck::cast_slice(&[params]),
        );
    }

    /// Record the bodies draw into an open scene pass.
    pub fn draw<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_bind_group(1, &self.params_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Build the combined star + disk mesh.
fn build_scene_mesh() -> (Vec<BodyVertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for (pos, color) in STARS {
        append_sphere(
            &mut vertices,
            &mut indices,
            Vec3::from_array(pos),
            STAR_RADIUS,
            [color[0], color[1], color[2], 1.0],
        );
    }
    append_disk(&mut vertices, &mut indices);

    (vertices, indices)
}

/// Append a UV sphere centered at `center` with lit (non-emissive)
/// shading.
fn append_sphere(
    vertices: &mut Vec<BodyVertex>,
    indices: &mut Vec<u32>,
    center: Vec3,
    radius: f32,
    color: [f32; 4],
) {
    #[allow(clippy::cast_possible_truncation)]
    let base = vertices.len() as u32;

    for stack in 0..=SPHERE_STACKS {
        let phi = std::f32::consts::PI * stack as f32 / SPHERE_STACKS as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..=SPHERE_SLICES {
            let theta =
                std::f32::consts::TAU * slice as f32 / SPHERE_SLICES as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let normal =
                Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            vertices.push(BodyVertex {
                position: (center + normal * radius).to_array(),
                normal: normal.to_array(),
                color,
                emissive: 0.0,
            });
        }
    }

    let ring = SPHERE_SLICES + 1;
    for stack in 0..SPHERE_STACKS {
        for slice in 0..SPHERE_SLICES {
            let a = base + stack * ring + slice;
            let b = a + ring;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
}

/// Append the flat accretion disk annulus in the x-z plane.
fn append_disk(vertices: &mut Vec<BodyVertex>, indices: &mut Vec<u32>) {
    #[allow(clippy::cast_possible_truncation)]
    let base = vertices.len() as u32;
    let (inner, outer) = DISK_RADII;
    let color = [1.0, 0.8, 0.2, DISK_ALPHA];
    let normal = [0.0, 1.0, 0.0];

    for i in 0..=DISK_SEGMENTS {
        let theta = std::f32::consts::TAU * i as f32 / DISK_SEGMENTS as f32;
        let (sin, cos) = theta.sin_cos();
        vertices.push(BodyVertex {
            position: [cos * inner, 0.0, sin * inner],
            normal,
            color,
            emissive: 1.0,
        });
        vertices.push(BodyVertex {
            position: [cos * outer, 0.0, sin * outer],
            normal,
            color,
            emissive: 1.0,
        });
    }

    for i in 0..DISK_SEGMENTS {
        let a = base + i * 2;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_indices_stay_in_bounds() {
        let (vertices, indices) = build_scene_mesh();
        assert_eq!(indices.len() % 3, 0);
        let max = indices.iter().copied().max().unwrap();
        assert!((max as usize) < vertices.len());
    }

    #[test]
    fn sphere_normals_are_unit_length() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        append_sphere(
            &mut vertices,
            &mut indices,
            Vec3::new(1.0, 2.0, 3.0),
            0.6,
            [1.0, 1.0, 1.0, 1.0],
        );
        for v in &vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
            // Position sits radius away from the center along the normal
            let p = Vec3::from_array(v.position);
            assert!((p - Vec3::new(1.0, 2.0, 3.0) - n * 0.6).length() < 1e-5);
        }
    }

    #[test]
    fn disk_ring_spans_the_annulus() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        append_disk(&mut vertices, &mut indices);
        assert_eq!(vertices.len(), (DISK_SEGMENTS as usize + 1) * 2);
        for v in &vertices {
            let r = (v.position[0].powi(2) + v.position[2].powi(2)).sqrt();
            assert!(r >= DISK_RADII.0 - 1e-4 && r <= DISK_RADII.1 + 1e-4);
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.emissive, 1.0);
        }
    }
}
