//! Distant background starfield — seeded random points on a far sphere,
//! rendered as a point list that tracks the camera position.

use bytemuck::{Pod, Zeroable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::DisplayOptions;

/// Radius of the star shell, inside the far plane.
const SHELL_RADIUS: f32 = 150.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct StarVertex {
    position: [f32; 3],
    brightness: f32,
}

impl StarVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 12,
            shader_location: 1,
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

/// Renders the background starfield.
pub struct StarfieldRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Number of stars in the buffer.
    pub star_count: u32,
}

impl StarfieldRenderer {
    /// Generate the starfield from the configured seed and count.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        display: &DisplayOptions,
    ) -> Self {
        let stars =
            generate_stars(display.starfield_seed, display.starfield_count);

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Starfield Vertex Buffer"),
                contents: bytemuck::cast_slice(&stars),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Starfield Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/starfield.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Starfield Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                immediate_size: 0,
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Starfield Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[StarVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::PointList,
                    ..Default::default()
                },
                depth_stencil: Some(super::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            },
        );

        #[allow(clippy::cast_possible_truncation)]
        let star_count = stars.len() as u32;

        Self {
            pipeline,
            vertex_buffer,
            star_count,
        }
    }

    /// Record the starfield draw into an open scene pass.
    pub fn draw<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.star_count, 0..1);
    }
}

/// Deterministically scatter stars over the far shell.
fn generate_stars(seed: u64, count: u32) -> Vec<StarVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count as usize);
    for _ in 0..count {
        // Uniform direction: uniform z and azimuth
        let z: f32 = rng.random_range(-1.0..1.0);
        let theta: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        let r = (1.0 - z * z).sqrt();
        let dir = glam::Vec3::new(r * theta.cos(), z, r * theta.sin());
        stars.push(StarVertex {
            position: (dir * SHELL_RADIUS).to_array(),
            brightness: rng.random_range(0.3..1.0),
        });
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_stars() {
        let a = generate_stars(7, 64);
        let b = generate_stars(7, 64);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.brightness, y.brightness);
        }
    }

    #[test]
    fn stars_sit_on_the_shell() {
        for star in generate_stars(3, 128) {
            let len = glam::Vec3::from_array(star.position).length();
            assert!((len - SHELL_RADIUS).abs() < 1e-3);
            assert!(star.brightness >= 0.3 && star.brightness < 1.0);
        }
    }

    #[test]
    fn count_is_respected() {
        assert_eq!(generate_stars(1, 600).len(), 600);
        assert!(generate_stars(1, 0).is_empty());
    }
}
