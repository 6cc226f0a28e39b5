//! Space-time grid renderer — a lattice of lines on the x-z plane,
//! centered on the hole at the origin.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;

/// Half-extent of the grid in steps from the origin.
pub const GRID_HALF_EXTENT: i32 = 24;
/// World-space spacing between adjacent grid lines.
pub const GRID_STEP: f32 = 1.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct GridVertex {
    position: [f32; 3],
}

impl GridVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x3,
    }];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Renders the grid as a static line list.
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Number of line vertices in the buffer.
    pub vertex_count: u32,
}

impl GridRenderer {
    /// Build the grid mesh and pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let vertices = build_grid_vertices(GRID_HALF_EXTENT, GRID_STEP);

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Grid Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Grid Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/grid.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Grid Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                immediate_size: 0,
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Grid Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[GridVertex::layout()],
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
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: Some(super::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            },
        );

        #[allow(clippy::cast_possible_truncation)]
        let vertex_count = vertices.len() as u32;

        Self {
            pipeline,
            vertex_buffer,
            vertex_count,
        }
    }

    /// Record the grid draw into an open scene pass.
    pub fn draw<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Generate line-list vertices for a square grid on the x-z plane.
fn build_grid_vertices(half_extent: i32, step: f32) -> Vec<GridVertex> {
    let extent = half_extent as f32 * step;
    let mut vertices = Vec::with_capacity(
        ((half_extent * 2 + 1) * 4) as usize,
    );
    for i in -half_extent..=half_extent {
        let offset = i as f32 * step;
        // Line parallel to z
        vertices.push(GridVertex {
            position: [offset, 0.0, -extent],
        });
        vertices.push(GridVertex {
            position: [offset, 0.0, extent],
        });
        // Line parallel to x
        vertices.push(GridVertex {
            position: [-extent, 0.0, offset],
        });
        vertices.push(GridVertex {
            position: [extent, 0.0, offset],
        });
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_vertex_count_matches_line_layout() {
        let vertices = build_grid_vertices(GRID_HALF_EXTENT, GRID_STEP);
        // (2·24 + 1) positions, two lines each, two vertices per line
        assert_eq!(vertices.len(), 49 * 4);
        assert_eq!(vertices.len() % 2, 0);
    }

    #[test]
    fn grid_lies_on_the_ground_plane() {
        for v in build_grid_vertices(4, 0.5) {
            assert_eq!(v.position[1], 0.0);
            assert!(v.position[0].abs() <= 2.0);
            assert!(v.position[2].abs() <= 2.0);
        }
    }
}
