//! Gravitational lensing post-process pass.
//!
//! The scene passes render into this pass's offscreen color texture; the
//! lens pass then warps that image toward the screen center with a soft
//! radial falloff and writes the result to the swapchain. Everything
//! inside the event horizon comes out black. When lensing is disabled the
//! pass degenerates to a straight copy (plus vignette).

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::lens::LensParameters;

/// Uniform block consumed by the lens fragment shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct LensUniform {
    resolution: [f32; 2],
    strength: f32,
    radius: f32,
    horizon_px: f32,
    enabled: f32,
    _pad: [f32; 2],
}

/// Fullscreen lensing pass with its own offscreen scene target.
pub struct LensPass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    params_buffer: wgpu::Buffer,
    /// Intermediate texture: the scene renders here, the lens reads it
    pub scene_texture: wgpu::Texture,
    pub scene_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl LensPass {
    /// Create the offscreen target and the fullscreen warp pipeline.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let width = context.config.width;
        let height = context.config.height;

        let (scene_texture, scene_view) =
            Self::create_scene_texture(context, width, height);

        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Lens Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniform = LensUniform {
            resolution: [width as f32, height as f32],
            strength: 0.0,
            radius: 0.0,
            horizon_px: 0.0,
            enabled: 0.0,
            _pad: [0.0; 2],
        };
        let params_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lens Params Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lens Bind Group Layout"),
                entries: &[
                    // binding 0: scene color texture
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    // binding 1: sampler
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                    // binding 2: lens uniform
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            },
        );

        let bind_group = Self::create_bind_group(
            context,
            &bind_group_layout,
            &scene_view,
            &sampler,
            &params_buffer,
        );

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Lens Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/lens.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Lens Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Lens Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
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
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            bind_group_layout,
            bind_group,
            sampler,
            params_buffer,
            scene_texture,
            scene_view,
            width,
            height,
        }
    }

    fn create_scene_texture(
        context: &RenderContext,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Lens Scene Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: context.config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());
        (texture, view)
    }

    fn create_bind_group(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        scene_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        params_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Lens Bind Group"),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(
                            scene_view,
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: params_buffer.as_entire_binding(),
                    },
                ],
            })
    }

    /// Upload this frame's lens parameters.
    pub fn update_params(
        &self,
        queue: &wgpu::Queue,
        lens: &LensParameters,
        horizon_px: f32,
    ) {
        let uniform = LensUniform {
            resolution: [self.width as f32, self.height as f32],
            strength: lens.strength,
            radius: lens.radius,
            horizon_px,
            enabled: if lens.enabled { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        };
        queue.write_buffer(
            &self.params_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );
    }

    /// Render the lensing pass: read the offscreen scene, write to
    /// `output_view` (swapchain).
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Lens Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }

    /// The offscreen view the scene passes render into.
    #[must_use]
    pub fn scene_view(&self) -> &wgpu::TextureView {
        &self.scene_view
    }

    /// Recreate the offscreen target on window resize.
    pub fn resize(&mut self, context: &RenderContext) {
        let width = context.config.width;
        let height = context.config.height;
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;

        let (scene_texture, scene_view) =
            Self::create_scene_texture(context, width, height);
        self.scene_texture = scene_texture;
        self.scene_view = scene_view;

        self.bind_group = Self::create_bind_group(
            context,
            &self.bind_group_layout,
            &self.scene_view,
            &self.sampler,
            &self.params_buffer,
        );
    }
}
