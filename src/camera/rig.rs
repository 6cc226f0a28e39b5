use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::orbit::OrbitCamera;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// GPU-side camera resources: the perspective [`Camera`], its uniform
/// buffer, and the bind group shared by every scene pipeline.
pub struct CameraRig {
    /// Perspective camera updated from the orbit state each frame.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in all scene shaders).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,
}

impl CameraRig {
    /// Create the camera uniform buffer and bind group, with projection
    /// parameters from options and the initial pose from the orbit camera.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        orbit: &OrbitCamera,
        opts: &CameraOptions,
    ) -> Self {
        let camera = Camera {
            eye: orbit.eye(),
            target: orbit.target(),
            up: glam::Vec3::Y,
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Pull the orbit pose into the perspective camera and upload the
    /// refreshed uniform.
    pub fn update_gpu(&mut self, orbit: &OrbitCamera, queue: &wgpu::Queue) {
        self.camera.eye = orbit.eye();
        self.camera.target = orbit.target();
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }

    /// Track a window resize (projection aspect only).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }
}
