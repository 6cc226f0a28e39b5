use glam::Vec2;

use crate::camera::{CameraRig, OrbitCamera};
use crate::engine::UmbraCommand;
use crate::error::UmbraError;
use crate::frame::FrameComposer;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::renderer::{
    BodiesRenderer, GridRenderer, LensPass, OverlayPass, StarfieldRenderer,
};
use crate::scene::SceneState;
use crate::util::FrameTiming;

/// Target FPS limit
const TARGET_FPS: u32 = 300;

/// The interactive black hole rendering engine.
///
/// Owns the GPU context, the orbit camera, the scene state, and every
/// render pass. Consumers drive it with [`execute`](Self::execute) and
/// [`render`](Self::render).
pub struct UmbraEngine {
    /// GPU device, queue, and surface.
    pub context: RenderContext,
    /// Interactive orbit camera state.
    pub orbit: OrbitCamera,
    /// GPU-side camera resources.
    pub rig: CameraRig,
    /// Toggles and lens tuning values.
    pub state: SceneState,
    /// Centralized configuration.
    pub options: Options,
    /// Frame pacing and FPS tracking.
    pub frame_timing: FrameTiming,
    grid_renderer: GridRenderer,
    bodies_renderer: BodiesRenderer,
    starfield_renderer: StarfieldRenderer,
    lens_pass: LensPass,
    overlay_pass: OverlayPass,
    /// Shared depth buffer for the scene pass.
    pub depth_texture: wgpu::Texture,
    /// View over [`Self::depth_texture`].
    pub depth_view: wgpu::TextureView,
    quit_requested: bool,
}

impl UmbraEngine {
    /// Create a new engine with default options.
    ///
    /// # Errors
    ///
    /// Returns [`UmbraError::Gpu`] when GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, UmbraError> {
        Self::new_with_options(window, size, Options::default()).await
    }

    /// Create a new engine with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`UmbraError::Gpu`] when GPU initialization fails.
    pub async fn new_with_options(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, UmbraError> {
        let context = RenderContext::new(window, size).await?;

        let orbit = OrbitCamera::new(&options.camera);
        let rig = CameraRig::new(&context, &orbit, &options.camera);
        let state = SceneState::new(&options.display, &options.lens);

        let grid_renderer = GridRenderer::new(&context, &rig.layout);
        let bodies_renderer = BodiesRenderer::new(&context, &rig.layout);
        let starfield_renderer =
            StarfieldRenderer::new(&context, &rig.layout, &options.display);
        let lens_pass = LensPass::new(&context);
        let overlay_pass = OverlayPass::new(&context);

        let (depth_texture, depth_view) = Self::create_depth_texture(&context);

        let frame_timing = FrameTiming::new(TARGET_FPS);

        log::info!(
            "engine initialized: {}x{} surface, {} stars in the backdrop",
            context.config.width,
            context.config.height,
            starfield_renderer.star_count,
        );

        Ok(Self {
            context,
            orbit,
            rig,
            state,
            options,
            frame_timing,
            grid_renderer,
            bodies_renderer,
            starfield_renderer,
            lens_pass,
            overlay_pass,
            depth_texture,
            depth_view,
            quit_requested: false,
        })
    }

    fn create_depth_texture(
        context: &RenderContext,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: context.config.width,
                height: context.config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    /// Execute a single command against the engine state.
    pub fn execute(&mut self, command: UmbraCommand) {
        match command {
            UmbraCommand::RotateCamera { delta } => {
                self.orbit.apply_drag(delta.x, delta.y);
            }
            UmbraCommand::Zoom { delta } => self.orbit.apply_zoom(delta),
            UmbraCommand::ResetCamera => {
                self.orbit.reset();
                log::info!("camera reset");
            }
            UmbraCommand::ToggleGrid => {
                self.state.toggle_grid();
                log::info!("grid visible: {}", self.state.grid_visible());
            }
            UmbraCommand::ToggleLensing => {
                self.state.toggle_lensing();
                log::info!("lensing: {}", self.state.lensing_enabled());
            }
            UmbraCommand::IncreaseLensStrength => {
                self.state.increase_strength();
                log::info!("lens strength: {:.2}", self.state.lens_strength());
            }
            UmbraCommand::DecreaseLensStrength => {
                self.state.decrease_strength();
                log::info!("lens strength: {:.2}", self.state.lens_strength());
            }
            UmbraCommand::IncreaseLensRadius => {
                self.state.increase_radius();
                log::info!("lens radius: {:.2}", self.state.lens_radius());
            }
            UmbraCommand::DecreaseLensRadius => {
                self.state.decrease_radius();
                log::info!("lens radius: {:.2}", self.state.lens_radius());
            }
            UmbraCommand::Quit => {
                self.quit_requested = true;
            }
        }
    }

    /// Convenience wrapper around [`execute`](Self::execute) for drag input.
    pub fn rotate_camera(&mut self, delta: Vec2) {
        self.execute(UmbraCommand::RotateCamera { delta });
    }

    /// Whether a [`UmbraCommand::Quit`] has been executed.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; the caller is expected to resize and retry.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        let aspect = self.context.config.width as f32
            / self.context.config.height as f32;
        let params = FrameComposer::compose(
            &self.orbit,
            &self.state,
            &self.options.camera,
            aspect,
        );

        self.rig.update_gpu(&self.orbit, &self.context.queue);
        self.bodies_renderer
            .update(&self.context.queue, self.frame_timing.seconds());
        self.lens_pass.update_params(
            &self.context.queue,
            &params.lens,
            self.options.lens.horizon_radius_px,
        );
        self.overlay_pass.update_params(
            &self.context.queue,
            self.options.lens.horizon_radius_px,
        );

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();

        // Scene pass — grid, starfield, and bodies into the lens input.
        {
            let [r, g, b] = self.options.display.background_color;
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: self.lens_pass.scene_view(),
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth_view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            self.starfield_renderer.draw(&mut pass, &self.rig.bind_group);
            if params.grid_visible {
                self.grid_renderer.draw(&mut pass, &self.rig.bind_group);
            }
            self.bodies_renderer.draw(&mut pass, &self.rig.bind_group);
        }

        // Lens pass — warp the scene onto the swapchain.
        self.lens_pass.render(&mut encoder, &view);

        // Overlay pass — horizon disc and glow on top.
        self.overlay_pass.render(&mut encoder, &view);

        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();

        Ok(())
    }

    /// Resize every size-dependent resource.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.rig.resize(width, height);
            let (depth_texture, depth_view) =
                Self::create_depth_texture(&self.context);
            self.depth_texture = depth_texture;
            self.depth_view = depth_view;
            self.lens_pass.resize(&self.context);
            self.overlay_pass.resize(&self.context);
        }
    }

    /// Get a reference to the current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera subsystems.
    ///
    /// Toggle defaults and lens steps are captured by the scene state at
    /// startup; runtime option changes affect the camera and projection.
    pub fn apply_options(&mut self) {
        let co = &self.options.camera;
        self.rig.camera.fovy = co.fovy;
        self.rig.camera.znear = co.znear;
        self.rig.camera.zfar = co.zfar;
        self.orbit.apply_options(co);
    }
}
