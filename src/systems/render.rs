//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Building the logo on the device
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use xrlogo_core::{LogoParams, LogoSpinner};
use xrlogo_render::{context::RenderContext, Camera, GpuGroup, LogoRenderer, RenderError};
use crate::config::{RenderingConfig, SpinnerConfig};

/// Manages GPU rendering of the logo
pub struct RenderSystem {
    context: RenderContext,
    renderer: LogoRenderer,
    spinner: LogoSpinner<GpuGroup>,
    camera: Camera,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config, building the logo on the GPU
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        spinner_config: &SpinnerConfig,
        camera: Camera,
        params: &LogoParams,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let mut renderer = LogoRenderer::new(&context.device, context.config.format);

        let spinner = {
            let mut host = renderer
                .host(&context.device)
                .with_tolerance(spinner_config.curve_tolerance);
            LogoSpinner::new(&mut host, params)?
        };

        renderer.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        log::info!(
            "Built logo: {} fins, {} pipeline(s)",
            spinner.logo_group.children.len(),
            renderer.pipeline_count()
        );

        Ok(Self {
            context,
            renderer,
            spinner,
            camera,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.renderer.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// The assembled logo
    pub fn spinner(&self) -> &LogoSpinner<GpuGroup> {
        &self.spinner
    }

    /// The assembled logo, for animating its group
    pub fn spinner_mut(&mut self) -> &mut LogoSpinner<GpuGroup> {
        &mut self.spinner
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let view_matrix = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(self.context.aspect_ratio());

        self.renderer.update_camera(&self.context.queue, projection);
        self.spinner
            .logo_group
            .sync_uniforms(&self.context.queue, &view_matrix);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(e) => return Err(RenderError::from(e)),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.renderer.render(
            &mut encoder,
            &view,
            &self.spinner.logo_group,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        )?;

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
