//! xrlogo - spinning WebXR logo
//!
//! Opens a window and renders the four-fin logo turning about its vertical axis.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use xrlogo::config::AppConfig;
use xrlogo::systems::{RenderSystem, SpinSystem, WindowSystem};
use xrlogo_core::LogoParams;
use xrlogo_render::RenderError;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Validated outline dimensions
    params: LogoParams,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    spin: SpinSystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let params = match config.logo.validate() {
            Ok(()) => config.logo,
            Err(e) => {
                log::warn!("Invalid logo parameters: {}. Using defaults.", e);
                LogoParams::WEBXR
            }
        };
        let spin = SpinSystem::new(config.spinner.spin_speed);

        Self {
            config,
            params,
            window: None,
            render: None,
            spin,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            &self.config.spinner,
            self.config.camera.to_camera(),
            &self.params,
            self.config.window.vsync,
        );

        match render {
            Ok(render) => {
                window.request_redraw();
                self.window = Some(window);
                self.render = Some(render);
            }
            Err(e) => {
                log::error!("Failed to build logo: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::KeyF) => {
                        if let Some(window) = &self.window {
                            window.toggle_fullscreen();
                        }
                    }
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(render)) = (&mut self.window, &mut self.render) else {
                    return;
                };

                self.spin.update(render.spinner_mut());
                window.update_title(render.spinner().logo_group.transform.rotation.y);

                match render.render_frame() {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        log::debug!("Surface lost, reconfigured");
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => log::warn!("{}", e),
                }

                // Request next frame
                window.request_redraw();
            }

            _ => {}
        }
    }
}

fn main() {
    // Config comes first so it can set the default log level
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting xrlogo");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
