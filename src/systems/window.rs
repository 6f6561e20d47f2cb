//! Application window
//!
//! Opens the window described by [`WindowConfig`] and keeps its title in step
//! with the logo's spin angle.

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};
use crate::config::WindowConfig;

/// The window the logo is presented in
pub struct WindowSystem {
    window: Arc<Window>,
    title: SpinTitle,
}

impl WindowSystem {
    /// Open a window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let window = event_loop
            .create_window(attributes(config))
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;

        Ok(Self {
            window: Arc::new(window),
            title: SpinTitle::new(&config.title),
        })
    }

    /// Shared handle for surface creation
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Switch between borderless fullscreen and windowed
    pub fn toggle_fullscreen(&self) {
        let fullscreen = self
            .window
            .fullscreen()
            .is_none()
            .then_some(Fullscreen::Borderless(None));
        self.window.set_fullscreen(fullscreen);
    }

    /// Show `angle` (radians) in the title if its whole-degree value changed
    pub fn update_title(&mut self, angle: f32) {
        if let Some(text) = self.title.update(angle) {
            self.window.set_title(&text);
        }
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_fullscreen(config.fullscreen.then_some(Fullscreen::Borderless(None)))
}

/// Window title carrying the spin angle in whole degrees
///
/// Only produces new text when the displayed degree changes, so the title
/// is not reset every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinTitle {
    base: String,
    shown: Option<u32>,
}

impl SpinTitle {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            shown: None,
        }
    }

    /// Title text for `angle` radians, or `None` if it would not change
    pub fn update(&mut self, angle: f32) -> Option<String> {
        let degrees = angle.to_degrees().rem_euclid(360.0).round() as u32 % 360;
        if self.shown == Some(degrees) {
            return None;
        }
        self.shown = Some(degrees);
        Some(format!("{} - {}° [F fullscreen, Esc quit]", self.base, degrees))
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
