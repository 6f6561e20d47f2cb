//! Application systems
//!
//! Window, animation and rendering concerns kept out of main.rs.

mod render;
mod spin;
mod window;

pub use render::RenderSystem;
pub use spin::SpinSystem;
pub use window::{WindowError, WindowSystem};
