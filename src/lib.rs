//! WebXR logo spinner application
//!
//! Configuration loading and the systems that drive the window, the spin
//! animation and GPU rendering.

pub mod config;
pub mod systems;
