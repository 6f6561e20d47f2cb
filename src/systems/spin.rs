//! Spin animation system
//!
//! Turns the logo group about +Y at a constant rate, using the frame's
//! delta time.

use std::time::Instant;
use xrlogo_core::{SceneNode, LogoSpinner};

/// Upper bound on a single frame step, in seconds
const MAX_DT: f32 = 0.25;

/// Advances the logo's rotation each frame
pub struct SpinSystem {
    /// Radians per second
    speed: f32,
    last_frame: Instant,
}

impl SpinSystem {
    /// Create a spin system turning at `speed` radians per second
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            last_frame: Instant::now(),
        }
    }

    /// Measure the frame time and spin the group
    ///
    /// Returns the delta time that was applied.
    pub fn update<G: SceneNode>(&mut self, spinner: &mut LogoSpinner<G>) -> f32 {
        let now = Instant::now();
        // Cap dt so a stalled frame does not jump the logo around
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_DT);
        self.last_frame = now;

        self.step(spinner, dt);
        dt
    }

    /// Spin the group by a fixed time step
    pub fn step<G: SceneNode>(&self, spinner: &mut LogoSpinner<G>, dt: f32) {
        let transform = spinner.transform_mut();
        transform.rotate_y(self.speed * dt);
        // Keep the angle bounded over long runs
        transform.rotation.y = transform.rotation.y.rem_euclid(std::f32::consts::TAU);
    }

    /// Rotation speed in radians per second
    pub fn speed(&self) -> f32 {
        self.speed
    }
}
