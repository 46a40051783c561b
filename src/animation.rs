//! Locomotion blend signal for the rendering side.
//!
//! Rendering only needs one scalar per agent: an idle/run blend value driven
//! by horizontal speed. Nothing here feeds back into the simulation.

use crate::vector::Vec3;

/// Smoothed idle (0) / run (1) blend value.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionBlend {
    /// Horizontal speed above which the target blend is "run".
    pub run_threshold: f64,
    /// Interpolation rate per second toward the target.
    pub smoothing: f64,
    value: f64,
}

impl Default for LocomotionBlend {
    fn default() -> Self {
        Self {
            run_threshold: 0.5,
            smoothing: 10.0,
            value: 0.0,
        }
    }
}

impl LocomotionBlend {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Target blend for a given velocity, before smoothing.
    pub fn target(&self, velocity: Vec3) -> f64 {
        if velocity.horizontal_magnitude() > self.run_threshold {
            1.0
        } else {
            0.0
        }
    }

    /// Moves the blend toward the velocity's target and returns it.
    pub fn update(&mut self, velocity: Vec3, dt: f64) -> f64 {
        let target = self.target(velocity);
        let t = (dt * self.smoothing).clamp(0.0, 1.0);
        self.value += (target - self.value) * t;
        self.value
    }
}
