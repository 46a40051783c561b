//! World-space manual mover for a human-driven player.
//!
//! Unlike [`crate::KeyboardPolicy`], which feeds the agent action branches,
//! this moves a player directly along world axes: W/S drive `-x`/`+x` and
//! A/D drive `-z`/`+z`. The player turns smoothly toward its direction of
//! travel.

use crate::action::KeyState;
use crate::vector::Vec3;

/// Pose and animation output of one manual update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualStep {
    pub position: Vec3,
    pub yaw_deg: f64,
    /// Idle (0) / run (1) animation blend.
    pub blend: f64,
}

/// Direct keyboard mover.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualMover {
    /// Travel speed in units per second.
    pub move_speed: f64,
    /// Turn interpolation rate per second.
    pub rotation_speed: f64,
    /// Input magnitude above which the run animation plays.
    pub run_threshold: f64,
    /// Input magnitude below which the player stays put.
    pub dead_zone: f64,
}

impl Default for ManualMover {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 10.0,
            run_threshold: 0.5,
            dead_zone: 0.1,
        }
    }
}

impl ManualMover {
    /// World-space input direction. Diagonals are normalized to unit length.
    pub fn direction(keys: &KeyState) -> Vec3 {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        let dir = Vec3::new(axis(keys.w, keys.s), 0.0, axis(keys.a, keys.d));
        if dir.length() > 1.0 {
            dir.normalized()
        } else {
            dir
        }
    }

    /// Advances the player by `dt` seconds under the held keys.
    pub fn update(&self, position: Vec3, yaw_deg: f64, keys: &KeyState, dt: f64) -> ManualStep {
        let dir = Self::direction(keys);
        let speed = dir.length();
        let blend = if speed > self.run_threshold { 1.0 } else { 0.0 };

        if speed <= self.dead_zone {
            return ManualStep {
                position,
                yaw_deg,
                blend,
            };
        }

        let target = dir.x.atan2(dir.z).to_degrees();
        // Shortest signed turn toward the target, in (-180, 180].
        let delta = 180.0 - (180.0 - (target - yaw_deg)).rem_euclid(360.0);
        let t = (self.rotation_speed * dt).clamp(0.0, 1.0);

        ManualStep {
            position: position + dir * (self.move_speed * dt),
            yaw_deg: (yaw_deg + delta * t).rem_euclid(360.0),
            blend,
        }
    }
}
