//! Configuration for the soccer environment and its reward shaping.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SoccerError};
use crate::types::{Position, SpeedProfile};
use crate::vector::Vec3;

/// Configuration for the soccer environment.
///
/// Controls episode limits, scoring, movement dynamics, reset placement
/// and reward shaping thresholds. All values are fixed at initialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SoccerConfig {
    // --- Episode ---
    /// Steps before the scene is interrupted and reset (0 disables the cap).
    pub max_environment_steps: u32,
    /// Per-agent step limit, used for the existential reward when the
    /// episode cap is disabled (0 = unlimited).
    pub max_agent_steps: u32,
    /// Score that ends the game for either team.
    pub score_to_win: u32,

    // --- Reward shaping ---
    /// Ball distance under which an agent is considered to possess it.
    pub possession_distance: f64,
    /// Dot-product threshold for the defender interpose bonus (strict).
    pub interpose_threshold: f64,
    /// Per-step bonus for a well-placed defender.
    pub interpose_bonus: f64,
    /// Added to the striker's goal distance before inverting.
    pub striker_goal_offset: f64,
    /// Added to the goalie's goal distance before inverting.
    pub goalie_goal_offset: f64,

    // --- Movement ---
    /// Per-position speed overrides; missing entries use the defaults.
    pub speeds: HashMap<Position, SpeedProfile>,
    /// Multiplier turning a movement direction into a velocity change.
    pub move_force_scale: f64,
    /// Yaw rate in degrees per second.
    pub rotation_rate_deg: f64,
    /// Fixed simulation time step in seconds.
    pub fixed_delta_time: f64,
    /// Force applied to the ball by an armed kick.
    pub kick_power: f64,

    // --- Reset placement ---
    /// Lower bound of the random reset yaw, in degrees.
    pub reset_yaw_min_deg: f64,
    /// Upper bound of the random reset yaw, in degrees.
    pub reset_yaw_max_deg: f64,
    /// Ball position at scene reset.
    pub ball_start: Vec3,
    /// Spawn height forced onto every agent's initial position.
    pub agent_spawn_height: f64,
    /// Jitter the ball's reset position on `x`/`z`. Off by default.
    pub randomize_ball_reset: bool,
    pub ball_reset_jitter: f64,
    /// Jitter each agent's reset position on `x`. Off by default.
    pub randomize_agent_reset: bool,
    pub agent_reset_jitter_x: f64,
}

impl SoccerConfig {
    /// Returns the speed profile for a given position.
    pub fn speed_for(&self, position: Position) -> SpeedProfile {
        self.speeds
            .get(&position)
            .copied()
            .unwrap_or_else(|| position.default_speed_profile())
    }

    /// Magnitude ε of the per-step existential reward.
    ///
    /// `1 / max_environment_steps`, falling back to `1 / max_agent_steps`
    /// when the episode cap is disabled, and to zero when both are.
    pub fn existential(&self) -> f64 {
        if self.max_environment_steps > 0 {
            1.0 / self.max_environment_steps as f64
        } else if self.max_agent_steps > 0 {
            1.0 / self.max_agent_steps as f64
        } else {
            0.0
        }
    }

    /// Yaw change in degrees for one fixed step of rotation.
    pub fn yaw_step_deg(&self) -> f64 {
        self.rotation_rate_deg * self.fixed_delta_time
    }

    /// Checks that the configuration is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.score_to_win == 0 {
            return Err(SoccerError::InvalidConfig(
                "score_to_win must be at least 1".into(),
            ));
        }
        if self.possession_distance <= 0.0 {
            return Err(SoccerError::InvalidConfig(format!(
                "possession_distance must be positive, got {}",
                self.possession_distance
            )));
        }
        if !(-1.0..=1.0).contains(&self.interpose_threshold) {
            return Err(SoccerError::InvalidConfig(format!(
                "interpose_threshold must lie in [-1, 1], got {}",
                self.interpose_threshold
            )));
        }
        if self.striker_goal_offset <= 0.0 || self.goalie_goal_offset <= 0.0 {
            return Err(SoccerError::InvalidConfig(
                "goal distance offsets must be positive".into(),
            ));
        }
        if self.fixed_delta_time <= 0.0 {
            return Err(SoccerError::InvalidConfig(format!(
                "fixed_delta_time must be positive, got {}",
                self.fixed_delta_time
            )));
        }
        if self.reset_yaw_min_deg > self.reset_yaw_max_deg {
            return Err(SoccerError::InvalidConfig(format!(
                "reset yaw range is inverted: [{}, {}]",
                self.reset_yaw_min_deg, self.reset_yaw_max_deg
            )));
        }
        if self.ball_reset_jitter < 0.0 || self.agent_reset_jitter_x < 0.0 {
            return Err(SoccerError::InvalidConfig(
                "reset jitter must be non-negative".into(),
            ));
        }
        for (position, profile) in &self.speeds {
            if profile.forward < 0.0 || profile.lateral < 0.0 {
                return Err(SoccerError::InvalidConfig(format!(
                    "negative speed for {}",
                    position
                )));
            }
        }
        Ok(())
    }
}

impl Default for SoccerConfig {
    fn default() -> Self {
        let speeds = Position::all()
            .into_iter()
            .map(|p| (p, p.default_speed_profile()))
            .collect();

        Self {
            max_environment_steps: 25_000,
            max_agent_steps: 0,
            score_to_win: 7,
            possession_distance: 1.5,
            interpose_threshold: 0.8,
            interpose_bonus: 0.001,
            striker_goal_offset: 0.1,
            goalie_goal_offset: 1.0,
            speeds,
            move_force_scale: 4.0,
            rotation_rate_deg: 100.0,
            fixed_delta_time: 0.02,
            kick_power: 2000.0,
            reset_yaw_min_deg: 80.0,
            reset_yaw_max_deg: 100.0,
            ball_start: Vec3::new(0.0, 0.5, 0.0),
            agent_spawn_height: 0.5,
            randomize_ball_reset: false,
            ball_reset_jitter: 2.5,
            randomize_agent_reset: false,
            agent_reset_jitter_x: 5.0,
        }
    }
}
