//! Core types for the soccer environment.
//!
//! Defines teams, playing positions and per-position movement profiles
//! used throughout the multi-agent system.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Team membership. Fixed for an agent's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Team {
    Blue,
    Purple,
}

impl Team {
    /// Returns both teams in order.
    pub fn all() -> [Team; 2] {
        [Team::Blue, Team::Purple]
    }

    /// Returns the index of this team (0=Blue, 1=Purple).
    pub fn index(&self) -> usize {
        match self {
            Team::Blue => 0,
            Team::Purple => 1,
        }
    }

    /// The other team.
    pub fn opponent(&self) -> Team {
        match self {
            Team::Blue => Team::Purple,
            Team::Purple => Team::Blue,
        }
    }

    /// Sign applied to the random reset yaw so the teams face each other.
    pub fn rotation_sign(&self) -> f64 {
        match self {
            Team::Blue => 1.0,
            Team::Purple => -1.0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Blue => write!(f, "blue"),
            Team::Purple => write!(f, "purple"),
        }
    }
}

/// Playing position, which determines observation layout, speed profile
/// and reward shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Position {
    Striker,
    Goalie,
    Defender,
    Generic,
}

impl Position {
    /// Returns all positions in order.
    pub fn all() -> [Position; 4] {
        [
            Position::Striker,
            Position::Goalie,
            Position::Defender,
            Position::Generic,
        ]
    }

    /// Default movement speeds for this position.
    ///
    /// Reference values; per-run overrides go through [`crate::config::SoccerConfig`].
    pub fn default_speed_profile(&self) -> SpeedProfile {
        match self {
            Position::Goalie => SpeedProfile::new(1.0, 1.0),
            Position::Striker => SpeedProfile::new(0.3, 1.3),
            Position::Defender => SpeedProfile::new(0.5, 1.0),
            Position::Generic => SpeedProfile::new(0.3, 1.0),
        }
    }

    /// Name of the trained behavior that drives agents in this position.
    pub fn behavior_name(&self) -> &'static str {
        match self {
            Position::Striker => "StrikerAI",
            Position::Goalie => "GoalieAI",
            Position::Defender => "DefenderAI",
            Position::Generic => "GenericAI",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Striker => write!(f, "striker"),
            Position::Goalie => write!(f, "goalie"),
            Position::Defender => write!(f, "defender"),
            Position::Generic => write!(f, "generic"),
        }
    }
}

/// Lateral and forward speed scales applied to movement intents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedProfile {
    pub lateral: f64,
    pub forward: f64,
}

impl SpeedProfile {
    pub fn new(lateral: f64, forward: f64) -> Self {
        Self { lateral, forward }
    }
}
