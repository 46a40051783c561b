//! Discrete action decoding and motion intents.
//!
//! Every agent acts through three independent branches of three codes each:
//! longitudinal move, lateral move and yaw rotation. Code 0 is a no-op,
//! code 1 is forward / right / turn-left and code 2 the opposite.

use crate::config::SoccerConfig;
use crate::error::{Result, SoccerError};
use crate::types::SpeedProfile;
use crate::vector::Vec3;

/// Number of codes in each action branch.
pub const BRANCH_SIZES: [usize; 3] = [3, 3, 3];

/// One decoded action branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisCode {
    #[default]
    Idle,
    Positive,
    Negative,
}

impl AxisCode {
    /// Decodes a raw branch code.
    pub fn from_code(code: usize, branch: &'static str) -> Result<Self> {
        match code {
            0 => Ok(AxisCode::Idle),
            1 => Ok(AxisCode::Positive),
            2 => Ok(AxisCode::Negative),
            _ => Err(SoccerError::InvalidActionCode { branch, code }),
        }
    }

    pub fn code(&self) -> usize {
        match self {
            AxisCode::Idle => 0,
            AxisCode::Positive => 1,
            AxisCode::Negative => 2,
        }
    }
}

/// A full three-branch action for one agent and one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscreteAction {
    pub forward: AxisCode,
    pub lateral: AxisCode,
    pub rotate: AxisCode,
}

impl DiscreteAction {
    pub const IDLE: DiscreteAction = DiscreteAction {
        forward: AxisCode::Idle,
        lateral: AxisCode::Idle,
        rotate: AxisCode::Idle,
    };

    pub fn new(forward: AxisCode, lateral: AxisCode, rotate: AxisCode) -> Self {
        Self {
            forward,
            lateral,
            rotate,
        }
    }

    /// Decodes `[forward, lateral, rotate]` raw codes.
    pub fn from_codes(codes: [usize; 3]) -> Result<Self> {
        Ok(Self {
            forward: AxisCode::from_code(codes[0], "forward")?,
            lateral: AxisCode::from_code(codes[1], "lateral")?,
            rotate: AxisCode::from_code(codes[2], "rotate")?,
        })
    }

    pub fn codes(&self) -> [usize; 3] {
        [self.forward.code(), self.lateral.code(), self.rotate.code()]
    }

    /// Maps held movement keys to an action for manual control.
    ///
    /// W/S drive forward/backward, E/Q strafe right/left and A/D turn.
    /// When both keys of a pair are held the second one wins.
    pub fn from_keys(keys: &KeyState) -> Self {
        let mut action = DiscreteAction::IDLE;
        if keys.w {
            action.forward = AxisCode::Positive;
        }
        if keys.s {
            action.forward = AxisCode::Negative;
        }
        if keys.a {
            action.rotate = AxisCode::Positive;
        }
        if keys.d {
            action.rotate = AxisCode::Negative;
        }
        if keys.e {
            action.lateral = AxisCode::Positive;
        }
        if keys.q {
            action.lateral = AxisCode::Negative;
        }
        action
    }
}

/// Held state of the manual-control keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub w: bool,
    pub s: bool,
    pub a: bool,
    pub d: bool,
    pub q: bool,
    pub e: bool,
}

/// Movement requested by an action, to be carried out by the physics side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionIntent {
    /// Speed-scaled direction of travel in pitch space.
    pub direction: Vec3,
    /// Yaw change in degrees for this tick.
    pub yaw_delta_deg: f64,
    /// Whether the forward code armed a kick this tick.
    pub kick_armed: bool,
}

impl MotionIntent {
    /// Instantaneous velocity change to apply to the agent's body.
    pub fn velocity_change(&self, config: &SoccerConfig) -> Vec3 {
        self.direction * config.move_force_scale
    }
}

/// Turns discrete actions into motion intents.
pub struct ActionInterpreter;

impl ActionInterpreter {
    /// Interprets an action for an agent facing `yaw_deg`.
    ///
    /// A non-idle lateral code replaces the longitudinal direction of the
    /// same tick; the kick armed by a forward code is kept either way.
    pub fn interpret(
        action: &DiscreteAction,
        yaw_deg: f64,
        speeds: SpeedProfile,
        config: &SoccerConfig,
    ) -> MotionIntent {
        let forward = Vec3::forward_from_yaw(yaw_deg);
        let right = Vec3::right_from_yaw(yaw_deg);
        let mut intent = MotionIntent::default();

        match action.forward {
            AxisCode::Positive => {
                intent.direction = forward * speeds.forward;
                intent.kick_armed = true;
            }
            AxisCode::Negative => intent.direction = forward * -speeds.forward,
            AxisCode::Idle => {}
        }

        match action.lateral {
            AxisCode::Positive => intent.direction = right * speeds.lateral,
            AxisCode::Negative => intent.direction = right * -speeds.lateral,
            AxisCode::Idle => {}
        }

        intent.yaw_delta_deg = match action.rotate {
            AxisCode::Positive => -config.yaw_step_deg(),
            AxisCode::Negative => config.yaw_step_deg(),
            AxisCode::Idle => 0.0,
        };

        intent
    }
}
