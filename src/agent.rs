//! Agent state and per-tick action handling.

use crate::action::{ActionInterpreter, DiscreteAction, MotionIntent};
use crate::config::SoccerConfig;
use crate::types::{Position, SpeedProfile, Team};
use crate::vector::Vec3;
use crate::Id;

/// Individual end-of-episode signal for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgentSignal {
    /// The agent's episode ended (goal or game over).
    Ended { reward: f64 },
    /// The agent's episode was cut off by the step cap.
    Interrupted { reward: f64 },
}

impl AgentSignal {
    /// Episode reward finalized by this signal.
    pub fn reward(&self) -> f64 {
        match self {
            AgentSignal::Ended { reward } | AgentSignal::Interrupted { reward } => *reward,
        }
    }
}

/// State of a single player in the environment.
///
/// Team and position are fixed at creation. Kinematic fields are written by
/// the physics side and by scene resets; `kick_power` is re-armed on every
/// action step.
#[derive(Debug, Clone)]
pub struct AgentState {
    /// Unique identifier for this agent.
    pub id: Id,
    pub team: Team,
    pub position: Position,
    /// Position relative to the pitch.
    pub local_position: Vec3,
    pub velocity: Vec3,
    /// Facing, in degrees about the up axis.
    pub yaw_deg: f64,
    pub speeds: SpeedProfile,
    /// 1 when the last forward action armed a kick, else 0.
    pub kick_power: f64,
    /// Where the agent is placed on every scene reset.
    pub initial_position: Vec3,
    /// Sign applied to the random reset yaw.
    pub rotation_sign: f64,
    /// False once the game is over.
    pub active: bool,
    /// Reward accumulated since the agent's episode began.
    pub episode_reward: f64,
}

impl AgentState {
    /// Creates a new agent spawned at `spawn`.
    ///
    /// The spawn height is replaced by the configured agent height.
    pub fn new(id: Id, team: Team, position: Position, spawn: Vec3, config: &SoccerConfig) -> Self {
        let initial_position = Vec3::new(spawn.x, config.agent_spawn_height, spawn.z);
        Self {
            id,
            team,
            position,
            local_position: initial_position,
            velocity: Vec3::ZERO,
            yaw_deg: 0.0,
            speeds: config.speed_for(position),
            kick_power: 0.0,
            initial_position,
            rotation_sign: team.rotation_sign(),
            active: true,
            episode_reward: 0.0,
        }
    }

    /// Unit vector the agent is facing.
    pub fn forward(&self) -> Vec3 {
        Vec3::forward_from_yaw(self.yaw_deg)
    }

    /// Applies an action: re-arms the kick, turns the agent and returns the
    /// translation intent for the physics side.
    pub fn apply_action(&mut self, action: &DiscreteAction, config: &SoccerConfig) -> MotionIntent {
        let intent = ActionInterpreter::interpret(action, self.yaw_deg, self.speeds, config);
        self.kick_power = if intent.kick_armed { 1.0 } else { 0.0 };
        self.yaw_deg = (self.yaw_deg + intent.yaw_delta_deg).rem_euclid(360.0);
        intent
    }

    /// Force this agent imparts on the ball when they touch.
    ///
    /// Goalies always strike at full power.
    pub fn kick_force(&self, config: &SoccerConfig) -> f64 {
        match self.position {
            Position::Goalie => config.kick_power,
            _ => config.kick_power * self.kick_power,
        }
    }

    /// Ground-plane speed, the only signal the animation layer reads.
    pub fn horizontal_speed(&self) -> f64 {
        self.velocity.horizontal_magnitude()
    }

    /// Places the agent back at its reset position with zero velocity.
    pub fn reset_to(&mut self, position: Vec3, yaw_deg: f64) {
        self.local_position = position;
        self.yaw_deg = yaw_deg;
        self.velocity = Vec3::ZERO;
        self.kick_power = 0.0;
    }

    /// Finalizes the running episode reward and starts a new episode.
    pub fn end_episode(&mut self, interrupted: bool) -> AgentSignal {
        let reward = std::mem::take(&mut self.episode_reward);
        if interrupted {
            AgentSignal::Interrupted { reward }
        } else {
            AgentSignal::Ended { reward }
        }
    }

    pub fn distance_to(&self, point: &Vec3) -> f64 {
        self.local_position.distance(point)
    }
}
