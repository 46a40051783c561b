//! soccer_rl - Multi-agent soccer environment for reinforcement learning
//!
//! Per-agent observations, shaped rewards, team group rewards and the
//! episode/game state machine of a two-team soccer match, with a pluggable
//! physics backend and baseline policies.

pub mod action;
pub mod agent;
pub mod animation;
pub mod ball;
pub mod config;
pub mod environment;
pub mod episode;
pub mod error;
pub mod group;
pub mod manual;
pub mod metrics;
pub mod observation;
pub mod physics;
pub mod policy;
pub mod reward;
pub mod role;
pub mod scene;
pub mod scoreboard;
pub mod types;
pub mod vector;

pub use action::{ActionInterpreter, AxisCode, DiscreteAction, KeyState, MotionIntent};
pub use agent::{AgentSignal, AgentState};
pub use ball::BallState;
pub use config::SoccerConfig;
pub use environment::{SoccerEnvironment, StepResult};
pub use episode::{EpisodeContext, EpisodePhase, GoalOutcome};
pub use error::{Result, SoccerError};
pub use group::{GroupSignal, TeamGroup};
pub use manual::{ManualMover, ManualStep};
pub use metrics::EvaluationMetrics;
pub use observation::ObservationBuilder;
pub use physics::{KinematicPhysics, PhysicsBackend};
pub use policy::{ChaseBallPolicy, KeyboardPolicy, Policy, RandomPolicy};
pub use reward::RewardShaper;
pub use scene::{Goals, SceneView};
pub use scoreboard::ScoreBoard;
pub use types::{Position, SpeedProfile, Team};
pub use vector::Vec3;

/// Identifier type used for agents.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
