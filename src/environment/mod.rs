//! Soccer scene controller.
//!
//! Runs the per-tick loop: clock → act → shape rewards → physics → goals →
//! observe, and owns scene resets and the game-over latch.

#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::action::DiscreteAction;
use crate::agent::{AgentSignal, AgentState};
use crate::animation::LocomotionBlend;
use crate::ball::BallState;
use crate::config::SoccerConfig;
use crate::episode::{EpisodeContext, EpisodePhase, GoalOutcome};
use crate::error::{Result, SoccerError};
use crate::group::GroupSignal;
use crate::observation::ObservationBuilder;
use crate::physics::{KinematicPhysics, PhysicsBackend};
use crate::reward::RewardShaper;
use crate::scene::{Goals, SceneView};
use crate::types::{Position, Team};
use crate::vector::Vec3;

/// Goal positions matching the default [`KinematicPhysics`] pitch.
pub const DEFAULT_BLUE_GOAL: Vec3 = Vec3::new(-16.0, 0.5, 0.0);
pub const DEFAULT_PURPLE_GOAL: Vec3 = Vec3::new(16.0, 0.5, 0.0);

/// Result of a single environment step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Per-agent observations after the step, in roster order.
    pub observations: Vec<Vec<f64>>,
    /// Per-agent individual rewards for this step.
    pub rewards: Vec<f64>,
    /// Group episode signals raised during this step.
    pub group_signals: Vec<(Team, GroupSignal)>,
    /// Individual episode signals raised during this step, by roster index.
    pub agent_signals: Vec<(usize, AgentSignal)>,
    /// Team that scored this step, if any.
    pub goal: Option<Team>,
    /// Whether the step cap interrupted the episode.
    pub interrupted: bool,
    /// Whether agents' episodes ended this step (goal, cap or game over).
    pub done: bool,
    pub game_over: bool,
    /// Episode clock after the step.
    pub step: u32,
}

/// The multi-agent soccer environment.
///
/// # Lifecycle
///
/// 1. Create with [`SoccerEnvironment::new`] and register players with
///    [`SoccerEnvironment::add_agent`].
/// 2. Call [`SoccerEnvironment::start_session`] for initial observations.
/// 3. Call [`SoccerEnvironment::step`] with one action per agent until the
///    result reports `game_over`.
pub struct SoccerEnvironment {
    pub config: SoccerConfig,
    /// Roster, in registration order.
    pub agents: Vec<AgentState>,
    pub ball: BallState,
    pub goals: Goals,
    context: EpisodeContext,
    physics: Box<dyn PhysicsBackend>,
    animation: Vec<LocomotionBlend>,
    agent_signals: Vec<(usize, AgentSignal)>,
    rng: StdRng,
}

impl SoccerEnvironment {
    /// Creates an empty environment with the default kinematic physics.
    ///
    /// # Errors
    ///
    /// Returns [`SoccerError::InvalidConfig`] if the configuration does not validate.
    pub fn new(config: SoccerConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        if config.max_environment_steps == 0 {
            warn!(
                max_agent_steps = config.max_agent_steps,
                "episode step cap disabled, existential reward uses the agent step limit"
            );
        }
        Ok(Self {
            ball: BallState::new(config.ball_start),
            goals: Goals::new(DEFAULT_BLUE_GOAL, DEFAULT_PURPLE_GOAL),
            context: EpisodeContext::new(&config),
            physics: Box::new(KinematicPhysics::default()),
            animation: Vec::new(),
            agent_signals: Vec::new(),
            agents: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    /// Replaces the physics backend.
    pub fn with_physics(mut self, physics: Box<dyn PhysicsBackend>) -> Self {
        self.physics = physics;
        self
    }

    pub fn with_goals(mut self, goals: Goals) -> Self {
        self.goals = goals;
        self
    }

    /// Registers a player and returns its roster index.
    pub fn add_agent(&mut self, team: Team, position: Position, spawn: Vec3) -> usize {
        let idx = self.agents.len();
        let agent = AgentState::new(crate::generate_id(), team, position, spawn, &self.config);
        debug!(
            idx,
            id = %agent.id,
            team = %team,
            position = %position,
            behavior = position.behavior_name(),
            "agent registered"
        );
        self.agents.push(agent);
        self.animation.push(LocomotionBlend::default());
        self.context.group_mut(team).register(idx);
        idx
    }

    /// Starts a new session: scores to zero, everyone reactivated, scene reset.
    ///
    /// # Errors
    ///
    /// Returns [`SoccerError::EmptyRoster`] when no agents are registered.
    pub fn start_session(&mut self) -> Result<Vec<Vec<f64>>> {
        if self.agents.is_empty() {
            return Err(SoccerError::EmptyRoster);
        }
        self.context.start_session();
        for agent in &mut self.agents {
            agent.active = true;
        }
        self.ball.active = true;
        self.context.take_signals();
        self.agent_signals.clear();
        info!(agents = self.agents.len(), "session started");
        self.reset_scene();
        Ok(self.observe())
    }

    /// Returns every agent to its initial spot with a fresh random facing and
    /// puts the ball back on its starting position.
    ///
    /// Does nothing once the game is over.
    pub fn reset_scene(&mut self) {
        if self.context.is_game_over() {
            return;
        }
        self.context.scene_reset();

        let (yaw_min, yaw_max) = (self.config.reset_yaw_min_deg, self.config.reset_yaw_max_deg);
        for agent in &mut self.agents {
            let mut start = agent.initial_position;
            if self.config.randomize_agent_reset {
                let jitter = self.config.agent_reset_jitter_x;
                start.x += self.rng.gen_range(-jitter..=jitter);
            }
            let yaw = agent.rotation_sign * self.rng.gen_range(yaw_min..=yaw_max);
            agent.reset_to(start, yaw);
            agent.episode_reward = 0.0;
        }

        let mut offset = Vec3::ZERO;
        if self.config.randomize_ball_reset {
            let jitter = self.config.ball_reset_jitter;
            offset.x = self.rng.gen_range(-jitter..=jitter);
            offset.z = self.rng.gen_range(-jitter..=jitter);
        }
        self.ball.reset(offset);

        debug!("scene reset");
    }

    /// Builds observations for every agent from the current scene.
    pub fn observe(&self) -> Vec<Vec<f64>> {
        let scene = SceneView::new(&self.ball, self.goals, &self.agents);
        ObservationBuilder::build_all(&scene, &self.config)
    }

    /// Executes one environment tick.
    ///
    /// 1. Advance the clock; on reaching the cap interrupt both groups and reset.
    /// 2. Apply each active agent's action (turn, kick arming, velocity change).
    /// 3. Compute each agent's shaped reward.
    /// 4. Advance physics; a reported goal is scored.
    /// 5. Build the next observations.
    ///
    /// # Errors
    ///
    /// - [`SoccerError::GameOver`] once the game has ended.
    /// - [`SoccerError::ActionCountMismatch`] if `actions` is not one per agent.
    pub fn step(&mut self, actions: &[DiscreteAction]) -> Result<StepResult> {
        if let EpisodePhase::GameOver { winner } = self.context.phase() {
            return Err(SoccerError::GameOver { winner });
        }
        if actions.len() != self.agents.len() {
            return Err(SoccerError::ActionCountMismatch {
                expected: self.agents.len(),
                got: actions.len(),
            });
        }

        let interrupted = self.context.advance_clock();
        if interrupted {
            self.end_agent_episodes(true);
            self.reset_scene();
        }

        for (agent, action) in self.agents.iter_mut().zip(actions) {
            if !agent.active {
                continue;
            }
            let intent = agent.apply_action(action, &self.config);
            self.physics.apply_intent(agent, &intent, &self.config);
        }

        let rewards = self.shape_rewards();
        for (agent, reward) in self.agents.iter_mut().zip(&rewards) {
            agent.episode_reward += reward;
        }

        let scorer = self
            .physics
            .advance(&mut self.agents, &mut self.ball, &self.goals, &self.config);
        for (blend, agent) in self.animation.iter_mut().zip(&self.agents) {
            blend.update(agent.velocity, self.config.fixed_delta_time);
        }

        let goal = match scorer {
            Some(team) => match self.goal_touched(team) {
                GoalOutcome::Ignored => None,
                _ => Some(team),
            },
            None => None,
        };

        let group_signals = self.context.take_signals();
        let agent_signals = std::mem::take(&mut self.agent_signals);
        Ok(StepResult {
            observations: self.observe(),
            rewards,
            done: !group_signals.is_empty(),
            group_signals,
            agent_signals,
            goal,
            interrupted,
            game_over: self.context.is_game_over(),
            step: self.context.clock.step(),
        })
    }

    fn shape_rewards(&self) -> Vec<f64> {
        let scene = SceneView::new(&self.ball, self.goals, &self.agents);
        self.agents
            .iter()
            .map(|agent| {
                if agent.active {
                    RewardShaper::step_reward(agent, &scene, &self.config)
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Scores a goal for `team`.
    ///
    /// Exposed for hosts whose own physics detects goals. Below the winning
    /// score the scene is reset; on reaching it every agent and the ball are
    /// deactivated and the environment stops accepting steps.
    pub fn goal_touched(&mut self, team: Team) -> GoalOutcome {
        let outcome = self.context.register_goal(team, &self.config);
        match outcome {
            GoalOutcome::Reset => {
                self.end_agent_episodes(false);
                self.reset_scene();
            }
            GoalOutcome::GameOver { .. } => {
                self.end_agent_episodes(false);
                for agent in &mut self.agents {
                    agent.active = false;
                }
                self.ball.active = false;
            }
            GoalOutcome::Ignored => {}
        }
        outcome
    }

    /// Looks up an agent by roster index.
    ///
    /// # Errors
    ///
    /// Returns [`SoccerError::AgentNotFound`] for an index past the roster.
    pub fn agent(&self, idx: usize) -> Result<&AgentState> {
        self.agents.get(idx).ok_or(SoccerError::AgentNotFound(idx))
    }

    fn end_agent_episodes(&mut self, interrupted: bool) {
        for (idx, agent) in self.agents.iter_mut().enumerate() {
            self.agent_signals.push((idx, agent.end_episode(interrupted)));
        }
    }

    /// Drains individual agent signals raised outside [`SoccerEnvironment::step`].
    pub fn take_agent_signals(&mut self) -> Vec<(usize, AgentSignal)> {
        std::mem::take(&mut self.agent_signals)
    }

    /// Drains group signals raised outside [`SoccerEnvironment::step`],
    /// e.g. by a host calling [`SoccerEnvironment::goal_touched`].
    pub fn take_group_signals(&mut self) -> Vec<(Team, GroupSignal)> {
        self.context.take_signals()
    }

    /// Shared episode state (clock, scoreboard, groups).
    pub fn context(&self) -> &EpisodeContext {
        &self.context
    }

    pub fn score(&self, team: Team) -> u32 {
        self.context.scoreboard.score(team)
    }

    pub fn is_game_over(&self) -> bool {
        self.context.is_game_over()
    }

    /// Locomotion blend values for the rendering side, in roster order.
    pub fn locomotion_blends(&self) -> Vec<f64> {
        self.animation.iter().map(|b| b.value()).collect()
    }

    pub fn n_agents(&self) -> usize {
        self.agents.len()
    }
}
