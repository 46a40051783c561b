//! Physics collaborator seam.
//!
//! The environment only produces motion intents and kick forces; a
//! [`PhysicsBackend`] turns them into new positions and velocities and
//! reports goals. [`KinematicPhysics`] is a small stand-in
//! for running the environment without a game engine.

use crate::action::MotionIntent;
use crate::agent::AgentState;
use crate::ball::BallState;
use crate::config::SoccerConfig;
use crate::scene::Goals;
use crate::types::Team;
use crate::vector::Vec3;

/// Integrates agent and ball motion for one fixed step.
pub trait PhysicsBackend: Send {
    /// Applies an agent's motion intent as an instantaneous velocity change.
    fn apply_intent(&mut self, agent: &mut AgentState, intent: &MotionIntent, config: &SoccerConfig);

    /// Advances the simulation by `config.fixed_delta_time`.
    ///
    /// Returns the scoring team when the ball enters a goal.
    fn advance(
        &mut self,
        agents: &mut [AgentState],
        ball: &mut BallState,
        goals: &Goals,
        config: &SoccerConfig,
    ) -> Option<Team>;
}

/// Flat-pitch kinematics with linear drag, speed caps, wall bounces and
/// contact-based kicks.
///
/// The pitch spans `[-half_length, half_length]` on `x` and
/// `[-half_width, half_width]` on `z`; goals sit on the `x` ends.
#[derive(Debug, Clone)]
pub struct KinematicPhysics {
    pub half_length: f64,
    pub half_width: f64,
    /// Half the goal mouth width along `z`.
    pub goal_half_width: f64,
    /// Horizontal agent-ball distance at which they touch.
    pub contact_radius: f64,
    pub ball_mass: f64,
    /// Fraction of velocity lost per second.
    pub agent_drag: f64,
    pub ball_drag: f64,
    pub max_agent_speed: f64,
}

impl Default for KinematicPhysics {
    fn default() -> Self {
        Self {
            half_length: 17.0,
            half_width: 11.0,
            goal_half_width: 3.0,
            contact_radius: 1.0,
            ball_mass: 10.0,
            agent_drag: 4.0,
            ball_drag: 0.5,
            max_agent_speed: 8.0,
        }
    }
}

impl KinematicPhysics {
    fn damp(velocity: Vec3, drag: f64, dt: f64) -> Vec3 {
        velocity * (1.0 - drag * dt).max(0.0)
    }

    /// True when `ball` is past the goal line of `goal` and inside its mouth.
    fn in_goal(&self, ball: Vec3, goal: Vec3) -> bool {
        if goal.x == 0.0 {
            return false;
        }
        ball.x * goal.x.signum() >= goal.x.abs() && (ball.z - goal.z).abs() <= self.goal_half_width
    }

    fn integrate_agents(&self, agents: &mut [AgentState], dt: f64) {
        for agent in agents.iter_mut().filter(|a| a.active) {
            let mut v = Self::damp(agent.velocity, self.agent_drag, dt);
            let speed = v.horizontal_magnitude();
            if speed > self.max_agent_speed {
                let scale = self.max_agent_speed / speed;
                v.x *= scale;
                v.z *= scale;
            }
            agent.velocity = v;
            agent.local_position += v * dt;
            agent.local_position.x = agent.local_position.x.clamp(-self.half_length, self.half_length);
            agent.local_position.z = agent.local_position.z.clamp(-self.half_width, self.half_width);
        }
    }

    fn resolve_contacts(&self, agents: &[AgentState], ball: &mut BallState, config: &SoccerConfig) {
        for agent in agents.iter().filter(|a| a.active) {
            let offset = ball.position - agent.local_position;
            let flat = Vec3::new(offset.x, 0.0, offset.z);
            if flat.length() > self.contact_radius {
                continue;
            }
            let dir = flat.normalized();
            let push = agent.velocity.dot(&dir).max(0.0);
            let kick = agent.kick_force(config) * config.fixed_delta_time / self.ball_mass;
            let target = push + kick;
            let along = ball.velocity.dot(&dir);
            if along < target {
                ball.velocity += dir * (target - along);
            }
        }
    }

    fn bounce(&self, ball: &mut BallState) {
        if ball.position.x.abs() > self.half_length {
            ball.position.x = ball.position.x.clamp(-self.half_length, self.half_length);
            ball.velocity.x = -ball.velocity.x;
        }
        if ball.position.z.abs() > self.half_width {
            ball.position.z = ball.position.z.clamp(-self.half_width, self.half_width);
            ball.velocity.z = -ball.velocity.z;
        }
    }
}

impl PhysicsBackend for KinematicPhysics {
    fn apply_intent(&mut self, agent: &mut AgentState, intent: &MotionIntent, config: &SoccerConfig) {
        if agent.active {
            agent.velocity += intent.velocity_change(config);
        }
    }

    fn advance(
        &mut self,
        agents: &mut [AgentState],
        ball: &mut BallState,
        goals: &Goals,
        config: &SoccerConfig,
    ) -> Option<Team> {
        let dt = config.fixed_delta_time;
        self.integrate_agents(agents, dt);

        if !ball.active {
            return None;
        }
        self.resolve_contacts(agents, ball, config);
        ball.velocity = Self::damp(ball.velocity, self.ball_drag, dt);
        ball.position += ball.velocity * dt;

        for team in Team::all() {
            if let Some(goal) = goals.own(team) {
                if self.in_goal(ball.position, goal) {
                    return Some(team.opponent());
                }
            }
        }

        self.bounce(ball);
        None
    }
}
