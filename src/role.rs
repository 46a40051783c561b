//! Per-position behavior.
//!
//! Each [`Position`] has one [`RoleBehavior`] implementation supplying its
//! observation extension, its existential reward weight and its positional
//! reward shaping. The behavior is looked up once per agent with
//! [`behavior_for`] and dispatched through the trait afterwards.

use crate::agent::AgentState;
use crate::config::SoccerConfig;
use crate::scene::SceneView;
use crate::types::Position;
use crate::vector::Vec3;

/// Position-specific observation and reward logic.
pub trait RoleBehavior: Send + Sync {
    fn position(&self) -> Position;

    /// Multiplier on the existential reward ε applied every step.
    fn existential_weight(&self) -> f64;

    /// Number of features appended by [`RoleBehavior::extend_observation`].
    fn extension_dim(&self) -> usize;

    /// Appends exactly [`RoleBehavior::extension_dim`] features.
    fn extend_observation(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        config: &SoccerConfig,
        obs: &mut Vec<f64>,
    );

    /// Per-step shaping reward based on the agent's placement.
    fn positional_reward(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        config: &SoccerConfig,
    ) -> f64;
}

pub struct StrikerRole;
pub struct GoalieRole;
pub struct DefenderRole;
pub struct GenericRole;

static STRIKER: StrikerRole = StrikerRole;
static GOALIE: GoalieRole = GoalieRole;
static DEFENDER: DefenderRole = DefenderRole;
static GENERIC: GenericRole = GenericRole;

/// Returns the behavior for a position.
pub fn behavior_for(position: Position) -> &'static dyn RoleBehavior {
    match position {
        Position::Striker => &STRIKER,
        Position::Goalie => &GOALIE,
        Position::Defender => &DEFENDER,
        Position::Generic => &GENERIC,
    }
}

fn distance_or_zero(agent: &AgentState, target: Option<Vec3>) -> f64 {
    target.map(|t| agent.distance_to(&t)).unwrap_or(0.0)
}

impl RoleBehavior for StrikerRole {
    fn position(&self) -> Position {
        Position::Striker
    }

    fn existential_weight(&self) -> f64 {
        -1.0
    }

    fn extension_dim(&self) -> usize {
        2
    }

    /// `[dist_to_opposing_goal, forward · dir(ball → opposing_goal)]`
    fn extend_observation(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        _config: &SoccerConfig,
        obs: &mut Vec<f64>,
    ) {
        let opposing = scene.goals.opposing(agent.team);
        obs.push(distance_or_zero(agent, opposing));

        let alignment = match (scene.ball_position(), opposing) {
            (Some(ball), Some(goal)) => agent.forward().dot(&(goal - ball).normalized()),
            _ => 0.0,
        };
        obs.push(alignment);
    }

    /// `1 / (dist_to_opposing_goal + offset)` while in possession.
    fn positional_reward(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        config: &SoccerConfig,
    ) -> f64 {
        match (scene.ball_position(), scene.goals.opposing(agent.team)) {
            (Some(ball), Some(goal)) if agent.distance_to(&ball) < config.possession_distance => {
                1.0 / (agent.distance_to(&goal) + config.striker_goal_offset)
            }
            _ => 0.0,
        }
    }
}

impl RoleBehavior for GoalieRole {
    fn position(&self) -> Position {
        Position::Goalie
    }

    fn existential_weight(&self) -> f64 {
        1.0
    }

    fn extension_dim(&self) -> usize {
        4
    }

    /// `[dist_to_own_goal, (ball - own_goal).xyz]`
    fn extend_observation(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        _config: &SoccerConfig,
        obs: &mut Vec<f64>,
    ) {
        let own = scene.goals.own(agent.team);
        obs.push(distance_or_zero(agent, own));

        let relative = match (scene.ball_position(), own) {
            (Some(ball), Some(goal)) => ball - goal,
            _ => Vec3::ZERO,
        };
        obs.extend(relative.to_array());
    }

    /// `1 / (dist_to_own_goal + offset)`, always on while the goal exists.
    fn positional_reward(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        config: &SoccerConfig,
    ) -> f64 {
        scene
            .goals
            .own(agent.team)
            .map(|goal| 1.0 / (agent.distance_to(&goal) + config.goalie_goal_offset))
            .unwrap_or(0.0)
    }
}

impl DefenderRole {
    /// Finds the closest opposing striker currently in possession.
    ///
    /// Scans the roster in order and keeps the first strict minimum, so on
    /// exact distance ties the earlier roster entry wins.
    pub fn nearest_threat<'a>(
        agent: &AgentState,
        scene: &SceneView<'a>,
        config: &SoccerConfig,
    ) -> Option<(&'a AgentState, f64)> {
        let ball = scene.ball_position()?;
        let mut best: Option<(&'a AgentState, f64)> = None;

        for other in scene.roster {
            if other.team == agent.team
                || other.position != Position::Striker
                || other.distance_to(&ball) >= config.possession_distance
            {
                continue;
            }
            let dist = agent.distance_to(&other.local_position);
            if best.map_or(true, |(_, min)| dist < min) {
                best = Some((other, dist));
            }
        }

        best
    }

    /// Dot product of the goal-to-ball and goal-to-agent directions.
    pub fn interpose_alignment(agent: &AgentState, ball: Vec3, own_goal: Vec3) -> f64 {
        let ball_to_goal = (own_goal - ball).normalized();
        let agent_to_goal = (own_goal - agent.local_position).normalized();
        ball_to_goal.dot(&agent_to_goal)
    }
}

impl RoleBehavior for DefenderRole {
    fn position(&self) -> Position {
        Position::Defender
    }

    fn existential_weight(&self) -> f64 {
        0.5
    }

    fn extension_dim(&self) -> usize {
        5
    }

    /// `[dist_to_own_goal, dist_to_threat, dir_to_threat.xyz]`
    fn extend_observation(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        config: &SoccerConfig,
        obs: &mut Vec<f64>,
    ) {
        obs.push(distance_or_zero(agent, scene.goals.own(agent.team)));

        match Self::nearest_threat(agent, scene, config) {
            Some((threat, dist)) => {
                obs.push(dist);
                obs.extend((threat.local_position - agent.local_position).normalized().to_array());
            }
            None => {
                obs.push(0.0);
                obs.extend(Vec3::ZERO.to_array());
            }
        }
    }

    /// Fixed bonus while standing between the ball and the own goal.
    fn positional_reward(
        &self,
        agent: &AgentState,
        scene: &SceneView<'_>,
        config: &SoccerConfig,
    ) -> f64 {
        match (scene.ball_position(), scene.goals.own(agent.team)) {
            (Some(ball), Some(goal))
                if Self::interpose_alignment(agent, ball, goal) > config.interpose_threshold =>
            {
                config.interpose_bonus
            }
            _ => 0.0,
        }
    }
}

impl RoleBehavior for GenericRole {
    fn position(&self) -> Position {
        Position::Generic
    }

    fn existential_weight(&self) -> f64 {
        0.0
    }

    fn extension_dim(&self) -> usize {
        0
    }

    fn extend_observation(
        &self,
        _agent: &AgentState,
        _scene: &SceneView<'_>,
        _config: &SoccerConfig,
        _obs: &mut Vec<f64>,
    ) {
    }

    fn positional_reward(
        &self,
        _agent: &AgentState,
        _scene: &SceneView<'_>,
        _config: &SoccerConfig,
    ) -> f64 {
        0.0
    }
}
