//! Observation encoding for the soccer environment.
//!
//! Builds per-agent feature vectors: a common block shared by every
//! position followed by the position's own extension.

use crate::agent::AgentState;
use crate::config::SoccerConfig;
use crate::role::behavior_for;
use crate::scene::SceneView;
use crate::types::Position;
use crate::vector::Vec3;

/// Builds observation vectors for agents.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Number of features shared by every position.
    pub const COMMON_DIM: usize = 19;

    /// Observation length for agents in `position`.
    pub fn dim_for(position: Position) -> usize {
        Self::COMMON_DIM + behavior_for(position).extension_dim()
    }

    /// Builds the observation vector for a single agent.
    ///
    /// The common block is:
    /// ```text
    /// [own_pos(3), own_vel(3), ball_pos(3), ball_vel(3),
    ///  own_goal(3), opposing_goal(3), dist_to_ball(1)]
    /// ```
    /// followed by the position extension (see [`crate::role`]).
    ///
    /// Missing ball or goals contribute zeros in place, so the length only
    /// depends on the agent's position.
    pub fn build(agent: &AgentState, scene: &SceneView<'_>, config: &SoccerConfig) -> Vec<f64> {
        let role = behavior_for(agent.position);
        let mut obs = Vec::with_capacity(Self::COMMON_DIM + role.extension_dim());

        obs.extend(agent.local_position.to_array());
        obs.extend(agent.velocity.to_array());

        let ball_pos = scene.ball_position();
        obs.extend(ball_pos.unwrap_or(Vec3::ZERO).to_array());
        obs.extend(scene.ball_velocity().unwrap_or(Vec3::ZERO).to_array());

        obs.extend(scene.goals.own(agent.team).unwrap_or(Vec3::ZERO).to_array());
        obs.extend(
            scene
                .goals
                .opposing(agent.team)
                .unwrap_or(Vec3::ZERO)
                .to_array(),
        );

        obs.push(ball_pos.map(|b| agent.distance_to(&b)).unwrap_or(0.0));

        role.extend_observation(agent, scene, config, &mut obs);
        obs
    }

    /// Builds observations for every agent in the scene's roster.
    pub fn build_all(scene: &SceneView<'_>, config: &SoccerConfig) -> Vec<Vec<f64>> {
        scene
            .roster
            .iter()
            .map(|agent| Self::build(agent, scene, config))
            .collect()
    }
}
