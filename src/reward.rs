//! Reward shaping for the soccer environment.
//!
//! Combines the per-step existential term, the per-position placement
//! shaping and the team-level goal rewards.

use crate::agent::AgentState;
use crate::config::SoccerConfig;
use crate::role::behavior_for;
use crate::scene::SceneView;

/// Group rewards produced by a single goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalRewards {
    /// Added to the scoring team's group.
    pub scorer: f64,
    /// Added to the conceding team's group.
    pub conceder: f64,
}

/// Computes rewards for the soccer environment.
pub struct RewardShaper;

impl RewardShaper {
    /// Existential reward for one step: `weight(position) × ε`.
    ///
    /// Goalies gain ε (stalling pays), strikers lose ε (urgency pays),
    /// defenders gain ε/2 and generic players get nothing.
    pub fn existential(agent: &AgentState, config: &SoccerConfig) -> f64 {
        behavior_for(agent.position).existential_weight() * config.existential()
    }

    /// Total individual reward for one step of `agent`.
    ///
    /// # Components
    ///
    /// 1. **Existential**: see [`RewardShaper::existential`].
    /// 2. **Placement**: the position's shaping term (striker possession
    ///    toward goal, defender interposition, goalie proximity to goal).
    pub fn step_reward(agent: &AgentState, scene: &SceneView<'_>, config: &SoccerConfig) -> f64 {
        let role = behavior_for(agent.position);
        Self::existential(agent, config) + role.positional_reward(agent, scene, config)
    }

    /// Group rewards for a goal scored after `elapsed_steps` of the episode.
    ///
    /// Faster goals are worth more: the scorer gets
    /// `1 - elapsed / max_environment_steps`, the conceder always `-1`.
    /// With the step cap disabled the scorer gets the full `1`.
    pub fn goal_rewards(elapsed_steps: u32, config: &SoccerConfig) -> GoalRewards {
        let scorer = if config.max_environment_steps > 0 {
            1.0 - elapsed_steps as f64 / config.max_environment_steps as f64
        } else {
            1.0
        };
        GoalRewards {
            scorer,
            conceder: -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::BallState;
    use crate::scene::Goals;
    use crate::types::{Position, Team};
    use crate::vector::Vec3;

    fn agent(position: Position) -> AgentState {
        AgentState::new(
            "a".into(),
            Team::Blue,
            position,
            Vec3::ZERO,
            &SoccerConfig::default(),
        )
    }

    #[test]
    fn existential_table() {
        let config = SoccerConfig::default();
        let eps = 1.0 / 25_000.0;
        assert!((RewardShaper::existential(&agent(Position::Goalie), &config) - eps).abs() < 1e-15);
        assert!((RewardShaper::existential(&agent(Position::Striker), &config) + eps).abs() < 1e-15);
        assert!(
            (RewardShaper::existential(&agent(Position::Defender), &config) - eps / 2.0).abs()
                < 1e-15
        );
        assert_eq!(RewardShaper::existential(&agent(Position::Generic), &config), 0.0);
    }

    #[test]
    fn goal_reward_scales_with_elapsed_time() {
        let config = SoccerConfig::default();
        let r = RewardShaper::goal_rewards(10_000, &config);
        assert!((r.scorer - 0.6).abs() < 1e-12);
        assert_eq!(r.conceder, -1.0);

        let instant = RewardShaper::goal_rewards(0, &config);
        assert_eq!(instant.scorer, 1.0);
    }

    #[test]
    fn goal_reward_without_cap_is_full() {
        let config = SoccerConfig {
            max_environment_steps: 0,
            ..SoccerConfig::default()
        };
        assert_eq!(RewardShaper::goal_rewards(123, &config).scorer, 1.0);
    }

    #[test]
    fn step_reward_without_scene_is_existential_only() {
        let config = SoccerConfig::default();
        let mut ball = BallState::new(Vec3::ZERO);
        ball.active = false;
        let roster: Vec<AgentState> = Vec::new();
        let scene = SceneView::new(&ball, Goals::default(), &roster);
        for p in Position::all() {
            let a = agent(p);
            assert_eq!(
                RewardShaper::step_reward(&a, &scene, &config),
                RewardShaper::existential(&a, &config)
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn existential_sign_follows_position(steps in 1u32..1_000_000) {
                let config = SoccerConfig {
                    max_environment_steps: steps,
                    ..SoccerConfig::default()
                };
                let eps = 1.0 / steps as f64;
                prop_assert!(RewardShaper::existential(&agent(Position::Goalie), &config) > 0.0);
                prop_assert!(RewardShaper::existential(&agent(Position::Striker), &config) < 0.0);
                prop_assert!((RewardShaper::existential(&agent(Position::Defender), &config) - eps * 0.5).abs() < 1e-15);
                prop_assert_eq!(RewardShaper::existential(&agent(Position::Generic), &config), 0.0);
            }

            #[test]
            fn interpose_bonus_iff_alignment_above_threshold(
                ax in -9.0f64..9.0,
                az in -9.0f64..9.0,
                bx in -9.0f64..9.0,
                bz in -9.0f64..9.0,
            ) {
                use crate::role::DefenderRole;
                let config = SoccerConfig::default();
                let ball = BallState::new(Vec3::new(bx, 0.0, bz));
                let goals = Goals::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0));
                let roster: Vec<AgentState> = Vec::new();
                let scene = SceneView::new(&ball, goals, &roster);
                let mut defender = agent(Position::Defender);
                defender.local_position = Vec3::new(ax, 0.0, az);
                let alignment = DefenderRole::interpose_alignment(
                    &defender,
                    ball.position,
                    Vec3::new(-10.0, 0.0, 0.0),
                );
                let shaped = RewardShaper::step_reward(&defender, &scene, &config)
                    - RewardShaper::existential(&defender, &config);
                if alignment > 0.8 {
                    prop_assert!((shaped - config.interpose_bonus).abs() < 1e-15);
                } else {
                    prop_assert!(shaped.abs() < 1e-15);
                }
            }
        }
    }
}
