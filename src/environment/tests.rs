//! Scenario tests for the soccer scene controller.

use super::*;
use crate::action::AxisCode;
use crate::agent::AgentSignal;

/// Two-a-side roster: blue striker + goalie, purple defender + generic.
fn make_env(config: SoccerConfig) -> SoccerEnvironment {
    let mut env = SoccerEnvironment::new(config, 42).unwrap();
    env.add_agent(Team::Blue, Position::Striker, Vec3::new(-4.0, 1.0, 2.0));
    env.add_agent(Team::Blue, Position::Goalie, Vec3::new(-14.0, 1.0, 0.0));
    env.add_agent(Team::Purple, Position::Defender, Vec3::new(8.0, 1.0, -2.0));
    env.add_agent(Team::Purple, Position::Generic, Vec3::new(4.0, 1.0, 3.0));
    env
}

fn idle(env: &SoccerEnvironment) -> Vec<DiscreteAction> {
    vec![DiscreteAction::IDLE; env.n_agents()]
}

#[cfg(test)]
mod session {
    use super::*;

    #[test]
    fn start_requires_agents() {
        let mut env = SoccerEnvironment::new(SoccerConfig::default(), 1).unwrap();
        assert!(matches!(env.start_session(), Err(SoccerError::EmptyRoster)));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let config = SoccerConfig {
            fixed_delta_time: 0.0,
            ..SoccerConfig::default()
        };
        assert!(SoccerEnvironment::new(config, 1).is_err());
    }

    #[test]
    fn start_returns_per_position_observations() {
        let mut env = make_env(SoccerConfig::default());
        let obs = env.start_session().unwrap();
        assert_eq!(obs.len(), 4);
        for (o, agent) in obs.iter().zip(&env.agents) {
            assert_eq!(o.len(), ObservationBuilder::dim_for(agent.position));
        }
    }

    #[test]
    fn agents_join_their_team_group() {
        let env = make_env(SoccerConfig::default());
        assert_eq!(env.context().group(Team::Blue).members(), &[0, 1]);
        assert_eq!(env.context().group(Team::Purple).members(), &[2, 3]);
    }

    #[test]
    fn agent_lookup_by_index() {
        let env = make_env(SoccerConfig::default());
        assert_eq!(env.agent(1).unwrap().position, Position::Goalie);
        assert_eq!(env.agent(9).unwrap_err(), SoccerError::AgentNotFound(9));
    }

    #[test]
    fn action_count_must_match() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        let err = env.step(&[DiscreteAction::IDLE]).unwrap_err();
        assert_eq!(
            err,
            SoccerError::ActionCountMismatch {
                expected: 4,
                got: 1
            }
        );
    }
}

#[cfg(test)]
mod reset {
    use super::*;

    #[test]
    fn reset_places_agents_at_initial_positions() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        for agent in &mut env.agents {
            agent.local_position = Vec3::new(9.0, 0.5, 9.0);
            agent.velocity = Vec3::new(2.0, 0.0, 2.0);
        }
        env.ball.position = Vec3::new(3.0, 0.5, 3.0);
        env.ball.velocity = Vec3::new(1.0, 0.0, 0.0);

        env.reset_scene();

        for agent in &env.agents {
            assert_eq!(agent.local_position, agent.initial_position);
            assert_eq!(agent.local_position.y, 0.5);
            assert_eq!(agent.velocity, Vec3::ZERO);
            let yaw = agent.yaw_deg * agent.rotation_sign;
            assert!((80.0..=100.0).contains(&yaw), "yaw {}", agent.yaw_deg);
        }
        assert_eq!(env.ball.position, env.config.ball_start);
        assert_eq!(env.ball.velocity, Vec3::ZERO);
        assert_eq!(env.context().clock.step(), 0);
    }

    #[test]
    fn purple_faces_the_other_way() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        assert!(env.agents[0].yaw_deg > 0.0);
        assert!(env.agents[2].yaw_deg < 0.0);
    }

    #[test]
    fn same_seed_same_facings() {
        let mut a = make_env(SoccerConfig::default());
        let mut b = make_env(SoccerConfig::default());
        a.start_session().unwrap();
        b.start_session().unwrap();
        let ya: Vec<_> = a.agents.iter().map(|x| x.yaw_deg).collect();
        let yb: Vec<_> = b.agents.iter().map(|x| x.yaw_deg).collect();
        assert_eq!(ya, yb);
    }

    #[test]
    fn randomized_ball_reset_stays_within_jitter() {
        let config = SoccerConfig {
            randomize_ball_reset: true,
            ..SoccerConfig::default()
        };
        let mut env = make_env(config);
        for _ in 0..20 {
            env.reset_scene();
            let d = env.ball.position - env.config.ball_start;
            assert!(d.x.abs() <= 2.5 && d.z.abs() <= 2.5);
            assert_eq!(d.y, 0.0);
        }
    }

    #[test]
    fn randomized_agent_reset_only_moves_x() {
        let config = SoccerConfig {
            randomize_agent_reset: true,
            ..SoccerConfig::default()
        };
        let mut env = make_env(config);
        env.reset_scene();
        for agent in &env.agents {
            let d = agent.local_position - agent.initial_position;
            assert!(d.x.abs() <= 5.0);
            assert_eq!(d.z, 0.0);
        }
    }
}

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn step_advances_clock_and_returns_observations() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        let result = env.step(&idle(&env)).unwrap();
        assert_eq!(result.step, 1);
        assert_eq!(result.observations.len(), 4);
        assert_eq!(result.rewards.len(), 4);
        assert!(!result.done);
        assert!(result.goal.is_none());
    }

    #[test]
    fn idle_rewards_follow_position() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        let eps = env.config.existential();
        let result = env.step(&idle(&env)).unwrap();

        // Striker is far from the ball: existential penalty only.
        assert!((result.rewards[0] + eps).abs() < 1e-12);
        // Goalie: ε plus the goal proximity term.
        let goalie = &env.agents[1];
        let d = goalie.initial_position.distance(&DEFAULT_BLUE_GOAL);
        assert!((result.rewards[1] - (eps + 1.0 / (d + 1.0))).abs() < 1e-9);
        // Generic players get nothing.
        assert_eq!(result.rewards[3], 0.0);
    }

    #[test]
    fn step_cap_interrupts_and_resets() {
        let config = SoccerConfig {
            max_environment_steps: 5,
            ..SoccerConfig::default()
        };
        let mut env = make_env(config);
        env.start_session().unwrap();
        for _ in 0..4 {
            assert!(!env.step(&idle(&env)).unwrap().interrupted);
        }
        let result = env.step(&idle(&env)).unwrap();
        assert!(result.interrupted);
        assert!(result.done);
        assert_eq!(result.step, 0);
        assert_eq!(result.group_signals.len(), 2);
        assert!(result
            .group_signals
            .iter()
            .all(|(_, s)| matches!(s, GroupSignal::Interrupted { .. })));
        assert_eq!(result.agent_signals.len(), 4);
        assert!(result
            .agent_signals
            .iter()
            .all(|(_, s)| matches!(s, AgentSignal::Interrupted { .. })));
        assert_eq!(env.context().phase(), EpisodePhase::Running);
    }

    #[test]
    fn forward_action_moves_striker() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        let start = env.agents[0].local_position;
        let mut actions = idle(&env);
        actions[0] = DiscreteAction::new(AxisCode::Positive, AxisCode::Idle, AxisCode::Idle);
        env.step(&actions).unwrap();
        assert_eq!(env.agents[0].kick_power, 1.0);
        assert!(env.agents[0].local_position.distance(&start) > 0.0);
        assert!(env.locomotion_blends()[0] > 0.0);
        assert_eq!(env.locomotion_blends()[3], 0.0);
    }

    #[test]
    fn ball_rolled_into_goal_scores() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        env.ball.position = Vec3::new(15.95, 0.5, 0.0);
        env.ball.velocity = Vec3::new(6.0, 0.0, 0.0);
        let result = env.step(&idle(&env)).unwrap();
        assert_eq!(result.goal, Some(Team::Blue));
        assert_eq!(env.score(Team::Blue), 1);
        assert_eq!(result.step, 0);
        assert_eq!(env.ball.position, env.config.ball_start);
        assert!(result.done);
        let blue = result
            .group_signals
            .iter()
            .find(|(t, _)| *t == Team::Blue)
            .unwrap();
        assert!(matches!(blue.1, GroupSignal::Ended { reward } if reward > 0.99));
    }
}

#[cfg(test)]
mod goals {
    use super::*;

    #[test]
    fn blue_goal_at_step_ten_thousand() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        env.context.clock.set_step(10_000);

        assert_eq!(env.goal_touched(Team::Blue), GoalOutcome::Reset);

        assert_eq!(env.score(Team::Blue), 1);
        assert_eq!(env.score(Team::Purple), 0);
        assert_eq!(env.context().clock.step(), 0);
        let signals = env.context.take_signals();
        assert_eq!(signals.len(), 2);
        let (blue_team, blue_signal) = signals[0];
        assert_eq!(blue_team, Team::Blue);
        assert!((blue_signal.reward() - 0.6).abs() < 1e-12);
        assert_eq!(signals[1], (Team::Purple, GroupSignal::Ended { reward: -1.0 }));
    }

    #[test]
    fn seventh_goal_is_game_over() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        for _ in 0..6 {
            env.goal_touched(Team::Blue);
        }
        assert_eq!(env.take_agent_signals().len(), 6 * 4);
        env.agents[1].episode_reward = 0.75;
        env.context.clock.set_step(123);
        assert_eq!(
            env.goal_touched(Team::Blue),
            GoalOutcome::GameOver { winner: Team::Blue }
        );

        assert!(env.is_game_over());
        let signals = env.take_group_signals();
        assert!(signals
            .iter()
            .all(|(_, s)| matches!(s, GroupSignal::Ended { .. })));
        let agent_signals = env.take_agent_signals();
        assert_eq!(
            agent_signals.iter().map(|(idx, _)| *idx).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert!(agent_signals
            .iter()
            .all(|(_, s)| matches!(s, AgentSignal::Ended { .. })));
        assert_eq!(agent_signals[1].1, AgentSignal::Ended { reward: 0.75 });
        assert!(env.agents.iter().all(|a| a.episode_reward == 0.0));
        assert!(env.agents.iter().all(|a| !a.active));
        assert!(!env.ball.active);
        // No reset happened after the latch.
        assert_eq!(env.context().clock.step(), 123);
        assert_eq!(
            env.step(&idle(&env)).unwrap_err(),
            SoccerError::GameOver { winner: Team::Blue }
        );
    }

    #[test]
    fn no_scene_reset_after_game_over() {
        let config = SoccerConfig {
            score_to_win: 1,
            ..SoccerConfig::default()
        };
        let mut env = make_env(config);
        env.start_session().unwrap();
        for agent in &mut env.agents {
            agent.local_position = Vec3::new(7.0, 0.5, 7.0);
        }
        env.ball.position = Vec3::new(3.0, 0.5, 3.0);
        env.goal_touched(Team::Blue);
        assert!(env.is_game_over());

        let yaws: Vec<_> = env.agents.iter().map(|a| a.yaw_deg).collect();
        env.reset_scene();

        for (agent, yaw) in env.agents.iter().zip(&yaws) {
            assert_eq!(agent.local_position, Vec3::new(7.0, 0.5, 7.0));
            assert_eq!(agent.yaw_deg, *yaw);
        }
        assert_eq!(env.ball.position, Vec3::new(3.0, 0.5, 3.0));
    }

    #[test]
    fn goal_step_reports_agent_episode_ends() {
        let mut env = make_env(SoccerConfig::default());
        env.start_session().unwrap();
        env.ball.position = Vec3::new(15.95, 0.5, 0.0);
        env.ball.velocity = Vec3::new(6.0, 0.0, 0.0);
        let result = env.step(&idle(&env)).unwrap();
        assert_eq!(result.goal, Some(Team::Blue));
        assert_eq!(result.agent_signals.len(), 4);
        // Rewards earned on the scoring tick belong to the finished episode.
        for (idx, signal) in &result.agent_signals {
            assert!((signal.reward() - result.rewards[*idx]).abs() < 1e-12);
        }
        assert!(env.take_agent_signals().is_empty());
    }

    #[test]
    fn goals_after_game_over_change_nothing() {
        let config = SoccerConfig {
            score_to_win: 1,
            ..SoccerConfig::default()
        };
        let mut env = make_env(config);
        env.start_session().unwrap();
        env.goal_touched(Team::Purple);
        env.context.take_signals();
        let blue = env.context().group(Team::Blue).cumulative_reward();

        assert_eq!(env.goal_touched(Team::Blue), GoalOutcome::Ignored);
        assert_eq!(env.score(Team::Blue), 0);
        assert_eq!(env.context().group(Team::Blue).cumulative_reward(), blue);
        assert!(env.context.take_signals().is_empty());
    }

    #[test]
    fn new_session_after_game_over() {
        let config = SoccerConfig {
            score_to_win: 1,
            ..SoccerConfig::default()
        };
        let mut env = make_env(config);
        env.start_session().unwrap();
        env.goal_touched(Team::Purple);
        assert!(env.is_game_over());

        env.start_session().unwrap();
        assert!(!env.is_game_over());
        assert_eq!(env.score(Team::Purple), 0);
        assert!(env.agents.iter().all(|a| a.active));
        assert!(env.ball.active);
        assert!(env.step(&idle(&env)).is_ok());
    }
}
