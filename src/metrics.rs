//! Evaluation metrics for the soccer environment.
//!
//! Runs whole game sessions under a policy and aggregates scoring and
//! episode statistics.

use std::fmt;

use crate::environment::SoccerEnvironment;
use crate::error::Result;
use crate::policy::Policy;
use crate::types::Team;

/// Aggregated evaluation metrics over multiple sessions.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Mean goals scored by blue per session.
    pub mean_blue_goals: f64,
    /// Mean goals scored by purple per session.
    pub mean_purple_goals: f64,
    /// Fraction of sessions that reached game over within the tick budget.
    pub completion_rate: f64,
    /// Mean step-cap interruptions per session.
    pub mean_interruptions: f64,
    /// Mean length of finished group episodes, in steps.
    pub mean_episode_length: f64,
    /// Mean finalized group reward per session, blue then purple.
    pub mean_group_reward: [f64; 2],
    /// Number of sessions evaluated.
    pub n_sessions: usize,
}

/// Tracks per-session statistics during evaluation.
#[derive(Debug, Default)]
struct SessionStats {
    goals: [u32; 2],
    interruptions: u32,
    finished: bool,
    episode_lengths: Vec<u32>,
    group_reward: [f64; 2],
}

impl EvaluationMetrics {
    /// Plays `n_sessions` sessions and returns aggregated metrics.
    ///
    /// A session ends at game over or after `max_ticks` steps, whichever
    /// comes first.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SoccerError::EmptyRoster`] from session start.
    pub fn evaluate(
        env: &mut SoccerEnvironment,
        policy: &mut dyn Policy,
        n_sessions: usize,
        max_ticks: u32,
    ) -> Result<Self> {
        let mut all_stats = Vec::with_capacity(n_sessions);

        for _ in 0..n_sessions {
            let mut obs = env.start_session()?;
            let mut stats = SessionStats::default();
            let mut episode_start = 0u32;

            for tick in 1..=max_ticks {
                let actions = policy.select_actions(&obs);
                let result = env.step(&actions)?;

                if let Some(team) = result.goal {
                    stats.goals[team.index()] += 1;
                }
                if result.interrupted {
                    stats.interruptions += 1;
                }
                for (team, signal) in &result.group_signals {
                    stats.group_reward[team.index()] += signal.reward();
                }
                if result.done {
                    stats.episode_lengths.push(tick - episode_start);
                    episode_start = tick;
                }

                obs = result.observations;

                if result.game_over {
                    stats.finished = true;
                    break;
                }
            }

            all_stats.push(stats);
        }

        let lengths: Vec<u32> = all_stats
            .iter()
            .flat_map(|s| s.episode_lengths.iter().copied())
            .collect();
        let mean_episode_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().map(|&l| l as f64).sum::<f64>() / lengths.len() as f64
        };

        Ok(Self {
            mean_blue_goals: mean_of(&all_stats, |s: &SessionStats| {
                s.goals[Team::Blue.index()] as f64
            }),
            mean_purple_goals: mean_of(&all_stats, |s: &SessionStats| {
                s.goals[Team::Purple.index()] as f64
            }),
            completion_rate: mean_of(&all_stats, |s: &SessionStats| {
                if s.finished {
                    1.0
                } else {
                    0.0
                }
            }),
            mean_interruptions: mean_of(&all_stats, |s: &SessionStats| s.interruptions as f64),
            mean_episode_length,
            mean_group_reward: [
                mean_of(&all_stats, |s: &SessionStats| s.group_reward[Team::Blue.index()]),
                mean_of(&all_stats, |s: &SessionStats| s.group_reward[Team::Purple.index()]),
            ],
            n_sessions,
        })
    }
}

fn mean_of(stats: &[SessionStats], f: impl Fn(&SessionStats) -> f64) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    stats.iter().map(f).sum::<f64>() / stats.len() as f64
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} sessions) ===",
            self.n_sessions
        )?;
        writeln!(f, "  Mean blue goals:         {:.2}", self.mean_blue_goals)?;
        writeln!(f, "  Mean purple goals:       {:.2}", self.mean_purple_goals)?;
        writeln!(
            f,
            "  Sessions completed:      {:.1}%",
            self.completion_rate * 100.0
        )?;
        writeln!(
            f,
            "  Mean interruptions:      {:.2}",
            self.mean_interruptions
        )?;
        writeln!(
            f,
            "  Mean episode length:     {:.1}",
            self.mean_episode_length
        )?;
        writeln!(
            f,
            "  Mean group reward:       blue {:.3} / purple {:.3}",
            self.mean_group_reward[0], self.mean_group_reward[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SoccerConfig;
    use crate::policy::{ChaseBallPolicy, RandomPolicy};
    use crate::types::Position;
    use crate::vector::Vec3;

    fn make_env(max_steps: u32) -> SoccerEnvironment {
        let config = SoccerConfig {
            max_environment_steps: max_steps,
            ..SoccerConfig::default()
        };
        let mut env = SoccerEnvironment::new(config, 42).unwrap();
        env.add_agent(Team::Blue, Position::Striker, Vec3::new(-3.0, 0.5, 0.0));
        env.add_agent(Team::Purple, Position::Goalie, Vec3::new(14.0, 0.5, 0.0));
        env
    }

    #[test]
    fn evaluate_completes() {
        let mut env = make_env(50);
        let mut policy = RandomPolicy::with_seed(5);
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut policy, 3, 120).unwrap();
        assert_eq!(metrics.n_sessions, 3);
        assert!(metrics.completion_rate <= 1.0);
    }

    #[test]
    fn idle_sessions_are_interrupted_on_schedule() {
        struct Idle;
        impl Policy for Idle {
            fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<crate::DiscreteAction> {
                vec![crate::DiscreteAction::IDLE; observations.len()]
            }
            fn name(&self) -> &str {
                "idle"
            }
        }

        let mut env = make_env(10);
        let metrics = EvaluationMetrics::evaluate(&mut env, &mut Idle, 2, 35).unwrap();
        assert_eq!(metrics.mean_interruptions, 3.0);
        assert_eq!(metrics.mean_episode_length, 10.0);
        assert_eq!(metrics.mean_blue_goals, 0.0);
        assert_eq!(metrics.completion_rate, 0.0);
    }

    #[test]
    fn empty_roster_is_reported() {
        let mut env = SoccerEnvironment::new(SoccerConfig::default(), 1).unwrap();
        let mut policy = ChaseBallPolicy::default();
        assert!(EvaluationMetrics::evaluate(&mut env, &mut policy, 1, 10).is_err());
    }
}
