//! Episode bookkeeping shared across agents.
//!
//! [`EpisodeContext`] bundles the step clock, the scoreboard and both team
//! groups, and owns the episode state machine:
//!
//! ```text
//! Running --step cap--> Interrupted --reset--> Running
//! Running --goal, both scores below target--> Running (after reset)
//! Running --goal reaching target--> GameOver (terminal)
//! ```

use tracing::{debug, info};

use crate::config::SoccerConfig;
use crate::group::{GroupSignal, TeamGroup};
use crate::reward::RewardShaper;
use crate::scoreboard::ScoreBoard;
use crate::types::Team;

/// Step counter for the running episode, bounded by the configured cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeClock {
    step: u32,
    max_steps: u32,
}

impl EpisodeClock {
    /// Creates a clock; `max_steps == 0` disables the cap.
    pub fn new(max_steps: u32) -> Self {
        Self { step: 0, max_steps }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Advances one step; returns true when the cap is reached.
    pub fn tick(&mut self) -> bool {
        self.step = self.step.saturating_add(1);
        self.max_steps > 0 && self.step >= self.max_steps
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    #[cfg(test)]
    pub(crate) fn set_step(&mut self, step: u32) {
        self.step = step;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    Running,
    /// Step cap hit; the scene is about to be reset.
    Interrupted,
    /// A team reached the winning score. Terminal.
    GameOver { winner: Team },
}

/// What the scene controller must do after a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    /// Reset the scene and keep playing.
    Reset,
    /// The game just ended; deactivate everything.
    GameOver { winner: Team },
    /// The game was already over; the goal was ignored.
    Ignored,
}

/// Per-session state passed explicitly into every tick.
#[derive(Debug, Clone)]
pub struct EpisodeContext {
    pub clock: EpisodeClock,
    pub scoreboard: ScoreBoard,
    blue: TeamGroup,
    purple: TeamGroup,
    phase: EpisodePhase,
}

impl EpisodeContext {
    pub fn new(config: &SoccerConfig) -> Self {
        Self {
            clock: EpisodeClock::new(config.max_environment_steps),
            scoreboard: ScoreBoard::new(config.score_to_win),
            blue: TeamGroup::new(Team::Blue),
            purple: TeamGroup::new(Team::Purple),
            phase: EpisodePhase::Running,
        }
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, EpisodePhase::GameOver { .. })
    }

    pub fn group(&self, team: Team) -> &TeamGroup {
        match team {
            Team::Blue => &self.blue,
            Team::Purple => &self.purple,
        }
    }

    pub fn group_mut(&mut self, team: Team) -> &mut TeamGroup {
        match team {
            Team::Blue => &mut self.blue,
            Team::Purple => &mut self.purple,
        }
    }

    /// Starts a fresh session: zeroed scores and clock, phase `Running`.
    pub fn start_session(&mut self) {
        self.scoreboard.reset();
        self.clock.reset();
        self.phase = EpisodePhase::Running;
    }

    /// Advances the clock by one step.
    ///
    /// On reaching the cap both groups are interrupted and the phase moves
    /// to `Interrupted`; returns true in that case. No-op after game over.
    pub fn advance_clock(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if !self.clock.tick() {
            return false;
        }
        debug!(step = self.clock.step(), "step cap reached, interrupting episode");
        self.blue.group_episode_interrupted();
        self.purple.group_episode_interrupted();
        self.phase = EpisodePhase::Interrupted;
        true
    }

    /// Marks the scene as reset: clock to zero, phase back to `Running`.
    pub fn scene_reset(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.clock.reset();
        self.phase = EpisodePhase::Running;
    }

    /// Applies a goal for `scorer`.
    ///
    /// The scorer's group earns the time-discounted goal reward and the
    /// conceder's group loses one. Both group episodes end. If the goal
    /// brings either score to the target the context latches `GameOver`.
    pub fn register_goal(&mut self, scorer: Team, config: &SoccerConfig) -> GoalOutcome {
        if self.is_game_over() {
            return GoalOutcome::Ignored;
        }

        let rewards = RewardShaper::goal_rewards(self.clock.step(), config);
        self.group_mut(scorer).add_group_reward(rewards.scorer);
        self.group_mut(scorer.opponent())
            .add_group_reward(rewards.conceder);
        self.scoreboard.record_goal(scorer);

        info!(
            team = %scorer,
            step = self.clock.step(),
            reward = rewards.scorer,
            blue = self.scoreboard.score(Team::Blue),
            purple = self.scoreboard.score(Team::Purple),
            "goal scored"
        );

        self.blue.end_group_episode();
        self.purple.end_group_episode();

        match self.scoreboard.winner() {
            Some(winner) => {
                self.phase = EpisodePhase::GameOver { winner };
                info!(winner = %winner, "game over");
                GoalOutcome::GameOver { winner }
            }
            None => GoalOutcome::Reset,
        }
    }

    /// Drains both groups' pending signals, blue first.
    pub fn take_signals(&mut self) -> Vec<(Team, GroupSignal)> {
        let mut signals: Vec<_> = self
            .blue
            .take_signals()
            .into_iter()
            .map(|s| (Team::Blue, s))
            .collect();
        signals.extend(
            self.purple
                .take_signals()
                .into_iter()
                .map(|s| (Team::Purple, s)),
        );
        signals
    }
}
