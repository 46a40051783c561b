//! Team-level reward groups.
//!
//! A [`TeamGroup`] holds the roster indices of one team, accumulates the
//! shared group reward and records group episode signals for the trainer.

use crate::types::Team;

/// A group-level episode signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupSignal {
    /// The group episode ended normally (goal or game over).
    Ended { reward: f64 },
    /// The group episode was cut off by the step cap.
    Interrupted { reward: f64 },
}

impl GroupSignal {
    /// Group reward finalized by this signal.
    pub fn reward(&self) -> f64 {
        match self {
            GroupSignal::Ended { reward } | GroupSignal::Interrupted { reward } => *reward,
        }
    }
}

/// Shared reward accumulator for one team.
#[derive(Debug, Clone)]
pub struct TeamGroup {
    pub team: Team,
    /// Roster indices of the registered agents.
    members: Vec<usize>,
    /// Reward accumulated in the current group episode.
    reward: f64,
    /// Reward accumulated over all finished group episodes.
    cumulative_reward: f64,
    /// Signals not yet collected by the caller.
    pending: Vec<GroupSignal>,
    episodes: u32,
}

impl TeamGroup {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            members: Vec::new(),
            reward: 0.0,
            cumulative_reward: 0.0,
            pending: Vec::new(),
            episodes: 0,
        }
    }

    /// Registers an agent by roster index. Duplicate registrations are ignored.
    pub fn register(&mut self, agent_idx: usize) {
        if !self.members.contains(&agent_idx) {
            self.members.push(agent_idx);
        }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn add_group_reward(&mut self, reward: f64) {
        self.reward += reward;
    }

    /// Reward accumulated in the running group episode.
    pub fn reward(&self) -> f64 {
        self.reward
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }

    /// Number of finished group episodes.
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    /// Ends the group episode, finalizing the accumulated reward.
    pub fn end_group_episode(&mut self) -> GroupSignal {
        let signal = GroupSignal::Ended {
            reward: self.finish(),
        };
        self.pending.push(signal);
        signal
    }

    /// Interrupts the group episode at the step cap.
    pub fn group_episode_interrupted(&mut self) -> GroupSignal {
        let signal = GroupSignal::Interrupted {
            reward: self.finish(),
        };
        self.pending.push(signal);
        signal
    }

    /// Drains the signals raised since the last call.
    pub fn take_signals(&mut self) -> Vec<GroupSignal> {
        std::mem::take(&mut self.pending)
    }

    fn finish(&mut self) -> f64 {
        let reward = self.reward;
        self.cumulative_reward += reward;
        self.reward = 0.0;
        self.episodes += 1;
        reward
    }
}
