//! Session score tracking.

use std::fmt;

use crate::types::Team;

/// Goal counters for both teams.
///
/// Counters only grow within a session and are zeroed when a new session
/// starts. The game is over once either side reaches `score_to_win`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    blue: u32,
    purple: u32,
    score_to_win: u32,
}

impl ScoreBoard {
    pub fn new(score_to_win: u32) -> Self {
        Self {
            blue: 0,
            purple: 0,
            score_to_win,
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Blue => self.blue,
            Team::Purple => self.purple,
        }
    }

    /// Records a goal and returns the scorer's new total.
    pub fn record_goal(&mut self, team: Team) -> u32 {
        let counter = match team {
            Team::Blue => &mut self.blue,
            Team::Purple => &mut self.purple,
        };
        *counter += 1;
        *counter
    }

    pub fn is_game_over(&self) -> bool {
        self.blue >= self.score_to_win || self.purple >= self.score_to_win
    }

    /// The team that reached the winning score, if any.
    pub fn winner(&self) -> Option<Team> {
        if self.blue >= self.score_to_win {
            Some(Team::Blue)
        } else if self.purple >= self.score_to_win {
            Some(Team::Purple)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.blue = 0;
        self.purple = 0;
    }

    /// Display text for one team's counter, e.g. `BlueScore: 3`.
    pub fn label(&self, team: Team) -> String {
        match team {
            Team::Blue => format!("BlueScore: {}", self.blue),
            Team::Purple => format!("PurpleScore: {}", self.purple),
        }
    }
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.label(Team::Blue), self.label(Team::Purple))?;
        if self.is_game_over() {
            write!(f, "  GAME OVER")?;
        }
        Ok(())
    }
}
