use thiserror::Error;

use crate::types::Team;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SoccerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot start a session: no agents registered")]
    EmptyRoster,

    #[error("No agent at roster index {0}")]
    AgentNotFound(usize),

    #[error("Action code {code} out of range for {branch} branch (expected 0, 1 or 2)")]
    InvalidActionCode { branch: &'static str, code: usize },

    #[error("Expected {expected} actions (one per agent), got {got}")]
    ActionCountMismatch { expected: usize, got: usize },

    #[error("Game is over: {winner} reached the winning score")]
    GameOver { winner: Team },
}

pub type Result<T> = std::result::Result<T, SoccerError>;
