//! Read-only view of the scene shared by every agent during a tick.

use crate::agent::AgentState;
use crate::ball::BallState;
use crate::types::Team;
use crate::vector::Vec3;

/// Goal mouth positions. Either goal may be missing from the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Goals {
    pub blue: Option<Vec3>,
    pub purple: Option<Vec3>,
}

impl Goals {
    pub fn new(blue: Vec3, purple: Vec3) -> Self {
        Self {
            blue: Some(blue),
            purple: Some(purple),
        }
    }

    /// The goal `team` defends.
    pub fn own(&self, team: Team) -> Option<Vec3> {
        match team {
            Team::Blue => self.blue,
            Team::Purple => self.purple,
        }
    }

    /// The goal `team` attacks.
    pub fn opposing(&self, team: Team) -> Option<Vec3> {
        self.own(team.opponent())
    }
}

/// Snapshot of the scene captured at tick start.
///
/// Missing entities are `None` and degrade to zero-valued features
/// downstream; nothing here is mutated during the tick.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub ball: Option<&'a BallState>,
    pub goals: Goals,
    pub roster: &'a [AgentState],
}

impl<'a> SceneView<'a> {
    /// Builds a view; an inactive ball is treated as absent.
    pub fn new(ball: &'a BallState, goals: Goals, roster: &'a [AgentState]) -> Self {
        Self {
            ball: ball.active.then_some(ball),
            goals,
            roster,
        }
    }

    pub fn ball_position(&self) -> Option<Vec3> {
        self.ball.map(|b| b.position)
    }

    pub fn ball_velocity(&self) -> Option<Vec3> {
        self.ball.map(|b| b.velocity)
    }
}
