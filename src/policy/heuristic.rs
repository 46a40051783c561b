//! Ball-chasing heuristic policy.
//!
//! Every agent runs forward and steers toward the ball. Observations carry
//! no facing, so the agent's own velocity stands in for its heading.

use super::trait_::Policy;
use crate::action::{AxisCode, DiscreteAction};
use crate::vector::Vec3;

/// Greedy pursuit baseline.
///
/// Reads the common observation block:
/// ```text
/// [own_pos(0..3), own_vel(3..6), ball_pos(6..9), ..., dist_to_ball(18)]
/// ```
/// and turns toward the ball whenever it sits more than `turn_deadband`
/// off the current direction of travel.
pub struct ChaseBallPolicy {
    /// Sideways component (in unit-vector terms) tolerated before turning.
    pub turn_deadband: f64,
    /// Below this speed the heading is unknown and the agent just runs.
    pub min_heading_speed: f64,
}

impl Default for ChaseBallPolicy {
    fn default() -> Self {
        Self {
            turn_deadband: 0.1,
            min_heading_speed: 0.1,
        }
    }
}

impl ChaseBallPolicy {
    fn act(&self, obs: &[f64]) -> DiscreteAction {
        if obs.len() < 19 || obs[18] == 0.0 {
            // Ball missing (or exactly underfoot): nothing to chase.
            return DiscreteAction::IDLE;
        }

        let own = Vec3::new(obs[0], 0.0, obs[2]);
        let velocity = Vec3::new(obs[3], 0.0, obs[5]);
        let ball = Vec3::new(obs[6], 0.0, obs[8]);

        let mut action = DiscreteAction::new(AxisCode::Positive, AxisCode::Idle, AxisCode::Idle);
        if velocity.horizontal_magnitude() < self.min_heading_speed {
            return action;
        }

        let heading = velocity.normalized();
        let to_ball = (ball - own).normalized();
        // Component of the ball direction along the heading's right vector.
        let rightness = to_ball.x * heading.z - to_ball.z * heading.x;
        action.rotate = if rightness > self.turn_deadband {
            AxisCode::Negative
        } else if rightness < -self.turn_deadband {
            AxisCode::Positive
        } else {
            AxisCode::Idle
        };
        action
    }
}

impl Policy for ChaseBallPolicy {
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<DiscreteAction> {
        observations.iter().map(|obs| self.act(obs)).collect()
    }

    fn name(&self) -> &str {
        "chase_ball"
    }
}
