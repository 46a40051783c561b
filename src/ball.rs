//! Ball state.

use crate::vector::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    /// Fixed position the ball returns to on every scene reset.
    pub starting_position: Vec3,
    /// False once the game is over.
    pub active: bool,
}

impl BallState {
    pub fn new(starting_position: Vec3) -> Self {
        Self {
            position: starting_position,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            starting_position,
            active: true,
        }
    }

    /// Moves the ball to its starting position plus `offset` and stops it.
    pub fn reset(&mut self, offset: Vec3) {
        self.position = self.starting_position + offset;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_to_start_and_stops() {
        let mut ball = BallState::new(Vec3::new(0.0, 0.5, 0.0));
        ball.position = Vec3::new(4.0, 0.5, -2.0);
        ball.velocity = Vec3::new(3.0, 0.0, 1.0);
        ball.angular_velocity = Vec3::new(0.0, 9.0, 0.0);
        ball.reset(Vec3::ZERO);
        assert_eq!(ball.position, ball.starting_position);
        assert_eq!(ball.velocity, Vec3::ZERO);
        assert_eq!(ball.angular_velocity, Vec3::ZERO);
    }
}
