//! Policy trait for the soccer environment.

use crate::action::DiscreteAction;

/// Action source driving every agent on the pitch.
///
/// Each action has three branches (move, strafe, turn) of three codes;
/// see [`DiscreteAction`].
pub trait Policy: Send + Sync {
    /// Picks a move/strafe/turn triple for every agent.
    ///
    /// `observations` holds one [`crate::ObservationBuilder`] vector per agent
    /// in roster order; lengths differ by position. The returned actions must
    /// line up with them one to one.
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<DiscreteAction>;

    /// Short label used in evaluation output.
    fn name(&self) -> &str;
}
