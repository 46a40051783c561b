//! Manual control through held keys.

use super::trait_::Policy;
use crate::action::{DiscreteAction, KeyState};

/// Drives one agent from keyboard state; every other agent idles.
pub struct KeyboardPolicy {
    /// Roster index of the controlled agent.
    pub controlled: usize,
    pub keys: KeyState,
}

impl KeyboardPolicy {
    pub fn new(controlled: usize) -> Self {
        Self {
            controlled,
            keys: KeyState::default(),
        }
    }

    /// Updates the held keys for the next tick.
    pub fn set_keys(&mut self, keys: KeyState) {
        self.keys = keys;
    }
}

impl Policy for KeyboardPolicy {
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<DiscreteAction> {
        (0..observations.len())
            .map(|i| {
                if i == self.controlled {
                    DiscreteAction::from_keys(&self.keys)
                } else {
                    DiscreteAction::IDLE
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "keyboard"
    }
}
