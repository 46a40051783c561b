//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::action::{AxisCode, DiscreteAction, BRANCH_SIZES};

/// Uniformly random action selection.
///
/// Each agent independently draws every branch code uniformly.
/// Used for sanity checks and as a lower-bound baseline.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a random policy seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible random policy.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn draw(&mut self, branch: usize) -> AxisCode {
        match self.rng.gen_range(0..BRANCH_SIZES[branch]) {
            1 => AxisCode::Positive,
            2 => AxisCode::Negative,
            _ => AxisCode::Idle,
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn select_actions(&mut self, observations: &[Vec<f64>]) -> Vec<DiscreteAction> {
        (0..observations.len())
            .map(|_| DiscreteAction::new(self.draw(0), self.draw(1), self.draw(2)))
            .collect()
    }

    fn name(&self) -> &str {
        "random"
    }
}
