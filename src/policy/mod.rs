//! Policy trait and baseline implementations.

pub mod heuristic;
pub mod keyboard;
pub mod random;
pub mod trait_;

pub use heuristic::ChaseBallPolicy;
pub use keyboard::KeyboardPolicy;
pub use random::RandomPolicy;
pub use trait_::Policy;
