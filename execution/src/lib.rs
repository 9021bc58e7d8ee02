pub mod state_transition;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

mod layer;

pub use layer::Layer;
pub use state_transition::{execute, StateTransitionResult};
