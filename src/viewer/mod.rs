//! Interaction and owned viewer state.
//!
//! Everything here runs on the host UI's single event loop: pointer,
//! wheel, and frame-tick handlers mutate the camera synchronously and
//! never block. The camera is the only shared mutable state, owned by
//! [`ViewerState`] and read once per scene rebuild.

pub mod clock;
pub mod input;
pub mod state;

// Re-export
pub use clock::AnimationClock;
pub use input::{GesturePhase, InteractionController, Modifiers};
pub use state::{ParamsError, ViewerState};
