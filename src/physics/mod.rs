//! Fixed-timestep platformer mode
//!
//! A single square actor under gravity over a static tile grid. An external
//! 60 Hz ticker drives `tick`; collisions are resolved axis-separated
//! (vertical first) against point samples at the actor's corners.

pub mod collision;
pub mod engine;
pub mod state;

pub use engine::{HorizontalInput, PhysicsEngine};
pub use state::{Phase, PhysicsState};
