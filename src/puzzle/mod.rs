//! Discrete-step puzzle mode
//!
//! One logical tick per accepted move: the snake advances a cell, eats or
//! shrinks, and the move budget counts down. Terminal outcomes (Complete,
//! Failed) freeze the state until restart or a level change.

pub mod engine;
pub mod state;

pub use engine::PuzzleEngine;
pub use state::PuzzleState;
