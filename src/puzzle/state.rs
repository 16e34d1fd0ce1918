//! Puzzle game state and snapshot semantics.

use serde::{Deserialize, Serialize};

use crate::level::PuzzleLevel;
use crate::{Direction, Position};

/// Live state of one puzzle session.
///
/// Whole-value clones of this struct form the undo history. The history
/// itself lives on the engine, so a snapshot never contains other
/// snapshots and restoring one is a plain assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Snake body cells, head at index 0, pairwise distinct
    pub snake: Vec<Position>,
    /// Food cells not yet eaten
    pub food: Vec<Position>,
    /// Remaining move budget; decreases by exactly one per accepted tick,
    /// never below zero
    pub moves_left: u32,
    /// Direction the next step moves in
    pub direction: Direction,
    /// All food eaten. Mutually exclusive with `failed`.
    pub complete: bool,
    /// Collision or exhausted budget. Mutually exclusive with `complete`.
    pub failed: bool,
}

impl PuzzleState {
    /// Copy a level template into a fresh live state
    pub fn from_level(level: &PuzzleLevel) -> Self {
        Self {
            snake: level.snake.clone(),
            food: level.food.clone(),
            moves_left: level.max_moves,
            direction: level.direction,
            complete: false,
            failed: false,
        }
    }

    /// Head cell (index 0)
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// No further ticks mutate a terminal state
    pub fn is_terminal(&self) -> bool {
        self.complete || self.failed
    }
}
