//! Gridsnake - simulation cores for a grid snake game
//!
//! Core modules:
//! - `puzzle`: discrete-step snake puzzles with move budgets and undo
//! - `physics`: fixed-timestep platformer simulation over a tile grid
//! - `classic`: endless snake with seeded random food placement
//! - `level`: immutable level templates and the built-in set
//! - `persistence`: versioned JSON interchange for editor-made levels
//!
//! Every engine is a pure, deterministic state machine: no timers, no I/O,
//! no rendering. An external loop forwards input as commands and drives
//! `step`/`tick`; mutating commands return the [`GameEvent`]s they produced
//! so audio/haptic collaborators can react without touching engine state.

pub mod classic;
pub mod events;
pub mod level;
pub mod persistence;
pub mod physics;
pub mod puzzle;

pub use events::GameEvent;
pub use level::{ClassicConfig, PhysicsLevel, PuzzleLevel, TileType};

use serde::{Deserialize, Serialize};

/// Game tuning constants
pub mod consts {
    /// Fixed physics timestep (60 Hz). Ticks always advance by this nominal
    /// delta; there is no wall-clock compensation.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Edge length of one tile in pixels; also the actor's bounding box
    pub const TILE_SIZE: f32 = 32.0;

    /// Downward acceleration, pixels/s²
    pub const GRAVITY: f32 = 2200.0;
    /// Terminal fall speed, pixels/s
    pub const TERMINAL_VELOCITY: f32 = 700.0;
    /// Vertical impulse applied on jump, pixels/s (negative = up)
    pub const JUMP_IMPULSE: f32 = -620.0;
    /// Horizontal run speed, pixels/s
    pub const RUN_SPEED: f32 = 180.0;

    /// Maximum undo snapshots kept by the puzzle engine (oldest dropped first)
    pub const UNDO_DEPTH: usize = 64;
}

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a cell delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Adjacent cell in the given direction
    pub fn moved_in(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Grid movement direction. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit cell delta for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True if `other` is the exact 180° reverse of this direction
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.moved_in(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.moved_in(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved_in(Direction::Down), Position::new(5, 6));
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }
}
