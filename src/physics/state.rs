//! Physics game state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;
use crate::level::PhysicsLevel;

/// Run phase of a physics session.
///
/// `NotStarted` waits for an explicit `start`; `Complete` and `Failed` are
/// terminal - ticks become no-ops until a level reload or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    Complete,
    Failed,
}

/// Live state of one physics session. All positions are pixel-space
/// (grid cell × tile size) with sub-tile precision; y grows downward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Actor top-left corner; only ever set to a collision-resolved value
    pub position: Vec2,
    /// Pixels per second. `velocity.y` is clamped to terminal velocity.
    pub velocity: Vec2,
    /// Uneaten food, pixel space
    pub food: Vec<Vec2>,
    /// Resting on a Solid/Platform tile; gates jumping
    pub grounded: bool,
    pub phase: Phase,
}

impl PhysicsState {
    /// Copy a level template into a fresh live state (pixel space)
    pub fn from_level(level: &PhysicsLevel) -> Self {
        Self {
            position: Vec2::new(
                level.spawn.x as f32 * TILE_SIZE,
                level.spawn.y as f32 * TILE_SIZE,
            ),
            velocity: Vec2::ZERO,
            food: level
                .food
                .iter()
                .map(|c| Vec2::new(c.x as f32 * TILE_SIZE, c.y as f32 * TILE_SIZE))
                .collect(),
            grounded: false,
            phase: Phase::NotStarted,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Complete | Phase::Failed)
    }
}
