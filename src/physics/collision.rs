//! Axis-separated tile collision for the platformer actor.
//!
//! The actor is a `TILE_SIZE` square sampled at the four corners of its
//! bounding box. Point sampling is the original collision scheme and is
//! kept as-is: an actor moving more than a tile per tick can tunnel past
//! thin geometry between samples. Vertical resolution runs first, then
//! horizontal against the already-resolved Y.

use glam::Vec2;

use crate::consts::TILE_SIZE;
use crate::level::{PhysicsLevel, TileType};

/// Does the tile stop downward movement (landing)?
/// Platforms are one-way: they catch a falling actor but nothing else.
fn blocks_landing(tile: TileType) -> bool {
    match tile {
        TileType::Solid | TileType::Platform => true,
        // Slopes carry no collision response yet; the actor passes through
        TileType::Empty | TileType::SlopeLeft | TileType::SlopeRight => false,
    }
}

/// Does the tile stop upward or horizontal movement?
fn blocks_solid(tile: TileType) -> bool {
    match tile {
        TileType::Solid => true,
        TileType::Empty | TileType::Platform | TileType::SlopeLeft | TileType::SlopeRight => false,
    }
}

/// Tile index containing the pixel coordinate `v`
fn tile_index(v: f32) -> i32 {
    (v / TILE_SIZE).floor() as i32
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
}

/// Resolve a proposed move against the tile grid.
///
/// `current` is the actor's top-left corner this tick, `proposed` the
/// unresolved candidate (`current + velocity * dt`). Vertical contact is
/// tested at the proposed Y using the current X columns; horizontal
/// contact at the proposed X using the resolved Y rows.
pub fn resolve(level: &PhysicsLevel, current: Vec2, velocity: Vec2, proposed: Vec2) -> Resolution {
    let mut pos = Vec2::new(current.x, proposed.y);
    let mut vel = velocity;
    let mut grounded = false;

    let left = tile_index(current.x);
    let right = tile_index(current.x + TILE_SIZE - 1.0);

    if velocity.y > 0.0 {
        // Falling: the row under the bottom edge at the proposed Y
        let below = tile_index(proposed.y + TILE_SIZE);
        if blocks_landing(level.tile_at(left, below)) || blocks_landing(level.tile_at(right, below))
        {
            pos.y = below as f32 * TILE_SIZE - TILE_SIZE;
            vel.y = 0.0;
            grounded = true;
        }
    } else if velocity.y < 0.0 {
        // Rising: the row over the top edge; platforms don't block upward
        let above = tile_index(proposed.y);
        if blocks_solid(level.tile_at(left, above)) || blocks_solid(level.tile_at(right, above)) {
            pos.y = (above + 1) as f32 * TILE_SIZE;
            vel.y = 0.0;
        }
    }

    pos.x = proposed.x;
    let top = tile_index(pos.y);
    let bottom = tile_index(pos.y + TILE_SIZE - 1.0);

    if velocity.x > 0.0 {
        let edge = tile_index(proposed.x + TILE_SIZE);
        if blocks_solid(level.tile_at(edge, top)) || blocks_solid(level.tile_at(edge, bottom)) {
            pos.x = edge as f32 * TILE_SIZE - TILE_SIZE;
            vel.x = 0.0;
        }
    } else if velocity.x < 0.0 {
        let edge = tile_index(proposed.x);
        if blocks_solid(level.tile_at(edge, top)) || blocks_solid(level.tile_at(edge, bottom)) {
            pos.x = (edge + 1) as f32 * TILE_SIZE;
            vel.x = 0.0;
        }
    }

    Resolution {
        position: pos,
        velocity: vel,
        grounded,
    }
}
