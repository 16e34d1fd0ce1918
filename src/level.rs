//! Level templates and the built-in set.
//!
//! Levels are read-only configuration: engines copy them into live state at
//! load time and never mutate them. Loading is permissive - a structurally
//! valid record is always accepted - but [`PuzzleLevel::validate`] and
//! [`PhysicsLevel::validate`] report gameplay-content problems (positions
//! outside the grid) so malformed editor output stays observable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// Tile kinds for the physics grid.
///
/// Slopes are part of the interchange format but not yet resolved by the
/// collision pass; it matches them explicitly and lets the actor through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Empty,
    Solid,
    Platform,
    SlopeLeft,
    SlopeRight,
}

/// A content problem found in a level template.
///
/// Advisory only: engines still accept the level as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelIssue {
    SnakeOutOfBounds(Position),
    FoodOutOfBounds(Position),
    ObstacleOutOfBounds(Position),
    SpawnOutOfBounds(Position),
    /// Tile grid length does not match grid_size × grid_size
    TileCountMismatch { expected: usize, actual: usize },
    EmptySnake,
    NoFood,
}

impl fmt::Display for LevelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelIssue::SnakeOutOfBounds(p) => {
                write!(f, "snake cell ({}, {}) outside grid", p.x, p.y)
            }
            LevelIssue::FoodOutOfBounds(p) => {
                write!(f, "food cell ({}, {}) outside grid", p.x, p.y)
            }
            LevelIssue::ObstacleOutOfBounds(p) => {
                write!(f, "obstacle cell ({}, {}) outside grid", p.x, p.y)
            }
            LevelIssue::SpawnOutOfBounds(p) => {
                write!(f, "spawn cell ({}, {}) outside grid", p.x, p.y)
            }
            LevelIssue::TileCountMismatch { expected, actual } => {
                write!(f, "tile grid has {actual} entries, expected {expected}")
            }
            LevelIssue::EmptySnake => write!(f, "initial snake has no cells"),
            LevelIssue::NoFood => write!(f, "level has no food"),
        }
    }
}

fn in_grid(grid_size: i32, pos: Position) -> bool {
    pos.x >= 0 && pos.x < grid_size && pos.y >= 0 && pos.y < grid_size
}

/// A puzzle-mode level template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleLevel {
    /// Grid is grid_size × grid_size cells
    pub grid_size: i32,
    /// Initial snake body, head first
    pub snake: Vec<Position>,
    /// Initial facing
    pub direction: Direction,
    /// Cells the snake must eat
    pub food: Vec<Position>,
    /// Cells that kill on contact
    pub obstacles: Vec<Position>,
    /// Move budget; the run fails when it reaches zero with food left
    pub max_moves: u32,
}

impl PuzzleLevel {
    /// Report content problems without rejecting the level
    pub fn validate(&self) -> Vec<LevelIssue> {
        let mut issues = Vec::new();
        if self.snake.is_empty() {
            issues.push(LevelIssue::EmptySnake);
        }
        if self.food.is_empty() {
            issues.push(LevelIssue::NoFood);
        }
        for &cell in &self.snake {
            if !in_grid(self.grid_size, cell) {
                issues.push(LevelIssue::SnakeOutOfBounds(cell));
            }
        }
        for &cell in &self.food {
            if !in_grid(self.grid_size, cell) {
                issues.push(LevelIssue::FoodOutOfBounds(cell));
            }
        }
        for &cell in &self.obstacles {
            if !in_grid(self.grid_size, cell) {
                issues.push(LevelIssue::ObstacleOutOfBounds(cell));
            }
        }
        issues
    }
}

/// A physics-mode level template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsLevel {
    /// Grid is grid_size × grid_size tiles
    pub grid_size: i32,
    /// Row-major tile grid, grid_size × grid_size entries
    pub tiles: Vec<TileType>,
    /// Initial actor cell (converted to pixel space on load)
    pub spawn: Position,
    /// Food cells (converted to pixel space on load)
    pub food: Vec<Position>,
}

impl PhysicsLevel {
    /// Tile at (col, row), with out-of-grid semantics: columns beyond the
    /// grid are implicit solid walls, rows above and below are open so
    /// jumps near the top work and fall-off past the bottom is reachable.
    /// A truncated tile vec (permissively loaded) reads as empty air.
    pub fn tile_at(&self, col: i32, row: i32) -> TileType {
        if col < 0 || col >= self.grid_size {
            return TileType::Solid;
        }
        if row < 0 || row >= self.grid_size {
            return TileType::Empty;
        }
        self.tiles
            .get((row * self.grid_size + col) as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Build a level from ASCII art rows. `#` solid, `-` platform, `<`/`>`
    /// slopes, `S` actor spawn, `f` food; anything else is empty. Rows must
    /// form a square grid.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let grid_size = rows.len() as i32;
        let mut tiles = Vec::with_capacity(rows.len() * rows.len());
        let mut spawn = Position::new(0, 0);
        let mut food = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.chars().count(),
                rows.len(),
                "row {y} does not match grid size {grid_size}"
            );
            for (x, ch) in row.chars().enumerate() {
                let cell = Position::new(x as i32, y as i32);
                tiles.push(match ch {
                    '#' => TileType::Solid,
                    '-' => TileType::Platform,
                    '<' => TileType::SlopeLeft,
                    '>' => TileType::SlopeRight,
                    'S' => {
                        spawn = cell;
                        TileType::Empty
                    }
                    'f' => {
                        food.push(cell);
                        TileType::Empty
                    }
                    _ => TileType::Empty,
                });
            }
        }

        Self {
            grid_size,
            tiles,
            spawn,
            food,
        }
    }

    /// Report content problems without rejecting the level
    pub fn validate(&self) -> Vec<LevelIssue> {
        let mut issues = Vec::new();
        let expected = (self.grid_size * self.grid_size) as usize;
        if self.tiles.len() != expected {
            issues.push(LevelIssue::TileCountMismatch {
                expected,
                actual: self.tiles.len(),
            });
        }
        if !in_grid(self.grid_size, self.spawn) {
            issues.push(LevelIssue::SpawnOutOfBounds(self.spawn));
        }
        for &cell in &self.food {
            if !in_grid(self.grid_size, cell) {
                issues.push(LevelIssue::FoodOutOfBounds(cell));
            }
        }
        issues
    }
}

/// Configuration for the endless classic mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassicConfig {
    pub grid_size: i32,
    /// Initial snake length (laid out behind the head)
    pub initial_length: usize,
    /// RNG seed for food placement; same seed + same inputs = same run
    pub seed: u64,
}

impl Default for ClassicConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_length: 3,
            seed: 0xC0FFEE,
        }
    }
}

/// Built-in puzzle campaign, in play order
pub fn builtin_puzzle_levels() -> Vec<PuzzleLevel> {
    vec![
        // Straight line warm-up
        PuzzleLevel {
            grid_size: 10,
            snake: vec![Position::new(1, 5)],
            direction: Direction::Right,
            food: vec![Position::new(4, 5), Position::new(7, 5)],
            obstacles: vec![],
            max_moves: 10,
        },
        // One corner, one wall of obstacles
        PuzzleLevel {
            grid_size: 10,
            snake: vec![Position::new(1, 1)],
            direction: Direction::Right,
            food: vec![Position::new(8, 1), Position::new(8, 8)],
            obstacles: vec![
                Position::new(5, 4),
                Position::new(6, 4),
                Position::new(7, 4),
            ],
            max_moves: 20,
        },
        // Tight budget: the direct route is the only route
        PuzzleLevel {
            grid_size: 12,
            snake: vec![Position::new(2, 6), Position::new(1, 6)],
            direction: Direction::Right,
            food: vec![
                Position::new(6, 6),
                Position::new(6, 2),
                Position::new(10, 2),
            ],
            obstacles: vec![
                Position::new(4, 3),
                Position::new(4, 4),
                Position::new(4, 5),
                Position::new(8, 4),
                Position::new(8, 5),
            ],
            max_moves: 14,
        },
    ]
}

/// Built-in physics levels, in play order
pub fn builtin_physics_levels() -> Vec<PhysicsLevel> {
    vec![
        PhysicsLevel::from_ascii(&[
            "............",
            "............",
            "............",
            "........f...",
            "......----..",
            "...f........",
            "..---.......",
            "............",
            "S.......f...",
            "############",
            "............",
            "............",
        ]),
        PhysicsLevel::from_ascii(&[
            "............",
            "...f........",
            "..###.......",
            "........f...",
            "......---...",
            "............",
            "#...f.......",
            "#..---......",
            "#S.......f..",
            "#######.####",
            "............",
            "............",
        ]),
    ]
}
