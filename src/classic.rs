//! Endless classic snake mode.
//!
//! No budget, no undo, no win condition short of filling the grid: the
//! snake runs until it hits a wall or itself, eating food that respawns at
//! a seeded-random free cell. Same seed + same inputs = same run.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::level::ClassicConfig;
use crate::{Direction, Position};

/// Live state of one classic session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicState {
    /// Snake body cells, head at index 0
    pub snake: Vec<Position>,
    /// The single current food cell
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    /// Filled the whole grid
    pub complete: bool,
    pub failed: bool,
}

impl ClassicState {
    pub fn is_terminal(&self) -> bool {
        self.complete || self.failed
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

/// Classic engine, stepped at a fixed rate by an external clock.
pub struct ClassicEngine {
    config: ClassicConfig,
    rng: Pcg32,
    state: ClassicState,
}

impl ClassicEngine {
    pub fn new(config: ClassicConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let state = Self::initial_state(&config, &mut rng);
        Self { config, rng, state }
    }

    /// Read-only snapshot of the live state
    pub fn state(&self) -> &ClassicState {
        &self.state
    }

    /// Update the pending direction; 180° reversals are rejected silently
    pub fn set_direction(&mut self, direction: Direction) {
        if direction.is_opposite(self.state.direction) {
            return;
        }
        self.state.direction = direction;
    }

    /// Advance one tick in the current direction
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_terminal() {
            return events;
        }

        let new_head = self.state.head().moved_in(self.state.direction);
        if !self.in_bounds(new_head) || self.state.snake.contains(&new_head) {
            self.state.failed = true;
            events.push(GameEvent::Failed);
            return events;
        }

        self.state.snake.insert(0, new_head);
        if new_head == self.state.food {
            self.state.score += 1;
            events.push(GameEvent::FoodEaten);
            match self.spawn_food() {
                Some(food) => self.state.food = food,
                None => {
                    // Every cell occupied: the grid is beaten
                    self.state.complete = true;
                    events.push(GameEvent::Complete);
                }
            }
        } else {
            self.state.snake.pop();
        }
        events
    }

    /// Restart with the configured seed, replaying the same food sequence
    pub fn restart(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.config.seed);
        self.state = Self::initial_state(&self.config, &mut self.rng);
    }

    fn initial_state(config: &ClassicConfig, rng: &mut Pcg32) -> ClassicState {
        let center = config.grid_size / 2;
        let head = Position::new(center, center);
        let mut snake = vec![head];
        for i in 1..config.initial_length {
            snake.push(head.moved_by(-(i as i32), 0));
        }

        let food = spawn_food_avoiding(rng, config.grid_size, &snake)
            .unwrap_or(Position::new(0, 0));

        ClassicState {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            complete: false,
            failed: false,
        }
    }

    fn spawn_food(&mut self) -> Option<Position> {
        spawn_food_avoiding(&mut self.rng, self.config.grid_size, &self.state.snake)
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.config.grid_size && pos.y >= 0 && pos.y < self.config.grid_size
    }
}

/// Pick a uniformly random free cell, scanning row-major for candidates so
/// the draw stays deterministic for a given RNG state. None when the snake
/// fills the grid.
fn spawn_food_avoiding(rng: &mut Pcg32, grid_size: i32, snake: &[Position]) -> Option<Position> {
    let mut free = Vec::new();
    for y in 0..grid_size {
        for x in 0..grid_size {
            let cell = Position::new(x, y);
            if !snake.contains(&cell) {
                free.push(cell);
            }
        }
    }
    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassicConfig {
        ClassicConfig {
            grid_size: 10,
            initial_length: 3,
            seed: 42,
        }
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = ClassicEngine::new(config());
        let head = engine.state().head();

        let events = engine.step();

        assert!(events.is_empty() || events == vec![GameEvent::FoodEaten]);
        assert_eq!(engine.state().head(), head.moved_in(Direction::Right));
        assert_eq!(engine.state().snake.len(), 3 + engine.state().score as usize);
    }

    #[test]
    fn test_eating_grows_and_respawns_food() {
        let mut engine = ClassicEngine::new(config());
        // Teleport food straight ahead
        engine.state.food = engine.state.head().moved_in(Direction::Right);

        let events = engine.step();

        assert_eq!(events, vec![GameEvent::FoodEaten]);
        assert_eq!(engine.state().score, 1);
        assert_eq!(engine.state().snake.len(), 4);
        assert!(!engine.state().snake.contains(&engine.state().food));
    }

    #[test]
    fn test_wall_collision_fails() {
        let mut engine = ClassicEngine::new(config());
        // Run right until the wall
        for _ in 0..20 {
            engine.step();
            if engine.state().failed {
                break;
            }
            // Keep the food out of the way
            engine.state.food = Position::new(0, 0);
        }
        assert!(engine.state().failed);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut engine = ClassicEngine::new(config());
        engine.set_direction(Direction::Left);
        assert_eq!(engine.state().direction, Direction::Right);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = ClassicEngine::new(config());
        let mut b = ClassicEngine::new(config());

        for i in 0..30 {
            if i % 7 == 0 {
                a.set_direction(Direction::Down);
                b.set_direction(Direction::Down);
            } else if i % 11 == 0 {
                a.set_direction(Direction::Right);
                b.set_direction(Direction::Right);
            }
            a.step();
            b.step();
            assert_eq!(a.state(), b.state());
        }
    }

    #[test]
    fn test_restart_replays_food_sequence() {
        let mut engine = ClassicEngine::new(config());
        let first_food = engine.state().food;
        engine.step();
        engine.step();

        engine.restart();

        assert_eq!(engine.state().food, first_food);
        assert_eq!(engine.state().score, 0);
        assert!(!engine.state().is_terminal());
    }

    #[test]
    fn test_terminal_step_is_noop() {
        let mut engine = ClassicEngine::new(config());
        engine.state.failed = true;
        let snapshot = engine.state().clone();

        assert!(engine.step().is_empty());
        assert_eq!(*engine.state(), snapshot);
    }
}
