//! Puzzle engine command pipeline.

use crate::consts::UNDO_DEPTH;
use crate::events::GameEvent;
use crate::level::{PuzzleLevel, builtin_puzzle_levels};
use crate::{Direction, Position};

use super::state::PuzzleState;

/// Discrete-step puzzle engine.
///
/// Purely reactive: every command is synchronous and the state only
/// advances through `step`. Invalid commands are silent no-ops; the only
/// outcomes the engine surfaces are the Complete/Failed flags on the state.
pub struct PuzzleEngine {
    campaign: Vec<PuzzleLevel>,
    current: usize,
    /// Template the live state was derived from (a campaign entry or a
    /// custom load)
    level: PuzzleLevel,
    state: PuzzleState,
    history: Vec<PuzzleState>,
}

impl PuzzleEngine {
    /// Start at the first level of the given campaign. Must be non-empty.
    pub fn new(campaign: Vec<PuzzleLevel>) -> Self {
        assert!(!campaign.is_empty(), "campaign must contain a level");
        let level = campaign[0].clone();
        let state = PuzzleState::from_level(&level);
        Self {
            campaign,
            current: 0,
            level,
            state,
            history: Vec::new(),
        }
    }

    /// Engine over the built-in campaign
    pub fn with_builtin_levels() -> Self {
        Self::new(builtin_puzzle_levels())
    }

    /// Read-only snapshot of the live state. Undo history is not exposed.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Update the pending direction. A 180° reversal of the current
    /// direction is rejected silently; nothing else is validated.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction.is_opposite(self.state.direction) {
            return;
        }
        self.state.direction = direction;
    }

    /// Advance one tick in the current direction.
    ///
    /// No-op when terminal. Otherwise snapshots the state, moves the head,
    /// resolves collisions/food, spends one move, and settles the terminal
    /// flags - Complete wins the tie when the last food and the last move
    /// land on the same tick.
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_terminal() || self.state.moves_left == 0 {
            return events;
        }

        self.push_snapshot();

        let new_head = self.state.head().moved_in(self.state.direction);

        if !self.in_bounds(new_head)
            || self.level.obstacles.contains(&new_head)
            || self.state.snake.contains(&new_head)
        {
            self.state.failed = true;
            self.state.moves_left -= 1;
            events.push(GameEvent::Failed);
            return events;
        }

        self.state.snake.insert(0, new_head);
        if let Some(i) = self.state.food.iter().position(|&f| f == new_head) {
            // Growth tick: the tail stays
            self.state.food.remove(i);
            events.push(GameEvent::FoodEaten);
        } else {
            self.state.snake.pop();
        }
        self.state.moves_left -= 1;

        if self.state.food.is_empty() {
            self.state.complete = true;
            events.push(GameEvent::Complete);
        } else if self.state.moves_left == 0 {
            self.state.failed = true;
            events.push(GameEvent::Failed);
        }
        events
    }

    /// Restore the most recent snapshot. No-op on empty history or in a
    /// terminal state. Each undo pops one tick, so repeated undo walks the
    /// whole history; there is no redo.
    pub fn undo(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        if let Some(prev) = self.history.pop() {
            self.state = prev;
        }
    }

    /// Reload the current level's initial configuration and clear history
    pub fn restart(&mut self) {
        self.state = PuzzleState::from_level(&self.level);
        self.history.clear();
    }

    /// Replace level and state wholesale (custom/editor level)
    pub fn load_level(&mut self, level: PuzzleLevel) {
        log::info!(
            "loading puzzle level: grid {}, {} food, {} moves",
            level.grid_size,
            level.food.len(),
            level.max_moves
        );
        self.state = PuzzleState::from_level(&level);
        self.level = level;
        self.history.clear();
    }

    /// Move on to the next campaign level. When the campaign is exhausted
    /// the engine signals overall completion instead of failing.
    pub fn advance_to_next_level(&mut self) -> Vec<GameEvent> {
        if self.current + 1 < self.campaign.len() {
            self.current += 1;
            self.level = self.campaign[self.current].clone();
            self.state = PuzzleState::from_level(&self.level);
            self.history.clear();
            log::info!("advanced to puzzle level {}", self.current + 1);
            Vec::new()
        } else {
            self.state.complete = true;
            self.state.failed = false;
            vec![GameEvent::Complete]
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.level.grid_size && pos.y >= 0 && pos.y < self.level.grid_size
    }

    fn push_snapshot(&mut self) {
        if self.history.len() == UNDO_DEPTH {
            self.history.remove(0);
        }
        self.history.push(self.state.clone());
    }
}
