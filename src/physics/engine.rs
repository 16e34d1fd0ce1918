//! Physics engine command pipeline.

use crate::consts::{GRAVITY, JUMP_IMPULSE, RUN_SPEED, SIM_DT, TERMINAL_VELOCITY, TILE_SIZE};
use crate::events::GameEvent;
use crate::level::PhysicsLevel;

use super::collision;
use super::state::{Phase, PhysicsState};

/// Horizontal movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalInput {
    Left,
    Right,
}

/// Fixed-timestep platformer engine.
///
/// Driven by an external 60 Hz ticker calling [`PhysicsEngine::tick`] on a
/// single logical thread; each tick advances by the fixed nominal timestep
/// regardless of wall-clock drift. Ticks before `start` and after a
/// terminal transition are no-ops.
pub struct PhysicsEngine {
    level: PhysicsLevel,
    state: PhysicsState,
}

impl PhysicsEngine {
    pub fn new(level: PhysicsLevel) -> Self {
        let state = PhysicsState::from_level(&level);
        Self { level, state }
    }

    /// Read-only snapshot of the live state
    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    /// Set horizontal velocity to the run speed in the requested direction,
    /// or zero when cleared. Takes effect on the next tick.
    pub fn set_horizontal_input(&mut self, input: Option<HorizontalInput>) {
        self.state.velocity.x = match input {
            Some(HorizontalInput::Left) => -RUN_SPEED,
            Some(HorizontalInput::Right) => RUN_SPEED,
            None => 0.0,
        };
    }

    /// Apply the jump impulse if grounded; no-op while airborne or when
    /// the session is not running
    pub fn jump(&mut self) {
        if self.state.phase == Phase::Running && self.state.grounded {
            self.state.velocity.y = JUMP_IMPULSE;
            self.state.grounded = false;
        }
    }

    /// Begin running. Does not reset state: re-entering from a terminal
    /// phase requires `reset` or `load_level` first.
    pub fn start(&mut self) {
        if self.state.phase == Phase::NotStarted {
            self.state.phase = Phase::Running;
        }
    }

    /// Reinitialize from the current level template
    pub fn reset(&mut self) {
        self.state = PhysicsState::from_level(&self.level);
    }

    /// Replace level and state wholesale (custom/editor level)
    pub fn load_level(&mut self, level: PhysicsLevel) {
        log::info!(
            "loading physics level: grid {}, {} food",
            level.grid_size,
            level.food.len()
        );
        self.state = PhysicsState::from_level(&level);
        self.level = level;
    }

    /// Advance one fixed timestep: gravity, collision-resolved movement,
    /// food consumption, then the completion and fall-off checks.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != Phase::Running {
            return events;
        }

        let state = &mut self.state;
        state.velocity.y = (state.velocity.y + GRAVITY * SIM_DT).min(TERMINAL_VELOCITY);

        let proposed = state.position + state.velocity * SIM_DT;
        let resolved = collision::resolve(&self.level, state.position, state.velocity, proposed);
        state.position = resolved.position;
        state.velocity = resolved.velocity;
        state.grounded = resolved.grounded;

        // Eat food within one tile on both axes
        let pos = state.position;
        let before = state.food.len();
        state
            .food
            .retain(|f| (f.x - pos.x).abs() >= TILE_SIZE || (f.y - pos.y).abs() >= TILE_SIZE);
        for _ in state.food.len()..before {
            events.push(GameEvent::FoodEaten);
        }

        if state.food.is_empty() {
            state.phase = Phase::Complete;
            events.push(GameEvent::Complete);
        } else if state.position.y > self.level.grid_size as f32 * TILE_SIZE {
            // Fell off the grid; emitted once, on the transition tick
            state.phase = Phase::Failed;
            events.push(GameEvent::Failed);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x8: actor on a solid floor with food three tiles to the right and
    /// a one-way platform overhead
    fn test_level() -> PhysicsLevel {
        PhysicsLevel::from_ascii(&[
            "........", //
            "........",
            "........",
            "--......",
            "........",
            "S..f....",
            "######..",
            "........",
        ])
    }

    fn started(level: PhysicsLevel) -> PhysicsEngine {
        let mut engine = PhysicsEngine::new(level);
        engine.start();
        engine
    }

    fn settle(engine: &mut PhysicsEngine) {
        for _ in 0..120 {
            engine.tick();
            if engine.state().grounded {
                return;
            }
        }
        panic!("actor never landed");
    }

    #[test]
    fn test_tick_is_noop_before_start() {
        let mut engine = PhysicsEngine::new(test_level());
        let before = engine.state().position;

        assert!(engine.tick().is_empty());
        assert_eq!(engine.state().position, before);
        assert_eq!(engine.state().phase, Phase::NotStarted);
    }

    #[test]
    fn test_actor_settles_onto_floor() {
        let mut engine = started(test_level());
        settle(&mut engine);

        let state = engine.state();
        // Bottom edge flush with the top of the floor row
        assert_eq!(state.position.y, 5.0 * TILE_SIZE);
        assert_eq!(state.velocity.y, 0.0);
        assert!(state.grounded);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut engine = started(test_level());

        // Airborne at spawn: jump is a no-op
        engine.jump();
        assert_eq!(engine.state().velocity.y, 0.0);

        settle(&mut engine);
        engine.jump();

        assert_eq!(engine.state().velocity.y, JUMP_IMPULSE);
        assert!(!engine.state().grounded);
    }

    #[test]
    fn test_jump_arc_rises_then_relands() {
        let mut engine = started(test_level());
        settle(&mut engine);
        let floor_y = engine.state().position.y;

        engine.jump();
        let mut min_y = floor_y;
        let mut landed = false;
        for _ in 0..240 {
            engine.tick();
            min_y = min_y.min(engine.state().position.y);
            if engine.state().grounded {
                landed = true;
                break;
            }
        }

        assert!(min_y < floor_y - TILE_SIZE, "jump never left the ground");
        assert!(landed, "actor never came back down");
        assert_eq!(engine.state().velocity.y, 0.0);
    }

    #[test]
    fn test_rising_passes_through_platform_then_lands_on_it() {
        let mut engine = started(test_level());
        settle(&mut engine);

        engine.jump();
        for _ in 0..240 {
            engine.tick();
            if engine.state().grounded {
                break;
            }
        }

        // The platform at row 3 catches the actor on the way down
        assert_eq!(engine.state().position.y, 2.0 * TILE_SIZE);
        assert!(engine.state().grounded);
    }

    #[test]
    fn test_food_is_eaten_on_contact_and_completes() {
        let mut engine = started(test_level());
        settle(&mut engine);
        engine.set_horizontal_input(Some(HorizontalInput::Right));

        let mut saw_food = false;
        let mut saw_complete = false;
        for _ in 0..240 {
            let events = engine.tick();
            saw_food |= events.contains(&GameEvent::FoodEaten);
            saw_complete |= events.contains(&GameEvent::Complete);
            if engine.state().is_terminal() {
                break;
            }
        }

        assert!(saw_food);
        assert!(saw_complete);
        assert_eq!(engine.state().phase, Phase::Complete);
        assert!(engine.state().food.is_empty());
    }

    #[test]
    fn test_fall_off_fails_exactly_once() {
        // No floor at all; food far away so the run can't complete
        let mut engine = started(PhysicsLevel::from_ascii(&[
            "S..f", //
            "...#",
            "....",
            "....",
        ]));

        let mut failures = 0;
        for _ in 0..600 {
            let events = engine.tick();
            failures += events.iter().filter(|&&e| e == GameEvent::Failed).count();
        }

        assert_eq!(failures, 1);
        assert_eq!(engine.state().phase, Phase::Failed);

        // Terminal ticks stay no-ops
        let frozen = engine.state().position;
        assert!(engine.tick().is_empty());
        assert_eq!(engine.state().position, frozen);
    }

    #[test]
    fn test_terminal_velocity_clamp() {
        let mut engine = started(PhysicsLevel::from_ascii(&[
            "S..f", //
            "...#",
            "....",
            "....",
        ]));

        for _ in 0..120 {
            engine.tick();
            assert!(engine.state().velocity.y <= crate::consts::TERMINAL_VELOCITY);
            if engine.state().is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn test_horizontal_input_sets_and_clears_velocity() {
        let mut engine = started(test_level());
        settle(&mut engine);

        engine.set_horizontal_input(Some(HorizontalInput::Left));
        assert_eq!(engine.state().velocity.x, -RUN_SPEED);
        engine.set_horizontal_input(None);
        assert_eq!(engine.state().velocity.x, 0.0);
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut engine = started(test_level());
        settle(&mut engine);
        engine.reset();

        let state = engine.state();
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.velocity, glam::Vec2::ZERO);
        assert_eq!(state.position.y, 5.0 * TILE_SIZE);
        assert!(!state.grounded);
    }

    #[test]
    fn test_jump_after_completion_is_noop() {
        let mut engine = started(test_level());
        settle(&mut engine);
        engine.set_horizontal_input(Some(HorizontalInput::Right));
        for _ in 0..240 {
            engine.tick();
            if engine.state().is_terminal() {
                break;
            }
        }
        assert_eq!(engine.state().phase, Phase::Complete);

        // Actor finished the run standing on the floor; the terminal state
        // must stay frozen even though it is still grounded
        engine.jump();
        assert_eq!(engine.state().velocity.y, 0.0);
        assert!(engine.state().grounded);
    }

    #[test]
    fn test_truncated_tile_grid_ticks_without_panicking() {
        // A permissively-loaded level whose tile vec is shorter than
        // grid_size²: missing rows read as air, so the actor just falls
        let mut level = test_level();
        level.tiles.truncate(level.tiles.len() / 2);

        let mut engine = PhysicsEngine::new(test_level());
        engine.load_level(level);
        engine.start();

        for _ in 0..600 {
            engine.tick();
        }
        assert_eq!(engine.state().phase, Phase::Failed);
    }

    #[test]
    fn test_terminal_phase_is_sticky() {
        let mut engine = started(test_level());
        engine.set_horizontal_input(Some(HorizontalInput::Right));

        let mut first_terminal = None;
        for _ in 0..600 {
            engine.tick();
            let phase = engine.state().phase;
            match first_terminal {
                None if engine.state().is_terminal() => first_terminal = Some(phase),
                Some(terminal) => assert_eq!(phase, terminal),
                None => {}
            }
        }
        assert_eq!(first_terminal, Some(Phase::Complete));
    }
}
