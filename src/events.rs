//! Fire-and-forget notifications emitted by the engines.

/// Advisory notification for audio/haptic/visual collaborators.
///
/// Carries no payload beyond its kind and never feeds back into engine
/// state. Mutating commands return the events produced by that tick; the
/// caller may react to them or drop them freely. Terminal events are
/// emitted exactly once, on the tick of transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A food cell was consumed this tick
    FoodEaten,
    /// The session reached its win state
    Complete,
    /// The session reached its fail state (collision, exhausted budget,
    /// or falling off the grid)
    Failed,
}
