use crate::models::Direction;

/// Per-frame input state.
pub trait Input {
    /// Directional keys currently held.
    fn direction(&self) -> Direction;

    /// The window was closed or the player asked to leave.
    fn quit_requested(&self) -> bool;
}
